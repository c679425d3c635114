/// Gameplay tuning for player-controlled ships.

#[derive(Debug, Clone, Copy)]
pub struct ShipTuning {
    /// Forward speed in pixels per second while accelerating.
    pub linear_speed: f64,

    /// Rotation speed in radians per second.
    pub angular_speed: f64,

    /// World-space collision radius in pixels.
    pub radius: f64,

    /// Minimum time between two broadsides.
    pub reload_cooldown_ms: u64,

    /// Hits a ship absorbs before sinking (damage hit policy only).
    pub max_health: u32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            linear_speed: 100.0,
            angular_speed: 1.5,
            radius: 20.0,
            reload_cooldown_ms: 5000,
            max_health: 3,
        }
    }
}
