/// Gameplay tuning for cannonballs.

#[derive(Debug, Clone, Copy)]
pub struct CannonBallTuning {
    /// Travel speed in pixels per second.
    pub speed: f64,

    /// World-space collision radius in pixels.
    pub radius: f64,
}

impl Default for CannonBallTuning {
    fn default() -> Self {
        Self {
            speed: 400.0,
            radius: 5.0,
        }
    }
}
