// Game-rule policies selected once, when a World is constructed.

/// What happens when a player without a ship sends a ship command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinPolicy {
    /// Spawn a ship for the player; the triggering command is consumed by the spawn.
    #[default]
    Lazy,
    /// Reject with `NotJoined` until the player sends `Join`.
    Explicit,
}

/// Where new (or respawned) ships are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpawnPolicy {
    #[default]
    Origin,
    /// Uniform point inside the map, drawn from the caller's random source.
    Random,
}

/// What happens when a ship's movement would carry it off the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// The ship is removed.
    #[default]
    Sink,
    /// The translation is discarded; rotation still applies.
    Block,
}

/// Response of a ship to a cannonball hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitPolicy {
    /// Removed on the first hit.
    Sink,
    /// Moved back to a spawn point with full health.
    Respawn,
    /// Loses one health per hit and sinks at zero.
    #[default]
    Damage,
}

/// When `updated_at` advances during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangeTracking {
    /// Only when a position or angle changed, or an entity appeared or disappeared.
    #[default]
    Visible,
    /// Additionally whenever any cannonball is in flight, even if it did not move.
    EveryUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameRules {
    pub join: JoinPolicy,
    pub spawn: SpawnPolicy,
    pub bounds: BoundsPolicy,
    pub hit: HitPolicy,
    pub change_tracking: ChangeTracking,
}
