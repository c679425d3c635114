// Gameplay tuning, kept apart from runtime/server configuration.

pub mod cannon_ball;
pub mod map;
pub mod ship;

pub use cannon_ball::CannonBallTuning;
pub use map::MapTuning;
pub use ship::ShipTuning;

use crate::domain::rules::GameRules;

/// Everything a World needs at construction time.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameConfig {
    pub map: MapTuning,
    pub ship: ShipTuning,
    pub cannon_ball: CannonBallTuning,
    pub rules: GameRules,
}
