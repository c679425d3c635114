// Domain layer: core simulation types and rules.

pub mod cannon_ball;
pub mod errors;
pub mod geometry;
pub mod ports;
pub mod rules;
pub mod ship;
pub mod state;
pub mod systems;
pub mod tuning;
pub mod world;

pub use cannon_ball::CannonBall;
pub use errors::CommandError;
pub use geometry::Position;
pub use ports::{Clock, RandomSource};
pub use rules::{BoundsPolicy, ChangeTracking, GameRules, HitPolicy, JoinPolicy, SpawnPolicy};
pub use ship::Ship;
pub use state::{
    CannonBallSnapshot, Command, Hit, Orientation, PlayerId, PlayerView, ShipSnapshot,
    TickOutcome,
};
pub use tuning::GameConfig;
pub use world::World;
