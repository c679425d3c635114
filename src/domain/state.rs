// Domain-level commands, tick results and read-only snapshot types.

use crate::domain::{CannonBall, Ship};

pub type PlayerId = String;

/// Turning intent for a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Counter-clockwise on screen (heading decreases).
    Left,
    /// Clockwise on screen (heading increases).
    Right,
    /// Hold the current heading.
    Forward,
}

/// Player-issued intent, already validated by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Join,
    SetOrientation {
        orientation: Orientation,
        accelerating: bool,
    },
    FireCannon,
    Leave,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShipSnapshot {
    pub player_id: PlayerId,
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub health: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CannonBallSnapshot {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

/// What a single player is allowed to see of the world.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub viewer: PlayerId,
    pub ships: Vec<ShipSnapshot>,
    pub cannon_balls: Vec<CannonBallSnapshot>,
    pub updated_at: u64,
}

/// A cannonball striking a ship it was not fired by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub victim: PlayerId,
    pub shooter: PlayerId,
    pub cannon_ball_id: u32,
}

/// Result of one `World::advance` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub modified: bool,
    pub updated_at: u64,
    pub hits: Vec<Hit>,
    /// Ships removed this tick, by hit or by leaving the map.
    pub sunk: Vec<PlayerId>,
    /// Cannonballs removed for leaving the map.
    pub expired: usize,
}

impl From<&Ship> for ShipSnapshot {
    fn from(ship: &Ship) -> Self {
        let position = ship.position();
        Self {
            player_id: ship.player_id().to_string(),
            x: position.x,
            y: position.y,
            angle: ship.angle(),
            health: ship.health(),
        }
    }
}

impl From<&CannonBall> for CannonBallSnapshot {
    fn from(ball: &CannonBall) -> Self {
        let position = ball.position();
        Self {
            id: ball.id(),
            x: position.x,
            y: position.y,
        }
    }
}
