// Cannonball: straight-line flight from the firing ship.

use crate::domain::geometry::{Position, advance_position, in_bounds};

#[derive(Debug, Clone)]
pub struct CannonBall {
    id: u32,
    fired_by: String,
    position: Position,
    angle: f64,
}

impl CannonBall {
    pub fn new(id: u32, fired_by: impl Into<String>, position: Position, angle: f64) -> Self {
        Self {
            id,
            fired_by: fired_by.into(),
            position,
            angle,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn fired_by(&self) -> &str {
        &self.fired_by
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Returns whether the ball actually moved.
    pub fn tick_motion(&mut self, dt: f64, speed: f64) -> bool {
        let next = advance_position(self.position, self.angle, speed, dt);
        let moved = next != self.position;
        self.position = next;
        moved
    }

    pub fn is_out_of_bounds(&self, map_width: f64, map_height: f64) -> bool {
        !in_bounds(self.position, map_width, map_height)
    }
}
