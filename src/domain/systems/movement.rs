use crate::domain::rules::BoundsPolicy;
use crate::domain::tuning::{MapTuning, ShipTuning};
use crate::domain::{CannonBall, Ship, geometry};

#[derive(Debug, Default)]
pub struct ShipMotion {
    pub changed: bool,
    /// Indices of ships that sank by leaving the map.
    pub sunk: Vec<usize>,
}

#[derive(Debug, Default)]
pub struct CannonBallMotion {
    pub moved: bool,
    pub expired: usize,
}

/// Integrates every live ship and applies the map-edge policy.
pub fn tick_ships(
    ships: &mut [Ship],
    dt: f64,
    tuning: &ShipTuning,
    map: &MapTuning,
    bounds: BoundsPolicy,
) -> ShipMotion {
    let mut motion = ShipMotion::default();

    for (idx, ship) in ships.iter_mut().enumerate() {
        let previous = ship.position();
        let previous_angle = ship.angle();
        if !ship.tick_motion(dt, tuning) {
            continue;
        }

        if geometry::in_bounds(ship.position(), map.width, map.height) {
            motion.changed = true;
            continue;
        }

        match bounds {
            BoundsPolicy::Sink => {
                ship.sink();
                motion.sunk.push(idx);
                motion.changed = true;
            }
            BoundsPolicy::Block => {
                ship.restore_position(previous);
                // Only the rotation survives.
                motion.changed |= ship.angle() != previous_angle;
            }
        }
    }

    motion
}

/// Integrates every cannonball, then drops the ones that left the map.
pub fn tick_cannon_balls(
    balls: &mut Vec<CannonBall>,
    dt: f64,
    speed: f64,
    map: &MapTuning,
) -> CannonBallMotion {
    let mut motion = CannonBallMotion::default();

    for ball in balls.iter_mut() {
        motion.moved |= ball.tick_motion(dt, speed);
    }

    let before = balls.len();
    balls.retain(|ball| !ball.is_out_of_bounds(map.width, map.height));
    motion.expired = before - balls.len();

    motion
}
