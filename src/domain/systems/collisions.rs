use crate::domain::geometry::circles_overlap;
use crate::domain::ship::HitEffect;
use crate::domain::{CannonBall, Ship};

/// A resolved ship/cannonball contact, as indices into the slices passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub ship: usize,
    pub ball: usize,
    pub effect: HitEffect,
}

/// Pairwise ship vs cannonball scan (O(S*B)), ship-major.
///
/// A ball resolves at most one hit and never hits the ship that fired it.
/// `respond` applies the hit to the ship; a ship that sinks takes no further hits
/// this pass. Balls are not removed here; callers drop every `Contact::ball` afterwards.
pub fn resolve_collisions<F>(
    ships: &mut [Ship],
    balls: &[CannonBall],
    ship_radius: f64,
    ball_radius: f64,
    mut respond: F,
) -> Vec<Contact>
where
    F: FnMut(&mut Ship) -> HitEffect,
{
    let mut consumed = vec![false; balls.len()];
    let mut contacts = Vec::new();

    for (ship_idx, ship) in ships.iter_mut().enumerate() {
        for (ball_idx, ball) in balls.iter().enumerate() {
            if !ship.is_alive() {
                break;
            }
            if consumed[ball_idx] || ball.fired_by() == ship.player_id() {
                continue;
            }
            if !circles_overlap(ship.position(), ship_radius, ball.position(), ball_radius) {
                continue;
            }

            consumed[ball_idx] = true;
            let effect = respond(ship);
            contacts.push(Contact {
                ship: ship_idx,
                ball: ball_idx,
                effect,
            });
        }
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::Position;
    use crate::domain::rules::HitPolicy;

    fn damage(ship: &mut Ship) -> HitEffect {
        ship.handle_collision(HitPolicy::Damage, 3, || Position::ORIGIN)
    }

    fn sink(ship: &mut Ship) -> HitEffect {
        ship.handle_collision(HitPolicy::Sink, 3, || Position::ORIGIN)
    }

    #[test]
    fn owner_is_never_hit() {
        let mut ships = vec![Ship::new("a", Position::new(100.0, 100.0), 3)];
        let balls = vec![CannonBall::new(1, "a", Position::new(100.0, 100.0), 0.0)];
        let contacts = resolve_collisions(&mut ships, &balls, 20.0, 5.0, damage);
        assert!(contacts.is_empty());
        assert_eq!(ships[0].health(), 3);
    }

    #[test]
    fn ball_hits_only_the_first_ship_in_order() {
        let mut ships = vec![
            Ship::new("b", Position::new(100.0, 100.0), 3),
            Ship::new("c", Position::new(100.0, 100.0), 3),
        ];
        let balls = vec![CannonBall::new(1, "a", Position::new(110.0, 100.0), 0.0)];
        let contacts = resolve_collisions(&mut ships, &balls, 20.0, 5.0, damage);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].ship, 0);
        assert_eq!(ships[0].health(), 2);
        assert_eq!(ships[1].health(), 3);
    }

    #[test]
    fn surviving_ship_takes_several_hits() {
        let mut ships = vec![Ship::new("b", Position::new(100.0, 100.0), 3)];
        let balls = vec![
            CannonBall::new(1, "a", Position::new(90.0, 100.0), 0.0),
            CannonBall::new(2, "a", Position::new(110.0, 100.0), 0.0),
        ];
        let contacts = resolve_collisions(&mut ships, &balls, 20.0, 5.0, damage);
        assert_eq!(contacts.iter().map(|c| c.ball).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(ships[0].health(), 1);
    }

    #[test]
    fn sunk_ship_stops_absorbing_balls() {
        let mut ships = vec![
            Ship::new("b", Position::new(100.0, 100.0), 3),
            Ship::new("c", Position::new(100.0, 100.0), 3),
        ];
        let balls = vec![
            CannonBall::new(1, "a", Position::new(100.0, 100.0), 0.0),
            CannonBall::new(2, "a", Position::new(100.0, 100.0), 0.0),
        ];
        let contacts = resolve_collisions(&mut ships, &balls, 20.0, 5.0, sink);
        assert_eq!(contacts.len(), 2);
        assert_eq!((contacts[0].ship, contacts[0].ball), (0, 0));
        assert_eq!((contacts[1].ship, contacts[1].ball), (1, 1));
        assert!(!ships[0].is_alive() && !ships[1].is_alive());
    }

    #[test]
    fn distant_ball_misses() {
        let mut ships = vec![Ship::new("b", Position::new(100.0, 100.0), 3)];
        let balls = vec![CannonBall::new(1, "a", Position::new(126.0, 100.0), 0.0)];
        assert!(resolve_collisions(&mut ships, &balls, 20.0, 5.0, damage).is_empty());
    }
}
