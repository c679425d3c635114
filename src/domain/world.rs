// Authoritative per-game state and the tick pipeline.

use crate::domain::errors::CommandError;
use crate::domain::geometry::Position;
use crate::domain::ports::RandomSource;
use crate::domain::rules::{ChangeTracking, JoinPolicy, SpawnPolicy};
use crate::domain::ship::HitEffect;
use crate::domain::state::{
    CannonBallSnapshot, Command, Hit, Orientation, PlayerView, ShipSnapshot, TickOutcome,
};
use crate::domain::systems::{collisions, movement};
use crate::domain::tuning::{GameConfig, MapTuning};
use crate::domain::{CannonBall, Ship};
use tracing::{debug, info};

/// One game: every ship and cannonball, plus the last-modified stamp consumers
/// compare against to decide whether a state push is due.
///
/// A World is only ever mutated by one caller at a time; commands and ticks are
/// interleaved by the host, never run concurrently.
#[derive(Debug, Clone)]
pub struct World {
    config: GameConfig,
    ships: Vec<Ship>,
    cannon_balls: Vec<CannonBall>,
    updated_at: u64,
    // Bumped on every stamp, so same-millisecond changes stay distinguishable.
    revision: u64,
}

impl World {
    /// Starts a game with a single ship for `creator` and nothing in flight.
    pub fn create_game<R>(creator: &str, config: GameConfig, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let mut world = Self {
            config,
            ships: Vec::new(),
            cannon_balls: Vec::new(),
            updated_at: 0,
            revision: 0,
        };
        world.spawn_ship(creator, rng);
        world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn updated_at(&self) -> u64 {
        self.updated_at
    }

    /// Number of modifications so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Live ships in join order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Cannonballs in flight, oldest first.
    pub fn cannon_balls(&self) -> &[CannonBall] {
        &self.cannon_balls
    }

    pub fn ship(&self, player_id: &str) -> Option<&Ship> {
        self.ships.iter().find(|s| s.player_id() == player_id)
    }

    pub fn join<R>(&mut self, player_id: &str, now: u64, rng: &mut R) -> Result<(), CommandError>
    where
        R: RandomSource + ?Sized,
    {
        if self.ship_index(player_id).is_some() {
            return Err(CommandError::AlreadyJoined);
        }
        self.spawn_ship(player_id, rng);
        self.touch(now);
        Ok(())
    }

    /// Routes a player command. A failed command leaves the world untouched.
    pub fn apply_command<R>(
        &mut self,
        player_id: &str,
        command: Command,
        now: u64,
        rng: &mut R,
    ) -> Result<(), CommandError>
    where
        R: RandomSource + ?Sized,
    {
        let result = match command {
            Command::Join => self.join(player_id, now, rng),
            Command::Leave => self.leave(player_id, now),
            Command::SetOrientation {
                orientation,
                accelerating,
            } => self.set_orientation(player_id, orientation, accelerating, now, rng),
            Command::FireCannon => self.fire_cannon(player_id, now, rng),
        };

        if let Err(error) = &result {
            debug!(player_id, ?command, %error, "command rejected");
        }
        result
    }

    pub fn set_orientation<R>(
        &mut self,
        player_id: &str,
        orientation: Orientation,
        accelerating: bool,
        now: u64,
        rng: &mut R,
    ) -> Result<(), CommandError>
    where
        R: RandomSource + ?Sized,
    {
        let Some(idx) = self.commanded_ship(player_id, now, rng)? else {
            return Ok(());
        };
        // Steering intent is not part of any player view, so it does not stamp.
        self.ships[idx].set_orientation(orientation, accelerating)
    }

    pub fn fire_cannon<R>(&mut self, player_id: &str, now: u64, rng: &mut R) -> Result<(), CommandError>
    where
        R: RandomSource + ?Sized,
    {
        let Some(idx) = self.commanded_ship(player_id, now, rng)? else {
            return Ok(());
        };

        let reload = self.config.ship.reload_cooldown_ms;
        self.ships[idx].fire(now, reload)?;

        let position = self.ships[idx].position();
        for angle in self.ships[idx].broadside_angles() {
            let id = self.next_cannon_ball_id(rng);
            self.cannon_balls
                .push(CannonBall::new(id, player_id, position, angle));
        }
        self.touch(now);
        Ok(())
    }

    /// Removes the player's ship and every cannonball it still has in flight.
    pub fn leave(&mut self, player_id: &str, now: u64) -> Result<(), CommandError> {
        let idx = self.ship_index(player_id).ok_or(CommandError::NotJoined)?;
        self.ships.remove(idx);
        self.cannon_balls.retain(|b| b.fired_by() != player_id);
        info!(player_id, "player left");
        self.touch(now);
        Ok(())
    }

    /// Runs one tick: ships, cannonballs, culling, collisions, then the stamp.
    pub fn advance<R>(&mut self, dt: f64, now: u64, rng: &mut R) -> TickOutcome
    where
        R: RandomSource + ?Sized,
    {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let GameConfig {
            map,
            ship: ship_tuning,
            cannon_ball: ball_tuning,
            rules,
        } = self.config;
        let balls_in_flight = !self.cannon_balls.is_empty();

        let ship_motion =
            movement::tick_ships(&mut self.ships, dt, &ship_tuning, &map, rules.bounds);
        let mut sunk: Vec<String> = Vec::new();
        for &idx in &ship_motion.sunk {
            let player_id = self.ships[idx].player_id();
            info!(player_id, "ship sailed off the map");
            sunk.push(player_id.to_string());
        }
        let ball_motion =
            movement::tick_cannon_balls(&mut self.cannon_balls, dt, ball_tuning.speed, &map);

        let contacts = collisions::resolve_collisions(
            &mut self.ships,
            &self.cannon_balls,
            ship_tuning.radius,
            ball_tuning.radius,
            |ship| {
                ship.handle_collision(rules.hit, ship_tuning.max_health, || {
                    spawn_point(rules.spawn, &map, rng)
                })
            },
        );

        let mut struck = vec![false; self.cannon_balls.len()];
        let mut hits = Vec::with_capacity(contacts.len());
        for contact in &contacts {
            let ball = &self.cannon_balls[contact.ball];
            let hit = Hit {
                victim: self.ships[contact.ship].player_id().to_string(),
                shooter: ball.fired_by().to_string(),
                cannon_ball_id: ball.id(),
            };
            info!(
                victim = %hit.victim,
                shooter = %hit.shooter,
                cannon_ball_id = hit.cannon_ball_id,
                effect = ?contact.effect,
                "ship hit"
            );
            if contact.effect == HitEffect::Sunk {
                info!(player_id = %hit.victim, "ship sunk");
                sunk.push(hit.victim.clone());
            }
            struck[contact.ball] = true;
            hits.push(hit);
        }
        let mut flags = struck.into_iter();
        self.cannon_balls
            .retain(|_| !flags.next().unwrap_or(false));

        self.ships.retain(Ship::is_alive);

        let mut modified = ship_motion.changed
            || ball_motion.moved
            || ball_motion.expired > 0
            || !hits.is_empty()
            || !sunk.is_empty();
        if rules.change_tracking == ChangeTracking::EveryUpdate {
            modified |= balls_in_flight;
        }
        if modified {
            self.touch(now);
        }

        TickOutcome {
            modified,
            updated_at: self.updated_at,
            hits,
            sunk,
            expired: ball_motion.expired,
        }
    }

    /// Read-only projection for one player. Reload timers and steering intent stay private.
    pub fn snapshot_for(&self, player_id: &str) -> PlayerView {
        PlayerView {
            viewer: player_id.to_string(),
            ships: self.ships.iter().map(ShipSnapshot::from).collect(),
            cannon_balls: self
                .cannon_balls
                .iter()
                .map(CannonBallSnapshot::from)
                .collect(),
            updated_at: self.updated_at,
        }
    }

    fn ship_index(&self, player_id: &str) -> Option<usize> {
        self.ships.iter().position(|s| s.player_id() == player_id)
    }

    /// Resolves the ship a command applies to.
    ///
    /// `Ok(None)` means the lazy join policy spawned a fresh ship and the command is spent.
    fn commanded_ship<R>(
        &mut self,
        player_id: &str,
        now: u64,
        rng: &mut R,
    ) -> Result<Option<usize>, CommandError>
    where
        R: RandomSource + ?Sized,
    {
        if let Some(idx) = self.ship_index(player_id) {
            return Ok(Some(idx));
        }
        match self.config.rules.join {
            JoinPolicy::Explicit => Err(CommandError::NotJoined),
            JoinPolicy::Lazy => {
                self.spawn_ship(player_id, rng);
                self.touch(now);
                Ok(None)
            }
        }
    }

    fn spawn_ship<R>(&mut self, player_id: &str, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        let position = spawn_point(self.config.rules.spawn, &self.config.map, rng);
        info!(player_id, x = position.x, y = position.y, "player joined");
        self.ships
            .push(Ship::new(player_id, position, self.config.ship.max_health));
    }

    fn next_cannon_ball_id<R>(&self, rng: &mut R) -> u32
    where
        R: RandomSource + ?Sized,
    {
        loop {
            let id = rng.next_u32();
            if !self.cannon_balls.iter().any(|b| b.id() == id) {
                return id;
            }
        }
    }

    fn touch(&mut self, now: u64) {
        self.updated_at = self.updated_at.max(now);
        self.revision += 1;
    }
}

fn spawn_point<R>(policy: SpawnPolicy, map: &MapTuning, rng: &mut R) -> Position
where
    R: RandomSource + ?Sized,
{
    match policy {
        SpawnPolicy::Origin => Position::ORIGIN,
        SpawnPolicy::Random => Position::new(rng.next_unit() * map.width, rng.next_unit() * map.height),
    }
}
