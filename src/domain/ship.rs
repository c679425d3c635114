// Player ship: steering intent, motion, reload timer and hit response.

use crate::domain::errors::CommandError;
use crate::domain::geometry::{Position, advance_position};
use crate::domain::rules::HitPolicy;
use crate::domain::state::Orientation;
use crate::domain::tuning::ShipTuning;
use std::f64::consts::FRAC_PI_2;

/// Consequence of a single cannonball hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitEffect {
    Sunk,
    Respawned,
    Damaged { health: u32 },
}

#[derive(Debug, Clone)]
pub struct Ship {
    player_id: String,
    position: Position,
    angle: f64,
    alive: bool,
    health: u32,

    // Steering and combat state (never sent to clients).
    orientation: Orientation,
    accelerating: bool,
    last_fired_at: Option<u64>,
}

impl Ship {
    pub fn new(player_id: impl Into<String>, position: Position, health: u32) -> Self {
        Self {
            player_id: player_id.into(),
            position,
            angle: 0.0,
            alive: true,
            health,
            orientation: Orientation::Forward,
            accelerating: false,
            last_fired_at: None,
        }
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn last_fired_at(&self) -> Option<u64> {
        self.last_fired_at
    }

    /// Records the steering intent applied on following ticks.
    pub fn set_orientation(
        &mut self,
        orientation: Orientation,
        accelerating: bool,
    ) -> Result<(), CommandError> {
        if !self.alive {
            return Err(CommandError::InvalidAction);
        }
        self.orientation = orientation;
        self.accelerating = accelerating;
        Ok(())
    }

    /// Applies rotation then translation for `dt` seconds.
    /// Returns whether the position or angle changed.
    pub fn tick_motion(&mut self, dt: f64, tuning: &ShipTuning) -> bool {
        if !self.alive || dt <= 0.0 {
            return false;
        }

        let turn = match self.orientation {
            Orientation::Left => -1.0,
            Orientation::Right => 1.0,
            Orientation::Forward => 0.0,
        };
        let before = (self.position, self.angle);

        self.angle += turn * tuning.angular_speed * dt;
        if self.accelerating {
            self.position = advance_position(self.position, self.angle, tuning.linear_speed, dt);
        }

        before != (self.position, self.angle)
    }

    /// Puts the ship back where it was before a rejected translation.
    pub(crate) fn restore_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Starts a reload if the previous one has elapsed.
    ///
    /// On success the caller spawns one cannonball per angle in [`Ship::broadside_angles`].
    pub fn fire(&mut self, now: u64, reload_cooldown_ms: u64) -> Result<(), CommandError> {
        if !self.alive {
            return Err(CommandError::InvalidAction);
        }
        if let Some(last) = self.last_fired_at {
            // A clock that steps backwards counts as zero elapsed time.
            if now.saturating_sub(last) < reload_cooldown_ms {
                return Err(CommandError::Reloading);
            }
        }
        self.last_fired_at = Some(now);
        Ok(())
    }

    /// Headings of the two cannonballs of a broadside, starboard first.
    pub fn broadside_angles(&self) -> [f64; 2] {
        [self.angle + FRAC_PI_2, self.angle - FRAC_PI_2]
    }

    /// Applies one hit. `spawn` is only called by the respawn policy.
    pub fn handle_collision(
        &mut self,
        policy: HitPolicy,
        max_health: u32,
        spawn: impl FnOnce() -> Position,
    ) -> HitEffect {
        match policy {
            HitPolicy::Sink => self.sink(),
            HitPolicy::Respawn => {
                self.position = spawn();
                self.angle = 0.0;
                self.health = max_health;
                self.orientation = Orientation::Forward;
                self.accelerating = false;
                HitEffect::Respawned
            }
            HitPolicy::Damage => {
                self.health = self.health.saturating_sub(1);
                if self.health == 0 {
                    self.sink()
                } else {
                    HitEffect::Damaged {
                        health: self.health,
                    }
                }
            }
        }
    }

    pub(crate) fn sink(&mut self) -> HitEffect {
        self.alive = false;
        self.health = 0;
        self.accelerating = false;
        HitEffect::Sunk
    }
}
