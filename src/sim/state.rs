//! Run state and core simulation types
//!
//! One `RunState` owns everything a run needs: the player, the current
//! level, the counters and the seeded RNG used for level generation.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::clamp_to_field;
use super::geometry::{Field, Rect};
use super::level::{self, Level};
use crate::tuning::Tuning;

/// Whether the run still accepts ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Active,
    /// Life budget exhausted; absorbing
    Terminal,
}

/// The player-controlled box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Positive = moving up (screen y decreases)
    pub vertical_velocity: i32,
    /// Resting on a platform or the floor after the last tick
    pub grounded: bool,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vertical_velocity: 0,
            grounded: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Move back to `spawn` without recreating the player
    pub fn respawn(&mut self, spawn: Vec2, reset_velocity: bool) {
        self.pos = spawn;
        if reset_velocity {
            self.vertical_velocity = 0;
        }
    }
}

/// Complete run state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct RunState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub field: Field,
    pub phase: RunPhase,
    pub player: Player,
    pub level: Level,
    /// Fixed at first-level generation, never moved afterwards
    pub spawn: Vec2,
    pub deaths: u32,
    pub levels_completed: u32,
    /// Resolver invocations so far
    pub time_ticks: u64,
}

impl RunState {
    /// Start a run on `field` and generate the first level
    pub fn new(seed: u64, field: Field, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let size = tuning.physics.player_size;
        let spawn = level::first_spawn(&field, size);
        let level = level::generate(0, spawn, &field, size, &tuning.generator, &mut rng);

        log::info!(
            "Run started (seed {}), field {}x{}, spawn ({:.0}, {:.0})",
            seed,
            field.width,
            field.height,
            level.spawn.x,
            level.spawn.y
        );

        // A zero life budget is spent before the first tick
        let phase = if tuning.life_budget == 0 {
            log::warn!("Life budget is 0, run starts in game over");
            RunPhase::Terminal
        } else {
            RunPhase::Active
        };

        Self {
            seed,
            rng,
            player: Player::new(level.spawn, size),
            spawn: level.spawn,
            level,
            tuning,
            field,
            phase,
            deaths: 0,
            levels_completed: 0,
            time_ticks: 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == RunPhase::Terminal
    }

    /// Final levels-completed count, once the run is over
    pub fn terminal_levels(&self) -> Option<u32> {
        self.is_terminal().then_some(self.levels_completed)
    }

    /// Lives left for display; never negative
    pub fn lives_remaining(&self) -> u32 {
        self.tuning.life_budget.saturating_sub(self.deaths)
    }

    /// Where the player reappears: the spawn point, kept inside the current
    /// field (which may have shrunk since the spawn was fixed)
    pub fn spawn_placement(&self) -> Vec2 {
        clamp_to_field(self.spawn, self.player.size, &self.field)
    }

    /// Replace the level wholesale and put the player back on the spawn point
    pub fn regenerate_level(&mut self) {
        self.level = level::generate(
            self.levels_completed,
            self.spawn,
            &self.field,
            self.player.size,
            &self.tuning.generator,
            &mut self.rng,
        );
        self.player.pos = self.spawn_placement();
    }

    /// Goal reached: next level, same spawn, same lives
    pub fn complete_level(&mut self) {
        self.levels_completed += 1;
        log::info!("Level {} cleared", self.levels_completed);
        self.regenerate_level();
    }

    /// Spike hit: spend a life, respawn, end the run on the last one
    pub fn lose_life(&mut self) {
        self.deaths += 1;
        let placement = self.spawn_placement();
        self.player.respawn(placement, self.tuning.respawn_resets_velocity);
        log::info!("Spiked! {} lives left", self.lives_remaining());

        if self.deaths >= self.tuning.life_budget {
            self.phase = RunPhase::Terminal;
            log::info!("Game over after {} levels", self.levels_completed);
        }
    }

    /// Host resized the field: keep the player inside the new bounds
    pub fn resize(&mut self, field: Field) {
        self.field = field;
        self.player.pos = clamp_to_field(self.player.pos, self.player.size, &self.field);
        log::debug!("Field resized to {}x{}", field.width, field.height);
    }
}
