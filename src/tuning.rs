//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here, so a host can
//! ship a different balance without touching the sim. Defaults reproduce the
//! classic game exactly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Per-tick movement constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Horizontal displacement per tick while a move key is held
    pub move_step: f32,
    /// Velocity lost every tick
    pub gravity: i32,
    /// Velocity set by a grounded jump
    pub jump_impulse: i32,
    /// Player bounding box
    pub player_size: Vec2,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            move_step: MOVE_STEP,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }
}

/// Level layout constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorTuning {
    /// Platforms in the spawn-to-goal chain
    pub chain_platforms: u32,
    pub platform_size: Vec2,

    /// First level: platform under the spawn point
    pub first_platform_size: Vec2,
    /// How far the first platform sits below the spawn point
    pub first_platform_drop: f32,
    /// How far the first platform starts left of the spawn point
    pub first_platform_inset: f32,
    /// First level: goal offset (left of center, up from the floor)
    pub first_goal_offset: Vec2,

    /// Goal bounding box side
    pub goal_size: f32,
    pub goal_min_distance: f32,

    /// A chain platform is rejected only when it is closer than both of these
    pub spawn_clear_x: f32,
    pub spawn_clear_y: f32,

    /// Spike chance per chain platform (percent)
    pub hazard_percent: u32,
    /// Spike offset from the platform's left edge, half-open
    pub hazard_offset_min: i32,
    pub hazard_offset_max: i32,
    pub hazard_base: f32,
    pub hazard_height: f32,

    /// Extra platforms under the goal, inclusive range
    pub safe_platforms_min: u32,
    pub safe_platforms_max: u32,
    /// Horizontal jitter around the goal, half-open `[-x, x)`
    pub safe_jitter_x: i32,
    /// Drop below the goal, half-open `[min, max)`
    pub safe_drop_min: i32,
    pub safe_drop_max: i32,

    /// Retry bound for rejection sampling
    pub max_attempts: u32,
}

impl Default for GeneratorTuning {
    fn default() -> Self {
        Self {
            chain_platforms: CHAIN_PLATFORMS,
            platform_size: Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT),
            first_platform_size: Vec2::new(100.0, PLATFORM_HEIGHT),
            first_platform_drop: 20.0,
            first_platform_inset: 40.0,
            first_goal_offset: Vec2::new(100.0, 50.0),
            goal_size: GOAL_SIZE,
            goal_min_distance: GOAL_MIN_DISTANCE,
            spawn_clear_x: 100.0,
            spawn_clear_y: 80.0,
            hazard_percent: HAZARD_PERCENT,
            hazard_offset_min: 10,
            hazard_offset_max: 70,
            hazard_base: HAZARD_BASE,
            hazard_height: HAZARD_HEIGHT,
            safe_platforms_min: 2,
            safe_platforms_max: 3,
            safe_jitter_x: 60,
            safe_drop_min: 40,
            safe_drop_max: 80,
            max_attempts: MAX_SAMPLE_ATTEMPTS,
        }
    }
}

/// Complete balance sheet for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Deaths allowed before the run ends
    pub life_budget: u32,
    /// Zero vertical velocity when respawning after a spike
    pub respawn_resets_velocity: bool,
    pub physics: PhysicsTuning,
    pub generator: GeneratorTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            life_budget: LIFE_BUDGET,
            respawn_resets_velocity: false,
            physics: PhysicsTuning::default(),
            generator: GeneratorTuning::default(),
        }
    }
}
