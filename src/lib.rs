//! Ledgehop - a procedurally generated 2D platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, level generation, physics, run state)
//! - `tuning`: Data-driven game balance
//! - `settings`: Host settings (field size, seed, tick rate)

pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::Settings;
pub use tuning::{GeneratorTuning, PhysicsTuning, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 60;

    /// Default play field
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Deaths allowed before the run ends
    pub const LIFE_BUDGET: u32 = 10;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    /// Horizontal displacement per tick while a move key is held
    pub const MOVE_STEP: f32 = 7.0;
    /// Velocity lost every tick (positive velocity = upward)
    pub const GRAVITY: i32 = 1;
    /// Velocity set by a grounded jump
    pub const JUMP_IMPULSE: i32 = 20;

    /// Platforms in a generated chain
    pub const CHAIN_PLATFORMS: u32 = 14;
    pub const PLATFORM_WIDTH: f32 = 80.0;
    pub const PLATFORM_HEIGHT: f32 = 10.0;

    /// Goal bounding box side
    pub const GOAL_SIZE: f32 = 30.0;
    /// Minimum spawn-to-goal distance on generated levels
    pub const GOAL_MIN_DISTANCE: f32 = 150.0;

    /// Chance (percent) that a chain platform carries a spike
    pub const HAZARD_PERCENT: u32 = 40;
    pub const HAZARD_BASE: f32 = 20.0;
    pub const HAZARD_HEIGHT: f32 = 10.0;

    /// Retry bound for every rejection sampler
    pub const MAX_SAMPLE_ATTEMPTS: u32 = 64;
}
