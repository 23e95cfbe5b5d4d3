//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (platforms in creation order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod level;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{
    clamp_to_field, distance, rect_circle_intersect, rect_shape_intersect,
    rect_triangle_intersect, rects_intersect,
};
pub use geometry::{Circle, Field, Rect, Shape, Triangle};
pub use level::{Goal, Hazard, Level, Platform, generate};
pub use snapshot::Snapshot;
pub use state::{Player, RunPhase, RunState};
pub use tick::{Contact, TickEvent, TickInput, resolve, tick};
