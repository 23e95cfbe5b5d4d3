//! Fixed timestep simulation tick
//!
//! `resolve` is the pure physics step: (player, level, input, field) in, new
//! player plus contact out. `tick` drives it from the run state and applies
//! the contact to lives and level progression.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{
    clamp_to_field, rect_shape_intersect, rect_triangle_intersect, rects_intersect,
};
use super::geometry::{Field, Rect};
use super::level::Level;
use super::state::{Player, RunState};
use crate::tuning::PhysicsTuning;

/// Held movement keys for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// What the player touched after moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    None,
    ReachedGoal,
    HitHazard,
}

/// Outcome of one tick, for hosts that react to events (HUD, sound, logs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    None,
    ReachedGoal,
    HitHazard,
    /// The hazard hit that spent the last life
    GameOver,
}

/// Advance the run by one fixed timestep
///
/// A terminal run is left untouched.
pub fn tick(state: &mut RunState, input: &TickInput) -> TickEvent {
    if state.is_terminal() {
        return TickEvent::None;
    }

    state.time_ticks += 1;

    let (player, contact) = resolve(
        &state.player,
        &state.level,
        input,
        &state.field,
        &state.tuning.physics,
    );
    state.player = player;

    match contact {
        Contact::None => TickEvent::None,
        Contact::ReachedGoal => {
            state.complete_level();
            TickEvent::ReachedGoal
        }
        Contact::HitHazard => {
            state.lose_life();
            if state.is_terminal() {
                TickEvent::GameOver
            } else {
                TickEvent::HitHazard
            }
        }
    }
}

/// Move the player one tick against the level's geometry
///
/// Order: horizontal input, gravity, platform landing (first match in
/// platform order), floor clamp, jump, horizontal clamp, then contacts. Goal
/// contact takes precedence over spikes in the same tick.
pub fn resolve(
    player: &Player,
    level: &Level,
    input: &TickInput,
    field: &Field,
    physics: &PhysicsTuning,
) -> (Player, Contact) {
    let size = player.size;
    let mut x = player.pos.x;
    if input.left {
        x -= physics.move_step;
    }
    if input.right {
        x += physics.move_step;
    }

    let mut velocity = player.vertical_velocity - physics.gravity;
    // Screen y grows downward, velocity grows upward
    let mut next = Vec2::new(x, player.pos.y - velocity as f32);
    let mut grounded = false;

    // Land only when falling onto a platform from above
    let current_bottom = player.bottom();
    let next_rect = Rect::from_pos_size(next, size);
    if velocity <= 0 {
        if let Some(platform) = level.platforms.iter().find(|p| {
            rects_intersect(&next_rect, &p.rect) && current_bottom <= p.rect.top()
        }) {
            next.y = platform.rect.top() - size.y;
            velocity = 0;
            grounded = true;
        }
    }

    if next.y >= field.bottom() - size.y {
        next.y = field.bottom() - size.y;
        velocity = 0;
        grounded = true;
    }

    if input.jump && grounded {
        velocity = physics.jump_impulse;
    }

    let moved = Player {
        pos: clamp_to_field(next, size, field),
        size,
        vertical_velocity: velocity,
        grounded,
    };

    let contact = contact_for(&moved.rect(), level);
    (moved, contact)
}

fn contact_for(rect: &Rect, level: &Level) -> Contact {
    if rect_shape_intersect(rect, &level.goal.as_shape()) {
        Contact::ReachedGoal
    } else if level
        .hazards
        .iter()
        .any(|h| rect_triangle_intersect(rect, &h.shape))
    {
        Contact::HitHazard
    } else {
        Contact::None
    }
}
