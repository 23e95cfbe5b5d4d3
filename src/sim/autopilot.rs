//! Demo mode input
//!
//! A tiny bot that plays the game for attract screens and headless runs.
//! It is deliberately simple: walk toward the goal, hop over spikes, and
//! jump when the goal is overhead.

use super::state::RunState;
use super::tick::TickInput;

/// How far ahead (pixels) the bot looks for spikes
const SPIKE_LOOKAHEAD: f32 = 40.0;
/// Horizontal distance (pixels) at which the bot jumps for a goal overhead
const GOAL_REACH: f32 = 80.0;

/// Pick the held keys for the next tick
pub fn autopilot(state: &RunState) -> TickInput {
    if state.is_terminal() {
        return TickInput::default();
    }

    let player = state.player.rect();
    let goal = state.level.goal.shape.center;
    let step = state.tuning.physics.move_step;
    let dx = goal.x - player.center().x;

    let left = dx < -step;
    let right = dx > step;

    // Spikes just ahead at foot level
    let spike_ahead = state.level.hazards.iter().any(|h| {
        let bb = h.shape.bounding_box();
        let ahead = if right {
            bb.left() >= player.right() && bb.left() - player.right() < SPIKE_LOOKAHEAD
        } else if left {
            bb.right() <= player.left() && player.left() - bb.right() < SPIKE_LOOKAHEAD
        } else {
            false
        };
        ahead && bb.bottom() >= player.top() && bb.top() <= player.bottom()
    });

    let goal_overhead = dx.abs() < GOAL_REACH && goal.y < player.top();
    let jump = state.player.grounded && (spike_ahead || goal_overhead);

    TickInput { left, right, jump }
}
