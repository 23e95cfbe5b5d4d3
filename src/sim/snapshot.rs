//! Read-only view of a run for renderers and HUDs

use serde::{Deserialize, Serialize};

use super::geometry::{Circle, Rect, Triangle};
use super::state::RunState;

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: Rect,
    pub platforms: Vec<Rect>,
    pub hazards: Vec<Triangle>,
    pub goal: Circle,
    pub lives_remaining: u32,
    pub levels_completed: u32,
    pub terminal: bool,
}

impl Snapshot {
    pub fn capture(state: &RunState) -> Self {
        Self {
            player: state.player.rect(),
            platforms: state.level.platforms.iter().map(|p| p.rect).collect(),
            hazards: state.level.hazards.iter().map(|h| h.shape).collect(),
            goal: state.level.goal.shape,
            lives_remaining: state.lives_remaining(),
            levels_completed: state.levels_completed,
            terminal: state.is_terminal(),
        }
    }

    /// The two HUD lines shown in the top-left corner
    pub fn hud_lines(&self) -> [String; 2] {
        [
            format!("Lives left: {}", self.lives_remaining),
            format!("Levels won: {}", self.levels_completed),
        ]
    }

    /// Centered banner once the run is over
    pub fn game_over_text(&self) -> Option<String> {
        self.terminal
            .then(|| format!("Game Over!\nYou passed {} levels.", self.levels_completed))
    }
}
