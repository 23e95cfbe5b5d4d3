//! Host settings
//!
//! Read from a JSON file next to the binary. Missing keys take their
//! defaults; a missing or broken file falls back to defaults entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Field;
use crate::tuning::Tuning;

/// Host settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play field size
    pub field_width: f32,
    pub field_height: f32,
    /// Tick driver cadence
    pub tick_hz: u32,
    /// Fixed run seed; random when absent
    pub seed: Option<u64>,
    /// Headless runs stop after this many ticks
    pub max_ticks: u64,
    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            tick_hz: TICK_HZ,
            seed: None,
            max_ticks: 60 * 60 * u64::from(TICK_HZ),
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "ledgehop.json";

    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// Resolve the run seed, drawing one from the OS when unset
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
