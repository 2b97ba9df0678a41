//! Process-wide game state, threaded explicitly through the step call.

use serde::{Deserialize, Serialize};

/// Mode flags and counters that outlive any single entity.
///
/// Owned by the simulation engine and passed into systems — never a global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Advanced physics model: drag-based drift and smoothed steering.
    /// Basic mode uses direct velocity control.
    pub advanced: bool,
    /// Bonuses consumed this run.
    pub points: u32,
    /// Global clock multiplier for the spawn timers; grows with score and
    /// can be trimmed by hand via the speed intents.
    pub current_speed: f32,
    /// Screen-darkening factor in `[0, 1]`, driven by the death countdown.
    pub darken_screen_factor: f32,
    /// Debug render helpers visible while held.
    pub debug_overlay: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            advanced: true,
            points: 0,
            current_speed: 1.0,
            darken_screen_factor: 0.0,
            debug_overlay: false,
        }
    }
}

impl GameState {
    /// Restore the startup state: zero points, advanced mode, unit speed.
    pub fn reset(&mut self) {
        *self = Self {
            debug_overlay: self.debug_overlay,
            ..Self::default()
        };
    }

    /// Integration multiplier derived from the score: `growth ^ points`.
    pub fn speed_multiplier(&self, growth_factor: f32) -> f32 {
        growth_factor.powi(self.points as i32)
    }

    pub fn set_advanced(&mut self) {
        self.advanced = true;
    }

    pub fn set_basic(&mut self) {
        self.advanced = false;
    }

    pub fn toggle_mode(&mut self) {
        self.advanced = !self.advanced;
    }

    pub fn add_points(&mut self, value: u32) {
        self.points += value;
    }
}
