//! Input state crossing the platform boundary.
//!
//! The windowing layer translates its raw key codes into [`InputIntent`]s
//! once, at the boundary; the simulation never sees toolkit constants.
//! State is a last-write-wins boolean map plus the mouse position.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::MouseButton;

/// Abstract player intents, independent of any key layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputIntent {
    /// Strafe toward the heading axis (basic mode).
    Left,
    /// Strafe away from the heading axis (basic mode).
    Right,
    /// Move along the heading normal (basic mode).
    Accelerate,
    /// Move against the heading normal (basic mode); decelerate in advanced.
    Brake,
    /// Restart the run.
    Restart,
    /// Flip between basic and advanced physics.
    ToggleMode,
    /// Stop the frame loop.
    Quit,
    /// Hold to show debug render helpers.
    DebugOverlay,
    /// Nudge the global speed up (tuning aid).
    SpeedUp,
    /// Nudge the global speed down (tuning aid).
    SpeedDown,
}

/// Pressed/clicked state consumed by the handling routines.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<InputIntent, bool>,
    buttons: HashMap<MouseButton, bool>,
    mouse: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an intent as held.
    pub fn press(&mut self, intent: InputIntent) {
        self.keys.insert(intent, true);
    }

    /// Mark an intent as released.
    pub fn release(&mut self, intent: InputIntent) {
        self.keys.insert(intent, false);
    }

    /// Whether an intent is currently held.
    pub fn is_pressed(&self, intent: InputIntent) -> bool {
        self.keys.get(&intent).copied().unwrap_or(false)
    }

    /// Mark a mouse button as held.
    pub fn click(&mut self, button: MouseButton) {
        self.buttons.insert(button, true);
    }

    /// Mark a mouse button as released.
    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons.insert(button, false);
    }

    /// Whether a mouse button is currently held.
    pub fn is_clicked(&self, button: MouseButton) -> bool {
        self.buttons.get(&button).copied().unwrap_or(false)
    }

    /// Record the latest cursor position (last write wins).
    pub fn set_mouse_position(&mut self, position: Vec2) {
        self.mouse = position;
    }

    /// The most recent cursor position.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse
    }
}
