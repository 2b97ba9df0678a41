//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Texture asset referenced by a render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureId {
    Car,
    Barrier,
    Bonus,
    Title,
}

/// Shader effect the render layer should apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectId {
    /// Textured sprite quad.
    #[default]
    Textured,
    /// Flat-colored geometry (debug helpers).
    Solid,
}

/// Geometry kind a mesh is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryId {
    /// Unit sprite quad.
    #[default]
    Sprite,
    /// Thin rectangle for debug overlays.
    DebugLine,
}

/// Mouse buttons the simulation distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Secondary,
}
