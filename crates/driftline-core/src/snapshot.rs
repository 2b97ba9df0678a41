//! Scene snapshot — the complete visible state handed to the render layer
//! each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Color;
use crate::enums::{EffectId, GeometryId, TextureId};
use crate::events::AudioEvent;
use crate::render::MeshHandle;

/// Everything the embedding application needs to draw one frame and play
/// its sound cues.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub points: u32,
    pub advanced: bool,
    /// Screen-darkening factor in `[0, 1]`.
    pub darken_screen_factor: f32,
    pub sprites: Vec<SpriteView>,
    pub debug_shapes: Vec<SpriteView>,
    pub audio_events: Vec<AudioEvent>,
}

/// One drawable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub position: Vec2,
    pub scale: Vec2,
    pub angle: f32,
    pub texture: Option<TextureId>,
    pub effect: EffectId,
    pub geometry: GeometryId,
    pub mesh: Option<MeshHandle>,
    pub color: Option<Color>,
    /// Lit-up scoring flash, advanced mode only.
    pub lit: bool,
}
