//! ECS components attached to simulation entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use driftline_ecs::Entity;

use crate::constants::{DEATH_DURATION_MS, LIGHT_UP_DURATION_MS};
use crate::enums::{EffectId, GeometryId, TextureId};
use crate::render::MeshHandle;

/// Kinematic state of anything that moves or needs a bounding box.
///
/// `scale` is the full bounding-box extent; a negative component mirrors the
/// sprite along that axis. `angle` is in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub position: Vec2,
    pub velocity: Vec2,
    pub scale: Vec2,
    pub angle: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            scale: Vec2::ONE,
            angle: 0.0,
        }
    }
}

/// A directed collision event: the owning entity collided with `other`.
/// Recorded once per direction, consumed and cleared within the same frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub other: Entity,
}

/// Marks the player car. Exactly one alive at a time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player;

/// Marks an obstacle that kills the player on contact.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Deadly;

/// Marks a pickup the player can consume for points.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Eatable;

/// Marks a debug-only render helper; cleared at the start of every frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DebugShape;

/// Countdown to respawn, attached when the player dies. While present the
/// player ignores input and drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeathTimer {
    pub remaining_ms: f32,
}

impl Default for DeathTimer {
    fn default() -> Self {
        Self {
            remaining_ms: DEATH_DURATION_MS,
        }
    }
}

/// Temporary lit visual state after scoring, advanced mode only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightUp {
    pub remaining_ms: f32,
}

impl Default for LightUp {
    fn default() -> Self {
        Self {
            remaining_ms: LIGHT_UP_DURATION_MS,
        }
    }
}

/// What the render layer should draw for this entity.
/// `texture` is `None` for flat-colored geometry such as debug lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub texture: Option<TextureId>,
    pub effect: EffectId,
    pub geometry: GeometryId,
}

/// Handle to a mesh owned by the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshRef {
    pub handle: MeshHandle,
}

/// RGB tint applied on top of the entity's texture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}
