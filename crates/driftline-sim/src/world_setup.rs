//! Entity spawn factories.
//!
//! Each factory allocates an entity, attaches its component bundle, and asks
//! the mesh collaborator for the geometry handle its render request needs.

use std::f32::consts::PI;

use glam::Vec2;

use driftline_core::components::{
    Color, Deadly, DebugShape, Eatable, MeshRef, Motion, Player, RenderRequest,
};
use driftline_core::constants::{
    BARRIER_ANGLE, BARRIER_HEIGHT, BARRIER_SPEED, BARRIER_WIDTH, BONUS_HEIGHT, BONUS_WIDTH,
    CAR_HEIGHT, CAR_WIDTH, TITLE_HEIGHT, TITLE_WIDTH,
};
use driftline_core::enums::{EffectId, GeometryId, TextureId};
use driftline_core::registry::Registry;
use driftline_core::render::MeshProvider;
use driftline_ecs::Entity;

/// Default tint for a freshly spawned player car.
const PLAYER_TINT: Color = Color::new(1.0, 0.8, 0.8);

/// The title banner; scrolls left with the world and despawns off screen.
pub fn create_title(registry: &mut Registry, meshes: &mut dyn MeshProvider, position: Vec2) -> Entity {
    let entity = registry.create();
    let mesh = meshes.mesh(GeometryId::Sprite);
    registry.meshes.insert(entity, MeshRef { handle: mesh });

    registry.motions.insert(
        entity,
        Motion {
            position,
            velocity: Vec2::new(BARRIER_SPEED, 0.0),
            scale: Vec2::new(TITLE_WIDTH, TITLE_HEIGHT),
            angle: 0.0,
        },
    );

    registry.render_requests.insert(
        entity,
        RenderRequest {
            texture: Some(TextureId::Title),
            effect: EffectId::Textured,
            geometry: GeometryId::Sprite,
        },
    );
    entity
}

/// The player car. Faces left (angle π) with the sprite mirrored so the
/// nose points along the travel direction.
pub fn create_player(registry: &mut Registry, meshes: &mut dyn MeshProvider, position: Vec2) -> Entity {
    let entity = registry.create();
    let mesh = meshes.mesh(GeometryId::Sprite);
    registry.meshes.insert(entity, MeshRef { handle: mesh });

    registry.motions.insert(
        entity,
        Motion {
            position,
            velocity: Vec2::new(1000.0, 0.0),
            angle: PI,
            scale: Vec2::new(CAR_HEIGHT, -CAR_WIDTH),
        },
    );

    registry.players.insert(entity, Player);
    registry.colors.insert(entity, PLAYER_TINT);
    registry.render_requests.insert(
        entity,
        RenderRequest {
            texture: Some(TextureId::Car),
            effect: EffectId::Textured,
            geometry: GeometryId::Sprite,
        },
    );
    entity
}

/// A bonus pickup drifting in from the right at a random tilt.
pub fn create_bonus(
    registry: &mut Registry,
    meshes: &mut dyn MeshProvider,
    position: Vec2,
    angle: f32,
) -> Entity {
    let entity = registry.create();
    let mesh = meshes.mesh(GeometryId::Sprite);
    registry.meshes.insert(entity, MeshRef { handle: mesh });

    registry.motions.insert(
        entity,
        Motion {
            position,
            velocity: Vec2::new(BARRIER_SPEED, 0.0),
            scale: Vec2::new(BONUS_WIDTH, BONUS_HEIGHT),
            angle,
        },
    );

    registry.eatables.insert(entity, Eatable);
    registry.render_requests.insert(
        entity,
        RenderRequest {
            texture: Some(TextureId::Bonus),
            effect: EffectId::Textured,
            geometry: GeometryId::Sprite,
        },
    );
    entity
}

/// A deadly barrier wall drifting in from the right.
pub fn create_barrier(registry: &mut Registry, meshes: &mut dyn MeshProvider, position: Vec2) -> Entity {
    let entity = registry.create();
    let mesh = meshes.mesh(GeometryId::Sprite);
    registry.meshes.insert(entity, MeshRef { handle: mesh });

    registry.motions.insert(
        entity,
        Motion {
            position,
            velocity: Vec2::new(BARRIER_SPEED, 0.0),
            scale: Vec2::new(BARRIER_WIDTH, BARRIER_HEIGHT),
            angle: BARRIER_ANGLE,
        },
    );

    registry.deadlys.insert(entity, Deadly);
    registry.render_requests.insert(
        entity,
        RenderRequest {
            texture: Some(TextureId::Barrier),
            effect: EffectId::Textured,
            geometry: GeometryId::Sprite,
        },
    );
    entity
}

/// A flat-colored debug rectangle, cleared at the start of the next frame.
pub fn create_debug_line(registry: &mut Registry, position: Vec2, scale: Vec2) -> Entity {
    let entity = registry.create();

    registry.render_requests.insert(
        entity,
        RenderRequest {
            texture: None,
            effect: EffectId::Solid,
            geometry: GeometryId::DebugLine,
        },
    );

    registry.motions.insert(
        entity,
        Motion {
            position,
            velocity: Vec2::ZERO,
            scale,
            angle: 0.0,
        },
    );

    registry.debug_shapes.insert(entity, DebugShape);
    entity
}
