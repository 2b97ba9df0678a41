//! Builds the per-frame [`SceneSnapshot`] handed to the render layer.

use driftline_core::events::AudioEvent;
use driftline_core::registry::Registry;
use driftline_core::snapshot::{SceneSnapshot, SpriteView};
use driftline_core::state::GameState;

/// Assemble the complete visible state for this frame. `audio_events` is the
/// engine's drained event buffer.
pub fn build(
    registry: &Registry,
    state: &GameState,
    audio_events: Vec<AudioEvent>,
) -> SceneSnapshot {
    let mut sprites = Vec::new();
    let mut debug_shapes = Vec::new();

    for (entity, motion) in registry.motions.iter() {
        if !registry.render_requests.has(entity) {
            continue;
        }
        let request = registry.render_requests.get(entity);
        let view = SpriteView {
            position: motion.position,
            scale: motion.scale,
            angle: motion.angle,
            texture: request.texture,
            effect: request.effect,
            geometry: request.geometry,
            mesh: if registry.meshes.has(entity) {
                Some(registry.meshes.get(entity).handle)
            } else {
                None
            },
            color: if registry.colors.has(entity) {
                Some(*registry.colors.get(entity))
            } else {
                None
            },
            lit: registry.light_ups.has(entity),
        };
        if registry.debug_shapes.has(entity) {
            debug_shapes.push(view);
        } else {
            sprites.push(view);
        }
    }

    SceneSnapshot {
        points: state.points,
        advanced: state.advanced,
        darken_screen_factor: state.darken_screen_factor,
        sprites,
        debug_shapes,
        audio_events,
    }
}
