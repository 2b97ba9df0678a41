//! Collision resolution — the gameplay consequences of this frame's
//! collision events.
//!
//! Every event is consumed exactly once and the queue is left empty. Events
//! may reference entities destroyed earlier in the same pass, so every rule
//! guards with `has()` before touching a component.

use driftline_core::components::{Color, DeathTimer, LightUp};
use driftline_core::constants::{BARRIER_SPEED, EATABLE_CLEANUP_X};
use driftline_core::events::AudioEvent;
use driftline_core::math::{heading_vector, perpendicular, reflect};
use driftline_core::registry::Registry;
use driftline_core::state::GameState;
use driftline_ecs::Entity;

/// Consume and clear all collision events, applying death, scoring,
/// reflection, and despawn rules.
pub fn run(
    registry: &mut Registry,
    state: &mut GameState,
    growth_factor: f32,
    audio_events: &mut Vec<AudioEvent>,
) {
    let events: Vec<(Entity, Entity)> = registry
        .collisions
        .drain()
        .map(|(entity, collision)| (entity, collision.other))
        .collect();

    for (entity, other) in events {
        if registry.players.has(entity) {
            if registry.deadlys.has(other) {
                player_hits_deadly(registry, state, audio_events, entity, other);
            } else if registry.eatables.has(other) {
                player_hits_eatable(registry, state, growth_factor, audio_events, entity, other);
            }
        }

        // A bonus overlapping a wall past the right-hand bound has drifted
        // out of reach; destroy the straggler.
        if registry.eatables.has(entity)
            && registry.deadlys.has(other)
            && registry.motions.get(entity).position.x > EATABLE_CLEANUP_X
        {
            registry.remove_all_components_of(entity);
        }
    }
}

/// Initiate death unless already dying: start the countdown, bounce the car
/// off the obstacle, and flag the crash to the audio/render collaborators.
fn player_hits_deadly(
    registry: &mut Registry,
    state: &GameState,
    audio_events: &mut Vec<AudioEvent>,
    player: Entity,
    obstacle: Entity,
) {
    if registry.death_timers.has(player) {
        return;
    }
    registry.death_timers.insert(player, DeathTimer::default());
    audio_events.push(AudioEvent::CarCrash);
    audio_events.push(AudioEvent::MusicPaused);

    // Reflect the velocity about the obstacle's surface normal (the
    // perpendicular of its heading), then push the car back with the
    // ambient scroll so it drifts clear of the wreck.
    let surface = heading_vector(registry.motions.get(obstacle).angle);
    let normal = perpendicular(surface);
    let player_motion = registry.motions.get_mut(player);
    player_motion.velocity = reflect(player_motion.velocity, normal);
    player_motion.velocity.x += BARRIER_SPEED;

    if state.advanced {
        *registry.colors.get_mut(player) = Color::new(1.0, 0.0, 0.0);
    }
}

/// Consume the bonus: score a point, speed the game up, and light the car
/// up in advanced mode.
fn player_hits_eatable(
    registry: &mut Registry,
    state: &mut GameState,
    growth_factor: f32,
    audio_events: &mut Vec<AudioEvent>,
    player: Entity,
    bonus: Entity,
) {
    if registry.death_timers.has(player) {
        return;
    }
    registry.remove_all_components_of(bonus);
    audio_events.push(AudioEvent::PointScored);
    state.add_points(1);
    state.current_speed *= growth_factor;

    if state.advanced {
        // Replace any running flash so the timer starts over.
        registry.light_ups.remove(player);
        registry.light_ups.insert(player, LightUp::default());
    }
}
