//! Per-frame lifecycle bookkeeping: debug-shape clearing, off-screen
//! despawn, and the death/light-up countdowns.

use driftline_core::constants::DEATH_DURATION_MS;
use driftline_core::registry::Registry;
use driftline_ecs::Entity;

/// Outcome of one frame's timer countdown.
#[derive(Debug, Clone, Copy)]
pub struct TimerTick {
    /// Smallest remaining timer value this frame; drives screen darkening.
    /// `DEATH_DURATION_MS` when no timer is running.
    pub min_remaining_ms: f32,
    /// A death timer expired; the engine must restart the run.
    pub restart_pending: bool,
}

/// Remove the previous frame's debug render helpers.
pub fn clear_debug_shapes(registry: &mut Registry) {
    while let Some(&entity) = registry.debug_shapes.entities().last() {
        registry.remove_all_components_of(entity);
    }
}

/// Remove entities whose bounding box has fully left the playfield on the
/// left side. The player is never removed this way.
pub fn despawn_offscreen(registry: &mut Registry) {
    // Walk backwards: removal swaps the last element into the freed slot.
    for i in (0..registry.motions.len()).rev() {
        let motion = registry.motions.components()[i];
        if motion.position.x + motion.scale.x.abs() < 0.0 {
            let entity = registry.motions.entities()[i];
            if !registry.players.has(entity) {
                registry.remove_all_components_of(entity);
            }
        }
    }
}

/// Count down every death and light-up timer by the elapsed time.
///
/// Expired light-ups are removed here; an expired death timer is reported to
/// the engine instead, because its consequence is a full restart.
pub fn tick_timers(registry: &mut Registry, elapsed_ms: f32) -> TimerTick {
    let mut min_remaining_ms = DEATH_DURATION_MS;
    let mut restart_pending = false;

    for (_entity, timer) in registry.death_timers.iter_mut() {
        timer.remaining_ms -= elapsed_ms;
        if timer.remaining_ms < min_remaining_ms {
            min_remaining_ms = timer.remaining_ms;
        }
        if timer.remaining_ms < 0.0 {
            restart_pending = true;
        }
    }

    let mut expired: Vec<Entity> = Vec::new();
    for (entity, light) in registry.light_ups.iter_mut() {
        light.remaining_ms -= elapsed_ms;
        if light.remaining_ms < min_remaining_ms {
            min_remaining_ms = light.remaining_ms;
        }
        if light.remaining_ms < 0.0 {
            expired.push(entity);
        }
    }
    for entity in expired {
        registry.light_ups.remove(entity);
    }

    TimerTick {
        min_remaining_ms,
        restart_pending,
    }
}
