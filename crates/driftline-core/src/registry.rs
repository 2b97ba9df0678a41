//! The concrete component registry: one named store per component kind.
//!
//! Entities are destroyed only through [`Registry::remove_all_components_of`],
//! which walks every container; there is no entity table beyond what the
//! containers track.

use driftline_ecs::{ComponentStore, Entity, EntityAllocator, EventStore, Store};

use crate::components::{
    Collision, Color, DeathTimer, Deadly, DebugShape, Eatable, LightUp, MeshRef, Motion, Player,
    RenderRequest,
};

/// All component containers plus the entity allocator.
#[derive(Debug, Default)]
pub struct Registry {
    allocator: EntityAllocator,

    pub motions: ComponentStore<Motion>,
    pub players: ComponentStore<Player>,
    pub deadlys: ComponentStore<Deadly>,
    pub eatables: ComponentStore<Eatable>,
    pub death_timers: ComponentStore<DeathTimer>,
    pub light_ups: ComponentStore<LightUp>,
    pub debug_shapes: ComponentStore<DebugShape>,
    pub render_requests: ComponentStore<RenderRequest>,
    pub meshes: ComponentStore<MeshRef>,
    pub colors: ComponentStore<Color>,

    /// Single-frame collision queue; duplicates allowed, cleared by the
    /// resolver every frame.
    pub collisions: EventStore<Collision>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh entity id. The entity exists only through the
    /// components later attached to it.
    pub fn create(&mut self) -> Entity {
        self.allocator.allocate()
    }

    /// Run a closure over every container, erased to the [`Store`] view.
    fn for_each_store(&mut self, mut f: impl FnMut(&mut dyn Store)) {
        f(&mut self.motions);
        f(&mut self.players);
        f(&mut self.deadlys);
        f(&mut self.eatables);
        f(&mut self.death_timers);
        f(&mut self.light_ups);
        f(&mut self.debug_shapes);
        f(&mut self.render_requests);
        f(&mut self.meshes);
        f(&mut self.colors);
        f(&mut self.collisions);
    }

    /// Destroy an entity by removing its entry from every container,
    /// including any pending collision events that reference it as owner.
    pub fn remove_all_components_of(&mut self, entity: Entity) {
        self.for_each_store(|store| store.remove_entity(entity));
    }

    /// Drop every component of every entity.
    pub fn clear_all(&mut self) {
        self.for_each_store(|store| store.clear_store());
    }

    /// Log per-kind component counts; restart-time leak diagnostics.
    pub fn log_component_counts(&mut self) {
        self.for_each_store(|store| {
            if !store.is_empty() {
                log::debug!("{}: {} components", store.kind_name(), store.len());
            }
        });
    }
}
