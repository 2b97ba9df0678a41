//! Sparse per-kind entity/component storage for DRIFTLINE.
//!
//! Entities are opaque ids; every component kind lives in its own dense
//! container keyed by entity. Containers trade iteration-order stability for
//! O(1) insert and swap-remove, which is the right shape for a simulation
//! that scans whole component kinds every frame and despawns freely.
//!
//! This crate knows nothing about the game. The concrete registry that names
//! one store per component kind lives in `driftline-core`.

pub mod entity;
pub mod storage;

pub use entity::{Entity, EntityAllocator};
pub use storage::{ComponentStore, EventStore, Store};

/// Errors produced by storage operations.
///
/// Duplicate inserts and get-without-has are programming errors; the panicking
/// accessors use these messages as their diagnostics, and the `try_` variants
/// return them as values.
#[derive(Debug, thiserror::Error)]
pub enum EcsError {
    /// The entity has no component of the requested kind.
    #[error("entity {entity:?} has no {kind} component (guard with has())")]
    MissingComponent {
        entity: Entity,
        kind: &'static str,
    },

    /// The entity already has a component of this kind.
    #[error("entity {entity:?} already has a {kind} component")]
    DuplicateComponent {
        entity: Entity,
        kind: &'static str,
    },
}
