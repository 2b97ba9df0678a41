//! Entity identifiers and allocation.
//!
//! An [`Entity`] is an opaque `u32` handle with no data of its own; its only
//! role is to key into the per-kind component stores. Ids are handed out
//! monotonically and never recycled — at arcade entity counts the id space
//! outlives any session by orders of magnitude, and non-recycled ids make
//! stale handles harmless (they simply stop matching any store).

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque entity identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(u32);

impl Entity {
    /// Raw `u32` representation.
    #[inline]
    pub fn to_raw(self) -> u32 {
        self.0
    }

    /// Reconstruct from a raw `u32`.
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Hands out fresh [`Entity`] ids in O(1).
#[derive(Debug, Default)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Create a new allocator starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh, never-before-seen id.
    pub fn allocate(&mut self) -> Entity {
        let id = Entity(self.next);
        self.next += 1;
        id
    }
}
