//! Collaborator surface toward the render layer.
//!
//! The simulation never draws; it only records what should be drawn and, at
//! spawn time, asks the embedding application for a mesh handle per geometry
//! kind. The application caches and owns the actual GPU resources.

use serde::{Deserialize, Serialize};

use crate::enums::GeometryId;

/// Opaque handle to a mesh owned by the render collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshHandle(pub u32);

/// Get-or-create access to meshes, implemented by the embedding app.
pub trait MeshProvider {
    /// Return the (possibly cached) mesh for a geometry kind.
    fn mesh(&mut self, geometry: GeometryId) -> MeshHandle;
}

/// Headless provider for tests and tooling; hands out one handle per
/// geometry kind without touching any GPU.
#[derive(Debug, Default)]
pub struct NullMeshProvider;

impl MeshProvider for NullMeshProvider {
    fn mesh(&mut self, geometry: GeometryId) -> MeshHandle {
        MeshHandle(geometry as u32)
    }
}
