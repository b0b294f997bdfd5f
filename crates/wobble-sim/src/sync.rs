//! Mesh synchronization — write particle positions back to the mesh.
//!
//! The simulation runs in world space; the host mesh stores
//! local-space vertices. After each step the particle positions are
//! converted through the host's [`Frame`] and written into the mesh's
//! SoA position channels, then normals and bounds are refreshed so
//! the renderer's derived geometry tracks the deformation.

use wobble_math::{Frame, Vec3};
use wobble_mesh::normals::compute_vertex_normals;
use wobble_mesh::{Aabb, TriangleMesh};
use wobble_types::{WobbleError, WobbleResult};

use crate::particle::Particle;

/// Writes particle world positions back into an externally owned mesh.
///
/// Holds no state beyond a reusable scratch buffer sized to the
/// particle count. Writing twice with unchanged particle state
/// produces an identical vertex buffer.
#[derive(Debug, Default)]
pub struct MeshSync {
    scratch: Vec<Vec3>,
}

impl MeshSync {
    /// Creates a sync component with an empty scratch buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts particle positions to local space and overwrites the
    /// mesh's vertex buffer, then recomputes vertex normals and
    /// returns fresh bounds.
    ///
    /// Returns [`WobbleError::InvalidMesh`] if the mesh's vertex count
    /// does not match the particle count (topology changed under us).
    pub fn write(
        &mut self,
        particles: &[Particle],
        frame: &Frame,
        mesh: &mut TriangleMesh,
    ) -> WobbleResult<Aabb> {
        let n = particles.len();
        if mesh.vertex_count() != n {
            return Err(WobbleError::InvalidMesh(format!(
                "Mesh vertex count ({}) != particle count ({})",
                mesh.vertex_count(),
                n
            )));
        }

        self.scratch.clear();
        self.scratch
            .extend(particles.iter().map(|p| frame.world_to_local(p.position)));

        for (i, &local) in self.scratch.iter().enumerate() {
            mesh.set_position(i, local);
        }

        compute_vertex_normals(mesh);
        Ok(Aabb::of_mesh(mesh))
    }
}
