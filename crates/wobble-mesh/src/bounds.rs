//! Axis-aligned bounding box.
//!
//! Host renderers cull against object bounds; after the simulation
//! rewrites vertex positions the cached bounds are stale, so mesh
//! sync refreshes them along with the normals.

use serde::{Deserialize, Serialize};
use wobble_math::Vec3;

use crate::mesh::TriangleMesh;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: [f32; 3],
    /// Maximum corner.
    pub max: [f32; 3],
}

impl Aabb {
    /// An empty box: min at +∞, max at −∞. Growing an empty box by
    /// any point yields a degenerate box at that point.
    pub const EMPTY: Self = Self {
        min: [f32::INFINITY; 3],
        max: [f32::NEG_INFINITY; 3],
    };

    /// Computes the bounds of all vertices in the mesh.
    ///
    /// Returns [`Aabb::EMPTY`] for a mesh with no vertices.
    pub fn of_mesh(mesh: &TriangleMesh) -> Self {
        let mut bounds = Self::EMPTY;
        for i in 0..mesh.vertex_count() {
            bounds.grow(mesh.position(i));
        }
        bounds
    }

    /// Expands the box to contain `p`.
    #[inline]
    pub fn grow(&mut self, p: Vec3) {
        self.min[0] = self.min[0].min(p.x);
        self.min[1] = self.min[1].min(p.y);
        self.min[2] = self.min[2].min(p.z);
        self.max[0] = self.max[0].max(p.x);
        self.max[1] = self.max[1].max(p.y);
        self.max[2] = self.max[2].max(p.z);
    }

    /// Returns true if no point has been added.
    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0]
    }

    /// Center of the box. Meaningless for an empty box.
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
            (self.min[2] + self.max[2]) * 0.5,
        )
    }
}
