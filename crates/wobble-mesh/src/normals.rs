//! Vertex normal computation from triangle mesh data.
//!
//! Recomputed after every position write-back so shading tracks the
//! deformed surface.

use wobble_math::Vec3;

use crate::mesh::TriangleMesh;

/// Recomputes vertex normals from triangle geometry.
///
/// The unnormalized cross product of a triangle's edge vectors has
/// magnitude twice the triangle's area, so summing it per vertex and
/// normalizing at the end yields area-weighted smooth normals. Large
/// adjacent triangles pull a vertex normal harder than slivers.
///
/// Vertices referenced by no triangle, and vertices whose incident
/// triangles cancel out, get a zero normal.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh) {
    let mut accumulated = vec![Vec3::ZERO; mesh.vertex_count()];

    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t).map(|i| i as usize);
        let origin = mesh.position(a);
        let face = (mesh.position(b) - origin).cross(mesh.position(c) - origin);

        accumulated[a] += face;
        accumulated[b] += face;
        accumulated[c] += face;
    }

    for (i, normal) in accumulated.into_iter().enumerate() {
        mesh.set_normal(i, normal.normalize_or_zero());
    }
}
