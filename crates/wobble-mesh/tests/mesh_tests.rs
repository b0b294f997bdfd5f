//! Integration tests for wobble-mesh.

use wobble_math::Vec3;
use wobble_mesh::generators::{quad_grid, uv_sphere};
use wobble_mesh::normals::compute_vertex_normals;
use wobble_mesh::{Aabb, TriangleMesh};

// ─── TriangleMesh Tests ───────────────────────────────────────

#[test]
fn quad_grid_counts() {
    let mesh = quad_grid(3, 2, 1.5, 1.0);
    assert_eq!(mesh.vertex_count(), 4 * 3);
    assert_eq!(mesh.triangle_count(), 3 * 2 * 2);
    mesh.validate().unwrap();
}

#[test]
fn uv_sphere_counts() {
    let mesh = uv_sphere(1.0, 4, 6);
    assert_eq!(mesh.vertex_count(), 5 * 7);
    mesh.validate().unwrap();
}

#[test]
fn from_interleaved_round_trip() {
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let indices = [0u32, 1, 2];
    let mesh = TriangleMesh::from_interleaved(&positions, &indices).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.position(1), Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn from_interleaved_rejects_ragged_positions() {
    let positions = [0.0, 0.0]; // Not divisible by 3
    assert!(TriangleMesh::from_interleaved(&positions, &[]).is_err());
}

#[test]
fn validate_rejects_out_of_range_index() {
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let indices = [0u32, 1, 5];
    assert!(TriangleMesh::from_interleaved(&positions, &indices).is_err());
}

#[test]
fn validate_rejects_degenerate_triangle() {
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let indices = [0u32, 1, 1];
    assert!(TriangleMesh::from_interleaved(&positions, &indices).is_err());
}

#[test]
fn set_position_updates_channels() {
    let mut mesh = quad_grid(1, 1, 1.0, 1.0);
    mesh.set_position(0, Vec3::new(9.0, 8.0, 7.0));
    assert_eq!(mesh.pos_x[0], 9.0);
    assert_eq!(mesh.pos_y[0], 8.0);
    assert_eq!(mesh.pos_z[0], 7.0);
}

#[test]
fn mesh_serialization() {
    let mesh = quad_grid(1, 1, 1.0, 1.0);
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: TriangleMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.vertex_count(), mesh.vertex_count());
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_grid_normals_face_z() {
    let mut mesh = quad_grid(2, 2, 1.0, 1.0);
    compute_vertex_normals(&mut mesh);
    for i in 0..mesh.vertex_count() {
        let n = mesh.normal(i);
        assert!((n.length() - 1.0).abs() < 1e-5, "normal {} not unit", i);
        assert!(n.z.abs() > 0.99, "normal {} not along Z: {:?}", i, n);
    }
}

#[test]
fn sphere_normals_point_outward() {
    let mesh = uv_sphere(2.0, 6, 8);
    // Away from the poles, normals should roughly align with position.
    for i in 0..mesh.vertex_count() {
        let p = mesh.position(i);
        if p.length() < 1e-3 {
            continue;
        }
        let n = mesh.normal(i);
        if n.length() < 0.5 {
            continue; // Unreferenced pole duplicate
        }
        assert!(n.dot(p.normalize()) > 0.0, "normal {} points inward", i);
    }
}

#[test]
fn unreferenced_vertex_gets_zero_normal() {
    let positions = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        5.0, 5.0, 5.0, // not part of any triangle
    ];
    let indices = [0u32, 1, 2];
    let mut mesh = TriangleMesh::from_interleaved(&positions, &indices).unwrap();
    compute_vertex_normals(&mut mesh);

    assert_eq!(mesh.normal(3), Vec3::ZERO);
    assert!((mesh.normal(0) - Vec3::Z).length() < 1e-5);
}

#[test]
fn collinear_triangle_produces_no_nan_normals() {
    let positions = [
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        2.0, 0.0, 0.0, // collinear, zero-area triangle
    ];
    let indices = [0u32, 1, 2];
    let mut mesh = TriangleMesh::from_interleaved(&positions, &indices).unwrap();
    compute_vertex_normals(&mut mesh);

    for i in 0..mesh.vertex_count() {
        assert!(mesh.normal(i).is_finite(), "normal {} is not finite", i);
        assert_eq!(mesh.normal(i), Vec3::ZERO);
    }
}

// ─── Bounds Tests ─────────────────────────────────────────────

#[test]
fn bounds_of_grid() {
    let mesh = quad_grid(2, 2, 2.0, 4.0);
    let bounds = Aabb::of_mesh(&mesh);
    assert!((bounds.min[0] + 1.0).abs() < 1e-6);
    assert!((bounds.max[0] - 1.0).abs() < 1e-6);
    assert!((bounds.min[1] + 2.0).abs() < 1e-6);
    assert!((bounds.max[1] - 2.0).abs() < 1e-6);
    assert!((bounds.center() - Vec3::ZERO).length() < 1e-6);
}

#[test]
fn empty_bounds() {
    let mesh = TriangleMesh::with_capacity(0, 0);
    let bounds = Aabb::of_mesh(&mesh);
    assert!(bounds.is_empty());
}
