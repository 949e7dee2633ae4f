//! Integration tests for the mesh type and generators.

use meshring_mesh::generators::{lat_long_sphere, quad_grid};
use meshring_mesh::TriangleMesh;
use meshring_types::MeshringError;

// ─── TriangleMesh Tests ───────────────────────────────────────

fn make_single_triangle() -> TriangleMesh {
    TriangleMesh {
        pos_x: vec![0.0, 1.0, 0.0],
        pos_y: vec![0.0, 0.0, 1.0],
        pos_z: vec![0.0, 0.0, 0.0],
        indices: vec![0, 1, 2],
    }
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn empty_mesh_counts() {
    let mesh = TriangleMesh::default();
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.triangle_count(), 0);
    assert!(mesh.validate().is_ok());
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
    assert_eq!(mesh.position_vec3(2), glam::Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn triangle_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.triangle(0), [0, 1, 2]);
    assert_eq!(mesh.triangles().collect::<Vec<_>>(), vec![[0, 1, 2]]);
}

#[test]
fn validate_ok() {
    let mesh = make_single_triangle();
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(matches!(mesh.validate(), Err(MeshringError::InvalidMesh(_))));
}

#[test]
fn validate_catches_partial_triangle() {
    let mut mesh = make_single_triangle();
    mesh.indices.push(0);
    assert!(matches!(mesh.validate(), Err(MeshringError::InvalidMesh(_))));
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    match mesh.validate() {
        Err(MeshringError::OutOfRangeVertexId {
            triangle,
            vertex,
            vertex_count,
        }) => {
            assert_eq!(triangle.index(), 0);
            assert_eq!(vertex.index(), 99);
            assert_eq!(vertex_count, 3);
        }
        other => panic!("expected OutOfRangeVertexId, got {other:?}"),
    }
}

#[test]
fn validate_accepts_degenerate() {
    let mut mesh = make_single_triangle();
    mesh.indices = vec![0, 0, 1];
    assert!(mesh.validate().is_ok());
}

#[test]
fn from_interleaved() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let mesh = TriangleMesh::from_interleaved(&positions, &[0, 1, 2]).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.pos_x, vec![0.0, 1.0, 0.0]);
    assert_eq!(mesh.pos_y, vec![0.0, 0.0, 1.0]);
    assert_eq!(mesh.interleaved_positions(), positions);
}

#[test]
fn from_interleaved_rejects_ragged_positions() {
    let result = TriangleMesh::from_interleaved(&[0.0, 1.0], &[]);
    assert!(matches!(result, Err(MeshringError::InvalidMesh(_))));
}

#[test]
fn from_interleaved_leaves_bounds_to_validate() {
    let positions = vec![0.0; 9];
    let mesh = TriangleMesh::from_interleaved(&positions, &[0, 1, 3]).unwrap();
    assert!(mesh.validate().is_err());
}

#[test]
fn mesh_is_serializable() {
    let mesh = make_single_triangle();
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: TriangleMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, mesh);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn quad_grid_2x2() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 8);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_20x20() {
    let mesh = quad_grid(20, 20, 2.0, 2.0);
    assert_eq!(mesh.vertex_count(), 441);
    assert_eq!(mesh.triangle_count(), 800);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_dimensions() {
    let mesh = quad_grid(4, 4, 2.0, 2.0);
    assert!((mesh.pos_x[0] - (-1.0)).abs() < 1e-6);
    assert!((mesh.pos_y[0] - 1.0).abs() < 1e-6);
    assert!((mesh.pos_x[4] - 1.0).abs() < 1e-6);
}

#[test]
fn sphere_default_resolution_counts() {
    let mesh = lat_long_sphere(5.0, 8, 8);
    assert_eq!(mesh.vertex_count(), 50);
    assert_eq!(mesh.triangle_count(), 96);
    assert!(mesh.validate().is_ok());
}

#[test]
fn sphere_has_no_degenerate_triangles() {
    let mesh = lat_long_sphere(1.0, 12, 9);
    for tri in mesh.triangles() {
        let [a, b, c] = tri;
        assert!(a != b && b != c && a != c, "degenerate triangle {tri:?}");
    }
}

#[test]
fn sphere_radius() {
    let mesh = lat_long_sphere(2.5, 8, 16);
    for i in 0..mesh.vertex_count() {
        let dist = mesh.position_vec3(i).length();
        assert!((dist - 2.5).abs() < 1e-4, "Vertex {} at distance {}", i, dist);
    }
}

#[test]
fn sphere_poles_come_first() {
    let mesh = lat_long_sphere(5.0, 8, 8);
    assert_eq!(mesh.position(0), [0.0, 0.0, 5.0]);
    assert_eq!(mesh.position(1), [0.0, 0.0, -5.0]);
}

#[test]
fn sphere_resolution_is_clamped() {
    let mesh = lat_long_sphere(1.0, 1, 0);
    // 3 × 3 clamps to a triangular bipyramid
    assert_eq!(mesh.vertex_count(), 5);
    assert_eq!(mesh.triangle_count(), 6);
    assert!(mesh.validate().is_ok());
}
