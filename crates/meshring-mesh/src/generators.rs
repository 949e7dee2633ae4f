//! Procedural mesh generators for demos and testing.
//!
//! These generators produce deterministic, resolution-configurable
//! triangulated meshes with consistent winding order.

use glam::Vec3;
use meshring_types::constants::MIN_SPHERE_RESOLUTION;

use crate::mesh::TriangleMesh;

/// Generates a flat rectangular quad grid in the XY plane, two triangles
/// per quad.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0.
///
/// # Arguments
/// - `cols` — Number of quads along X (vertex count = cols + 1).
/// - `rows` — Number of quads along Y (vertex count = rows + 1).
/// - `width` — Total width.
/// - `height` — Total height.
///
/// # Example
/// ```
/// use meshring_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let mut mesh = TriangleMesh::with_capacity(verts_x * verts_y, cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = if cols == 0 { 0.0 } else { i as f32 / cols as f32 };
            let v = if rows == 0 { 0.0 } else { j as f32 / rows as f32 };
            mesh.push_vertex(Vec3::new(-half_w + u * width, half_h - v * height, 0.0));
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            // Upper-left triangle
            mesh.push_triangle(top_left, bot_left, top_right);
            // Lower-right triangle
            mesh.push_triangle(top_right, bot_left, bot_right);
        }
    }

    mesh
}

/// Generates a closed latitude/longitude sphere centered at the origin.
///
/// Unlike a UV-mapped sphere there is no seam: each pole is a single vertex
/// and every ring wraps around. Vertex 0 is the north pole (+Z), vertex 1 the
/// south pole, followed by `phi_resolution - 2` rings of `theta_resolution`
/// vertices each, north to south.
///
/// Both resolutions are clamped to at least 3.
///
/// # Example
/// ```
/// use meshring_mesh::generators::lat_long_sphere;
/// let mesh = lat_long_sphere(5.0, 8, 8);
/// assert_eq!(mesh.vertex_count(), 50);
/// assert_eq!(mesh.triangle_count(), 96);
/// ```
pub fn lat_long_sphere(radius: f32, theta_resolution: usize, phi_resolution: usize) -> TriangleMesh {
    let theta = theta_resolution.max(MIN_SPHERE_RESOLUTION);
    let phi = phi_resolution.max(MIN_SPHERE_RESOLUTION);
    let rings = phi - 2;

    let mut mesh = TriangleMesh::with_capacity(theta * rings + 2, 2 * theta * rings);

    mesh.push_vertex(Vec3::Z * radius);
    mesh.push_vertex(Vec3::NEG_Z * radius);

    let delta_phi = std::f32::consts::PI / (phi - 1) as f32;
    let delta_theta = std::f32::consts::TAU / theta as f32;
    for k in 1..=rings {
        let (sin_phi, cos_phi) = (k as f32 * delta_phi).sin_cos();
        for j in 0..theta {
            let (sin_theta, cos_theta) = (j as f32 * delta_theta).sin_cos();
            let dir = Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi);
            mesh.push_vertex(dir * radius);
        }
    }

    let ring = |k: usize, j: usize| (2 + k * theta + j % theta) as u32;

    // North cap
    for j in 0..theta {
        mesh.push_triangle(0, ring(0, j), ring(0, j + 1));
    }

    // Bands between consecutive rings
    for k in 0..rings - 1 {
        for j in 0..theta {
            let a = ring(k, j);
            let b = ring(k, j + 1);
            let c = ring(k + 1, j);
            let d = ring(k + 1, j + 1);
            mesh.push_triangle(a, c, d);
            mesh.push_triangle(a, d, b);
        }
    }

    // South cap
    let last = rings - 1;
    for j in 0..theta {
        mesh.push_triangle(1, ring(last, j + 1), ring(last, j));
    }

    mesh
}
