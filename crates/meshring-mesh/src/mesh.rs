//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Triangles are stored as a flat index buffer, three entries per triangle.

use glam::Vec3;
use meshring_types::{MeshringError, MeshringResult, TriangleId, VertexId};
use serde::{Deserialize, Serialize};

/// A triangulated surface: point positions plus triangle indices.
///
/// The mesh is plain data. Nothing here repairs it; [`TriangleMesh::validate`]
/// only reports shape and index-bounds problems.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// Triangle indices — each triangle is [v0, v1, v2].
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Iterates over all triangles in index order.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }

    /// Appends a vertex and returns its index.
    pub fn push_vertex(&mut self, p: Vec3) -> u32 {
        let id = self.pos_x.len() as u32;
        self.pos_x.push(p.x);
        self.pos_y.push(p.y);
        self.pos_z.push(p.z);
        id
    }

    /// Appends a triangle.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Checks the buffer shapes: equal SoA lengths and a whole number of
    /// triangles. Index bounds are not inspected.
    pub fn check_shape(&self) -> MeshringResult<()> {
        let n = self.pos_x.len();
        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(MeshringError::InvalidMesh(format!(
                "Position arrays have inconsistent lengths ({}, {}, {})",
                n,
                self.pos_y.len(),
                self.pos_z.len()
            )));
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshringError::InvalidMesh(format!(
                "Index count ({}) is not divisible by 3",
                self.indices.len()
            )));
        }
        Ok(())
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All position arrays have the same length
    /// - Index count is a multiple of 3
    /// - Triangle indices are within bounds
    ///
    /// Repeated vertex ids inside a triangle are accepted here; whether they
    /// are an error is decided by the adjacency builder's policy.
    pub fn validate(&self) -> MeshringResult<()> {
        self.check_shape()?;

        let n = self.vertex_count();
        for (t, tri) in self.triangles().enumerate() {
            if let Some(&v) = tri.iter().find(|&&v| v as usize >= n) {
                return Err(MeshringError::OutOfRangeVertexId {
                    triangle: TriangleId(t as u32),
                    vertex: VertexId(v),
                    vertex_count: n,
                });
            }
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved AoS position data.
    ///
    /// Converts `[x0, y0, z0, x1, y1, z1, ...]` to SoA layout. Only the
    /// buffer shapes are checked; index bounds are reported by
    /// [`TriangleMesh::validate`] or the adjacency builder.
    pub fn from_interleaved(positions: &[f32], indices: &[u32]) -> MeshringResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(MeshringError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);
        for p in positions.chunks_exact(3) {
            mesh.pos_x.push(p[0]);
            mesh.pos_y.push(p[1]);
            mesh.pos_z.push(p[2]);
        }
        mesh.indices = indices.to_vec();

        mesh.check_shape()?;
        Ok(mesh)
    }

    /// Returns positions interleaved as `[x0, y0, z0, x1, y1, z1, ...]`.
    pub fn interleaved_positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertex_count() * 3);
        for i in 0..self.vertex_count() {
            out.extend_from_slice(&self.position(i));
        }
        out
    }
}
