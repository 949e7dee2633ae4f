//! Mesh input contract.
//!
//! A mesh file is a JSON object with an array of 3D points and an array of
//! vertex-index triples:
//!
//! ```json
//! { "positions": [[0, 0, 0], [1, 0, 0], [0, 1, 0]], "triangles": [[0, 1, 2]] }
//! ```

use std::path::Path;

use meshring_mesh::TriangleMesh;
use meshring_types::{MeshringError, MeshringResult};
use serde::{Deserialize, Serialize};

/// Serializable triangulated surface in array-of-structs form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshInput {
    /// Point coordinates, indexed `0..N`.
    pub positions: Vec<[f32; 3]>,
    /// Vertex-index triples into `positions`.
    pub triangles: Vec<[u32; 3]>,
}

impl MeshInput {
    /// Parses a JSON document.
    pub fn from_json(content: &str) -> MeshringResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| MeshringError::Serialization(format!("Mesh JSON parse failed: {e}")))
    }

    /// Converts to the SoA mesh used by the builder. Index bounds are not
    /// checked here.
    pub fn into_mesh(self) -> TriangleMesh {
        let mut mesh = TriangleMesh::with_capacity(self.positions.len(), self.triangles.len());
        for [x, y, z] in self.positions {
            mesh.pos_x.push(x);
            mesh.pos_y.push(y);
            mesh.pos_z.push(z);
        }
        for [a, b, c] in self.triangles {
            mesh.push_triangle(a, b, c);
        }
        mesh
    }

    /// Captures a mesh in file form.
    pub fn from_mesh(mesh: &TriangleMesh) -> Self {
        Self {
            positions: (0..mesh.vertex_count()).map(|i| mesh.position(i)).collect(),
            triangles: mesh.triangles().collect(),
        }
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> MeshringResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MeshringError::Serialization(format!("Mesh JSON serialization failed: {e}")))
    }
}

/// Reads a mesh JSON file.
pub fn load_mesh(path: impl AsRef<Path>) -> MeshringResult<TriangleMesh> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let mesh = MeshInput::from_json(&content)?.into_mesh();
    tracing::debug!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "mesh loaded"
    );
    Ok(mesh)
}
