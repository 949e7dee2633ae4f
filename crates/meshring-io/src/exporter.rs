//! Wireframe exporter — writes the edge list and a highlighted one-ring
//! for visual inspection.
//!
//! The output carries geometry and topology only: point positions, line
//! indices, and which vertices form the highlighted neighborhood. Colors,
//! point sizes and every other styling decision belong to the viewer.

use std::path::Path;

use meshring_mesh::{AdjacencyGraph, TriangleMesh};
use meshring_types::{MeshringError, MeshringResult};
use serde::Serialize;

/// Complete wireframe data for JSON export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireframeExport {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Interleaved `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
    /// Line-list indices `[i0, j0, i1, j1, ...]`, each edge once with `i < j`.
    pub lines: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<HighlightExport>,
}

/// A vertex and its one-ring, with resolved positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightExport {
    pub center: u32,
    pub center_position: [f32; 3],
    pub neighbors: Vec<u32>,
    pub neighbor_positions: Vec<[f32; 3]>,
}

impl WireframeExport {
    /// Assembles export data from a mesh and the graph built from it.
    ///
    /// Fails with [`MeshringError::OutOfRangeQuery`] if `highlight` is not a
    /// vertex of the graph, and with [`MeshringError::InvalidMesh`] if the
    /// position arrays disagree in length or with the graph.
    pub fn build(
        mesh: &TriangleMesh,
        graph: &AdjacencyGraph,
        highlight: Option<u32>,
    ) -> MeshringResult<Self> {
        mesh.check_shape()?;
        if mesh.vertex_count() != graph.vertex_count() {
            return Err(MeshringError::InvalidMesh(format!(
                "Mesh has {} vertices but the graph has {}",
                mesh.vertex_count(),
                graph.vertex_count()
            )));
        }

        let edges = graph.edges();
        let highlight = highlight
            .map(|v| {
                let ring = graph.one_ring(v)?;
                Ok::<_, MeshringError>(HighlightExport {
                    center: ring.center,
                    center_position: mesh.position(ring.center as usize),
                    neighbor_positions: ring
                        .neighbors
                        .iter()
                        .map(|&n| mesh.position(n as usize))
                        .collect(),
                    neighbors: ring.neighbors,
                })
            })
            .transpose()?;

        Ok(Self {
            vertex_count: graph.vertex_count(),
            edge_count: edges.len(),
            positions: mesh.interleaved_positions(),
            lines: edges.line_indices(),
            highlight,
        })
    }

    /// Serializes to compact JSON.
    pub fn to_json(&self) -> MeshringResult<String> {
        serde_json::to_string(self)
            .map_err(|e| MeshringError::Serialization(format!("JSON serialization failed: {e}")))
    }

    /// Writes the JSON document to `path`.
    pub fn write_json(&self, path: impl AsRef<Path>) -> MeshringResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        tracing::info!(
            path = %path.display(),
            edges = self.edge_count,
            "wireframe exported"
        );
        Ok(())
    }
}
