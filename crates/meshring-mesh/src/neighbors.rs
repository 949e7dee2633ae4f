//! One-ring neighborhood queries.
//!
//! Lookups only: the neighbor sets are computed by the builder, these
//! functions index into them and report out-of-range ids as errors.

use meshring_types::{MeshringError, MeshringResult, VertexId};
use serde::Serialize;

use crate::adjacency::AdjacencyGraph;

/// Returns the sorted neighbor set of `id`.
///
/// Fails with [`MeshringError::OutOfRangeQuery`] if `id` is not a vertex of
/// the graph.
pub fn neighbors_of(graph: &AdjacencyGraph, id: u32) -> MeshringResult<&[u32]> {
    graph
        .as_lists()
        .get(id as usize)
        .map(Vec::as_slice)
        .ok_or(MeshringError::OutOfRangeQuery {
            vertex: VertexId(id),
            vertex_count: graph.vertex_count(),
        })
}

/// A vertex and its immediate neighbors, e.g. for highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OneRing {
    /// The queried vertex.
    pub center: u32,
    /// Its neighbors, ascending.
    pub neighbors: Vec<u32>,
}

impl OneRing {
    /// Number of neighbors (the center is not counted).
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Whether `v` is the center or one of its neighbors.
    pub fn contains(&self, v: u32) -> bool {
        v == self.center || self.neighbors.binary_search(&v).is_ok()
    }
}

/// Returns `id` together with its neighbor set.
pub fn one_ring(graph: &AdjacencyGraph, id: u32) -> MeshringResult<OneRing> {
    let neighbors = neighbors_of(graph, id)?.to_vec();
    Ok(OneRing {
        center: id,
        neighbors,
    })
}
