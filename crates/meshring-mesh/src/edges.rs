//! Canonical undirected edge list.
//!
//! Every edge `{i, j}` of the adjacency graph appears exactly once as
//! `[i, j]` with `i < j`, ordered by `i` then `j`. This is the primitive a
//! line-segment (wireframe) renderer consumes.

use serde::Serialize;

use crate::adjacency::AdjacencyGraph;

/// Deduplicated undirected edges, ascending by first then second vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EdgeList(Vec<[u32; 2]>);

impl EdgeList {
    /// Returns the number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u32; 2]> + '_ {
        self.0.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[[u32; 2]] {
        &self.0
    }

    /// Flattens to `[i0, j0, i1, j1, ...]`, the index layout of a line list.
    pub fn line_indices(&self) -> Vec<u32> {
        self.0.iter().flatten().copied().collect()
    }

    pub fn into_inner(self) -> Vec<[u32; 2]> {
        self.0
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a [u32; 2];
    type IntoIter = std::slice::Iter<'a, [u32; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Extracts each undirected edge once from the graph.
///
/// A pair is emitted only from its lower endpoint. Neighbor lists are sorted,
/// so the upper neighbors of `v` are a suffix of its list.
pub fn extract_edges(graph: &AdjacencyGraph) -> EdgeList {
    let mut edges = Vec::with_capacity(graph.edge_count());
    for (v, neighbors) in graph.iter() {
        let start = neighbors.partition_point(|&n| n <= v);
        edges.extend(neighbors[start..].iter().map(|&n| [v, n]));
    }
    EdgeList(edges)
}
