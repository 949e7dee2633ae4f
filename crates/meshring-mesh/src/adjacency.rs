//! Vertex adjacency graph.
//!
//! Builds, for every vertex, the sorted and deduplicated set of vertices it
//! shares a triangle with. The graph is built once from a [`TriangleMesh`]
//! and is immutable afterwards; a topology change means a full rebuild.
//!
//! Every triangle contributes each of its vertex pairs in both directions,
//! so the graph is symmetric. Pairs of equal ids (from a degenerate
//! triangle) are never stored, so no vertex is its own neighbor.
//!
//! Enumerating all ordered pairs within a cell equals listing its edges only
//! because cells are triangles. Polygon input must be triangulated first.

use meshring_types::{MeshringError, MeshringResult, TriangleId, VertexId};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::{AdjacencyConfig, DegeneratePolicy};
use crate::edges::{extract_edges, EdgeList};
use crate::mesh::TriangleMesh;
use crate::neighbors::{neighbors_of, one_ring, OneRing};

/// Ordered position pairs within a triangle, excluding `(i, i)`.
const ORDERED_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)];

/// Per-vertex neighbor sets of a triangle mesh.
///
/// Invariants:
/// - each list is strictly ascending (sorted, no duplicates)
/// - `j ∈ neighbors(i)` iff `i ∈ neighbors(j)`
/// - `i ∉ neighbors(i)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyGraph {
    neighbors: Vec<Vec<u32>>,
}

impl AdjacencyGraph {
    /// Builds the graph with the default configuration.
    pub fn from_mesh(mesh: &TriangleMesh) -> MeshringResult<Self> {
        AdjacencyBuilder::default().build(mesh)
    }

    /// Returns the number of vertices (including isolated ones).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Returns the sorted neighbor set of `v`.
    pub fn neighbors(&self, v: u32) -> MeshringResult<&[u32]> {
        neighbors_of(self, v)
    }

    /// Returns the number of neighbors of `v`.
    pub fn degree(&self, v: u32) -> MeshringResult<usize> {
        self.neighbors(v).map(<[u32]>::len)
    }

    /// Returns `v` together with its immediate neighbors.
    pub fn one_ring(&self, v: u32) -> MeshringResult<OneRing> {
        one_ring(self, v)
    }

    /// Returns the canonical undirected edge list.
    pub fn edges(&self) -> EdgeList {
        extract_edges(self)
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Iterates over `(vertex, neighbors)` in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .map(|(v, list)| (v as u32, list.as_slice()))
    }

    /// Returns all neighbor lists, indexed by vertex id.
    #[inline]
    pub fn as_lists(&self) -> &[Vec<u32>] {
        &self.neighbors
    }

    /// Summarizes degree distribution.
    pub fn stats(&self) -> GraphStats {
        let vertex_count = self.vertex_count();
        let degrees = self.neighbors.iter().map(Vec::len);
        let total: usize = degrees.clone().sum();
        GraphStats {
            vertex_count,
            edge_count: total / 2,
            min_degree: degrees.clone().min().unwrap_or(0),
            max_degree: degrees.clone().max().unwrap_or(0),
            mean_degree: if vertex_count == 0 {
                0.0
            } else {
                total as f64 / vertex_count as f64
            },
            isolated_vertices: degrees.filter(|&d| d == 0).count(),
        }
    }
}

/// Degree summary of an [`AdjacencyGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
    /// Vertices not referenced by any triangle.
    pub isolated_vertices: usize,
}

/// Single-pass construction of an [`AdjacencyGraph`] from a mesh.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyBuilder {
    config: AdjacencyConfig,
}

impl AdjacencyBuilder {
    /// Creates a builder with the given configuration.
    pub fn new(config: AdjacencyConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &AdjacencyConfig {
        &self.config
    }

    /// Builds the adjacency graph.
    ///
    /// Fails with [`MeshringError::OutOfRangeVertexId`] if any triangle
    /// references a vertex outside `[0, vertex_count)`, and in strict mode
    /// with [`MeshringError::DegenerateTriangle`]. On failure no graph is
    /// produced. Large meshes take the parallel path (see
    /// [`AdjacencyConfig::parallel_threshold`]); the result is identical.
    pub fn build(&self, mesh: &TriangleMesh) -> MeshringResult<AdjacencyGraph> {
        if self.config.use_parallel(mesh.triangle_count()) {
            self.build_parallel(mesh)
        } else {
            self.build_serial(mesh)
        }
    }

    /// Builds the graph on the current thread.
    pub fn build_serial(&self, mesh: &TriangleMesh) -> MeshringResult<AdjacencyGraph> {
        mesh.check_shape()?;
        let n = mesh.vertex_count();

        let mut neighbors: Vec<Vec<u32>> = vec![Vec::new(); n];
        let mut degenerate = 0usize;
        for (t, tri) in mesh.triangles().enumerate() {
            if self.check_triangle(t, tri, n)? {
                degenerate += 1;
            }
            for (from, to) in directed_pairs(tri) {
                neighbors[from as usize].push(to);
            }
        }

        for list in &mut neighbors {
            dedupe_neighbors(list);
        }

        let graph = AdjacencyGraph { neighbors };
        log_build(mesh, &graph, degenerate, false);
        Ok(graph)
    }

    /// Builds the graph with rayon.
    ///
    /// Per-triangle pair emission runs in parallel. The pairs are sorted and
    /// deduplicated globally, then bucketed per vertex on one thread, so each
    /// neighbor list has a single writer.
    pub fn build_parallel(&self, mesh: &TriangleMesh) -> MeshringResult<AdjacencyGraph> {
        mesh.check_shape()?;
        let n = mesh.vertex_count();

        let checks: Vec<bool> = mesh
            .indices
            .par_chunks_exact(3)
            .enumerate()
            .map(|(t, c)| self.check_triangle(t, [c[0], c[1], c[2]], n))
            .collect::<MeshringResult<Vec<bool>>>()
            .map_err(|_| self.first_failure(mesh))?;
        let degenerate = checks.iter().filter(|&&d| d).count();

        let mut pairs: Vec<(u32, u32)> = mesh
            .indices
            .par_chunks_exact(3)
            .flat_map_iter(|c| directed_pairs([c[0], c[1], c[2]]))
            .collect();
        pairs.par_sort_unstable();
        pairs.dedup();

        let mut neighbors: Vec<Vec<u32>> = vec![Vec::new(); n];
        for (from, to) in pairs {
            neighbors[from as usize].push(to);
        }

        let graph = AdjacencyGraph { neighbors };
        log_build(mesh, &graph, degenerate, true);
        Ok(graph)
    }

    /// Checks one triangle. Returns whether it is degenerate (and tolerated).
    ///
    /// Bounds are checked before degeneracy, so an out-of-range id always
    /// wins over a repeated one.
    fn check_triangle(&self, t: usize, tri: [u32; 3], vertex_count: usize) -> MeshringResult<bool> {
        if let Some(&v) = tri.iter().find(|&&v| v as usize >= vertex_count) {
            return Err(MeshringError::OutOfRangeVertexId {
                triangle: TriangleId(t as u32),
                vertex: VertexId(v),
                vertex_count,
            });
        }

        let [a, b, c] = tri;
        if a != b && b != c && a != c {
            return Ok(false);
        }
        match self.config.degenerate_policy {
            DegeneratePolicy::Strict => Err(MeshringError::DegenerateTriangle {
                triangle: TriangleId(t as u32),
                vertices: tri,
            }),
            DegeneratePolicy::Lenient => {
                tracing::debug!(triangle = t, vertices = ?tri, "tolerating degenerate triangle");
                Ok(true)
            }
        }
    }

    /// Re-checks triangles in index order so the parallel path reports the
    /// same error as the serial one.
    fn first_failure(&self, mesh: &TriangleMesh) -> MeshringError {
        let n = mesh.vertex_count();
        mesh.triangles()
            .enumerate()
            .find_map(|(t, tri)| self.check_triangle(t, tri, n).err())
            .unwrap_or_else(|| MeshringError::InvalidMesh("triangle check failed".into()))
    }
}

/// Sorts a neighbor list ascending and drops repeated ids.
///
/// Idempotent: applying it to an already canonical list changes nothing.
pub fn dedupe_neighbors(list: &mut Vec<u32>) {
    list.sort_unstable();
    list.dedup();
}

/// Directed neighbor relations contributed by one triangle, self pairs removed.
fn directed_pairs(tri: [u32; 3]) -> impl Iterator<Item = (u32, u32)> {
    ORDERED_PAIRS
        .into_iter()
        .map(move |(i, j)| (tri[i], tri[j]))
        .filter(|(from, to)| from != to)
}

fn log_build(mesh: &TriangleMesh, graph: &AdjacencyGraph, degenerate: usize, parallel: bool) {
    tracing::debug!(
        vertices = graph.vertex_count(),
        triangles = mesh.triangle_count(),
        edges = graph.edge_count(),
        degenerate,
        parallel,
        "adjacency graph built"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_pairs_of_regular_triangle() {
        let pairs: Vec<_> = directed_pairs([4, 5, 6]).collect();
        assert_eq!(pairs, vec![(4, 5), (4, 6), (5, 4), (5, 6), (6, 4), (6, 5)]);
    }

    #[test]
    fn directed_pairs_skip_repeated_ids() {
        let pairs: Vec<_> = directed_pairs([2, 2, 3]).collect();
        assert_eq!(pairs, vec![(2, 3), (2, 3), (3, 2), (3, 2)]);
    }

    #[test]
    fn directed_pairs_of_collapsed_triangle() {
        assert_eq!(directed_pairs([1, 1, 1]).count(), 0);
    }
}
