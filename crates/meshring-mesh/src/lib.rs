//! # meshring-mesh
//!
//! Triangle mesh representation and the vertex-adjacency graph built from it.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — Point positions (SoA) plus a flat triangle index buffer.
//! - [`AdjacencyBuilder`] — Single-pass construction of the adjacency graph.
//! - [`AdjacencyGraph`] — Sorted, duplicate-free neighbor list per vertex.
//! - [`EdgeList`] — Canonical undirected edges `(i, j)` with `i < j`.
//! - [`OneRing`] — A vertex together with its immediate neighbors.
//! - Procedural generators (closed lat-long sphere, quad grid).

pub mod adjacency;
pub mod config;
pub mod edges;
pub mod generators;
pub mod mesh;
pub mod neighbors;

pub use adjacency::{AdjacencyBuilder, AdjacencyGraph, GraphStats};
pub use config::{AdjacencyConfig, DegeneratePolicy};
pub use edges::{extract_edges, EdgeList};
pub use mesh::TriangleMesh;
pub use neighbors::{neighbors_of, one_ring, OneRing};
