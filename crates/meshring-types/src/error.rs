//! Error types for meshring.
//!
//! All crates return `MeshringResult<T>` from fallible operations.

use thiserror::Error;

use crate::ids::{TriangleId, VertexId};

/// Unified error type for meshring.
#[derive(Debug, Error)]
pub enum MeshringError {
    /// A triangle references a vertex outside `[0, vertex_count)`.
    #[error("Triangle {triangle} references vertex {vertex}, but the mesh has {vertex_count} vertices")]
    OutOfRangeVertexId {
        triangle: TriangleId,
        vertex: VertexId,
        vertex_count: usize,
    },

    /// A neighbor lookup asked for a vertex outside `[0, vertex_count)`.
    #[error("Vertex {vertex} is out of range (graph has {vertex_count} vertices)")]
    OutOfRangeQuery {
        vertex: VertexId,
        vertex_count: usize,
    },

    /// A triangle repeats a vertex id and the builder runs in strict mode.
    #[error("Triangle {triangle} is degenerate: {vertices:?}")]
    DegenerateTriangle {
        triangle: TriangleId,
        vertices: [u32; 3],
    },

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, MeshringError>`.
pub type MeshringResult<T> = Result<T, MeshringError>;
