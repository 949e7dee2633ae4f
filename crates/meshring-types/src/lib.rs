//! # meshring-types
//!
//! Shared types, identifiers, error types, and defaults
//! for the meshring vertex-adjacency toolkit.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other meshring crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{MeshringError, MeshringResult};
pub use ids::{TriangleId, VertexId};
