//! # meshring-io
//!
//! The boundary between the adjacency core and the outside world:
//!
//! - [`contract`] — JSON mesh input (`positions` + `triangles`).
//! - [`exporter`] — Wireframe edges and an optional highlighted one-ring,
//!   serialized as JSON for an external viewer.

pub mod contract;
pub mod exporter;

pub use contract::{load_mesh, MeshInput};
pub use exporter::{HighlightExport, WireframeExport};
