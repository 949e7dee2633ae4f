//! Adjacency builder configuration.
//!
//! Controls how degenerate triangles are treated and when the
//! builder switches to the parallel construction path.

use std::path::Path;

use meshring_types::constants::DEFAULT_PARALLEL_THRESHOLD;
use meshring_types::{MeshringError, MeshringResult};
use serde::{Deserialize, Serialize};

/// What the builder does with a triangle that repeats a vertex id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Keep the triangle's distinct pairs and drop the self pair.
    #[default]
    Lenient,
    /// Fail the whole build on the first degenerate triangle.
    Strict,
}

/// Configuration for [`AdjacencyBuilder`](crate::AdjacencyBuilder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjacencyConfig {
    /// Policy for triangles with a repeated vertex id.
    pub degenerate_policy: DegeneratePolicy,

    /// Triangle count at which `build` uses the rayon path.
    /// Zero disables the parallel path entirely.
    pub parallel_threshold: usize,
}

impl Default for AdjacencyConfig {
    fn default() -> Self {
        Self {
            degenerate_policy: DegeneratePolicy::Lenient,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl AdjacencyConfig {
    /// Rejects degenerate triangles instead of tolerating them.
    pub fn strict() -> Self {
        Self {
            degenerate_policy: DegeneratePolicy::Strict,
            ..Default::default()
        }
    }

    /// Never takes the parallel path, whatever the mesh size.
    pub fn serial() -> Self {
        Self {
            parallel_threshold: 0,
            ..Default::default()
        }
    }

    /// Whether a mesh with `triangle_count` triangles should be built in parallel.
    pub fn use_parallel(&self, triangle_count: usize) -> bool {
        self.parallel_threshold != 0 && triangle_count >= self.parallel_threshold
    }

    /// Parses a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(content: &str) -> MeshringResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| MeshringError::InvalidConfig(format!("TOML parse failed: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> MeshringResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes the config to TOML.
    pub fn to_toml_string(&self) -> MeshringResult<String> {
        toml::to_string(self)
            .map_err(|e| MeshringError::Serialization(format!("TOML serialization failed: {e}")))
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> MeshringResult<()> {
        if self.parallel_threshold > u32::MAX as usize {
            return Err(MeshringError::InvalidConfig(format!(
                "parallel_threshold {} exceeds the addressable triangle count",
                self.parallel_threshold
            )));
        }
        Ok(())
    }
}
