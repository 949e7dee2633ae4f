//! Defaults shared by the generators, builder configuration and CLI.

/// Default sphere radius for the demo pipeline.
pub const DEFAULT_SPHERE_RADIUS: f32 = 5.0;

/// Default number of longitude divisions of the demo sphere.
pub const DEFAULT_THETA_RESOLUTION: usize = 8;

/// Default number of latitude divisions (pole to pole) of the demo sphere.
pub const DEFAULT_PHI_RESOLUTION: usize = 8;

/// Minimum theta/phi resolution that still produces a closed surface.
pub const MIN_SPHERE_RESOLUTION: usize = 3;

/// Vertex whose one-ring is highlighted when none is requested.
pub const DEFAULT_HIGHLIGHT_VERTEX: u32 = 0;

/// Triangle count at which the builder switches to the parallel path.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;
