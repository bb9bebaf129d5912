//! Field names shared by snapshots and the standard extraction.

/// Source scalar: volume fraction of the primary phase, in `[0, 1]`.
pub const VOLUME_FRACTION: &str = "f";
/// Source vector: velocity, two components interleaved per cell.
pub const VELOCITY: &str = "u";
/// Derived scalar: log-scaled strain-rate invariant.
pub const STRAIN_RATE: &str = "D2c";
/// Derived scalar: velocity magnitude.
pub const VELOCITY_MAGNITUDE: &str = "vel";
