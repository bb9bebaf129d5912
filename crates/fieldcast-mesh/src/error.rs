//! Error types for mesh construction.

use std::fmt;

/// Errors arising from constructing a [`QuadMesh`](crate::QuadMesh).
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Attempted to construct a mesh with zero cells.
    EmptyMesh,
    /// Cell size is zero, negative, or not finite.
    InvalidCellSize {
        /// The rejected value.
        value: f64,
    },
    /// Origin coordinates are not finite.
    InvalidOrigin {
        /// The rejected origin.
        origin: [f64; 2],
    },
    /// A dimension exceeds the maximum supported size.
    DimensionTooLarge {
        /// Which dimension (`"cols"`, `"rows"` or `"cells"`).
        name: &'static str,
        /// The requested value.
        value: u64,
        /// The maximum allowed value.
        max: u64,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMesh => write!(f, "mesh must have at least one cell"),
            Self::InvalidCellSize { value } => {
                write!(f, "cell size must be finite and positive, got {value}")
            }
            Self::InvalidOrigin { origin } => {
                write!(f, "origin must be finite, got {origin:?}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for MeshError {}
