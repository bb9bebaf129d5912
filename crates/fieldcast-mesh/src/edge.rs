//! Stencil behavior at the edges of a mesh.

use std::fmt;
use std::str::FromStr;

/// How a mesh resolves stencil offsets that leave its domain.
///
/// Finite-difference kernels always read both neighbours of a cell, so
/// every offset must resolve to some cell. This controls which one.
///
/// # Examples
///
/// ```
/// use fieldcast_mesh::EdgeBehavior;
///
/// assert_eq!(EdgeBehavior::Clamp.resolve(-1, 4), 0);
/// assert_eq!(EdgeBehavior::Wrap.resolve(-1, 4), 3);
/// assert_eq!(EdgeBehavior::Wrap.resolve(2, 4), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-range neighbour is the boundary cell itself (zero-gradient ghost).
    #[default]
    Clamp,
    /// Out-of-range neighbour wraps to the opposite side (periodic).
    Wrap,
}

impl EdgeBehavior {
    /// Resolve an axis index against an axis of `len` cells.
    pub fn resolve(self, val: i64, len: u32) -> u32 {
        let n = len as i64;
        if val >= 0 && val < n {
            return val as u32;
        }
        match self {
            Self::Clamp => val.clamp(0, n - 1) as u32,
            Self::Wrap => val.rem_euclid(n) as u32,
        }
    }

    /// Stable tag used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clamp => "clamp",
            Self::Wrap => "wrap",
        }
    }
}

impl fmt::Display for EdgeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognised edge-behavior name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseEdgeError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseEdgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown edge behavior '{}' (expected 'clamp' or 'wrap')",
            self.input
        )
    }
}

impl std::error::Error for ParseEdgeError {}

impl FromStr for EdgeBehavior {
    type Err = ParseEdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clamp" => Ok(Self::Clamp),
            "wrap" | "periodic" => Ok(Self::Wrap),
            _ => Err(ParseEdgeError { input: s.into() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_is_identity() {
        assert_eq!(EdgeBehavior::Clamp.resolve(2, 5), 2);
        assert_eq!(EdgeBehavior::Wrap.resolve(0, 5), 0);
    }

    #[test]
    fn clamp_pins_to_boundary() {
        assert_eq!(EdgeBehavior::Clamp.resolve(-1, 5), 0);
        assert_eq!(EdgeBehavior::Clamp.resolve(7, 5), 4);
    }

    #[test]
    fn wrap_is_periodic() {
        assert_eq!(EdgeBehavior::Wrap.resolve(-1, 5), 4);
        assert_eq!(EdgeBehavior::Wrap.resolve(5, 5), 0);
        assert_eq!(EdgeBehavior::Wrap.resolve(7, 5), 2);
        assert_eq!(EdgeBehavior::Wrap.resolve(-6, 5), 4);
    }

    #[test]
    fn single_cell_axis() {
        assert_eq!(EdgeBehavior::Clamp.resolve(-1, 1), 0);
        assert_eq!(EdgeBehavior::Wrap.resolve(1, 1), 0);
    }

    #[test]
    fn parse_names() {
        assert_eq!("clamp".parse(), Ok(EdgeBehavior::Clamp));
        assert_eq!("Wrap".parse(), Ok(EdgeBehavior::Wrap));
        assert_eq!("periodic".parse(), Ok(EdgeBehavior::Wrap));
        let err = "absorb".parse::<EdgeBehavior>().unwrap_err();
        assert_eq!(err.input, "absorb");
        for edge in [EdgeBehavior::Clamp, EdgeBehavior::Wrap] {
            assert_eq!(edge.to_string().parse(), Ok(edge));
        }
    }
}
