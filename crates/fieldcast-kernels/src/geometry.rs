//! Coordinate geometry of the source snapshot.

use std::fmt;
use std::str::FromStr;

/// Radial coordinates at or below this are treated as on the symmetry axis.
pub const AXIS_EPSILON: f64 = 1e-10;

/// How the two mesh axes map to physical coordinates.
///
/// Only the strain-rate kernel depends on this. Under
/// [`Axisymmetric`](Geometry::Axisymmetric), x is the symmetry axis and y
/// is the radius, so the strain tensor gains the azimuthal term
/// `D22 = u_y / y`. Under [`Planar`](Geometry::Planar) the flow is plain
/// two-dimensional and the term is absent.
///
/// # Examples
///
/// ```
/// use fieldcast_kernels::Geometry;
///
/// assert_eq!("planar".parse::<Geometry>().unwrap(), Geometry::Planar);
/// assert_eq!(Geometry::Axisymmetric.hoop_strain(2.0, 0.5), Some(4.0));
/// assert_eq!(Geometry::Axisymmetric.hoop_strain(2.0, 0.0), Some(0.0));
/// assert_eq!(Geometry::Planar.hoop_strain(2.0, 0.5), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// x axial, y radial; adds the azimuthal strain term.
    #[default]
    Axisymmetric,
    /// Cartesian two-dimensional flow.
    Planar,
}

impl Geometry {
    /// The azimuthal strain `D22` for radial velocity `u_r` at radius `r`.
    ///
    /// `None` when the geometry has no such term. On the axis
    /// (`r <= AXIS_EPSILON`) the term is zero.
    pub fn hoop_strain(self, u_r: f64, r: f64) -> Option<f64> {
        match self {
            Self::Axisymmetric if r > AXIS_EPSILON => Some(u_r / r),
            Self::Axisymmetric => Some(0.0),
            Self::Planar => None,
        }
    }

    /// Second invariant `D²` from the in-plane components and, where the
    /// geometry has one, the azimuthal term.
    pub fn strain_invariant(self, d11: f64, d33: f64, d13: f64, u_r: f64, r: f64) -> f64 {
        let planar = d11 * d11 + d33 * d33 + 2.0 * d13 * d13;
        match self.hoop_strain(u_r, r) {
            Some(d22) => planar + d22 * d22,
            None => planar,
        }
    }

    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Axisymmetric => "axisymmetric",
            Self::Planar => "planar",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognised geometry name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseGeometryError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown geometry '{}' (expected 'axisymmetric' or 'planar')",
            self.input
        )
    }
}

impl std::error::Error for ParseGeometryError {}

impl FromStr for Geometry {
    type Err = ParseGeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "axisymmetric" | "axi" => Ok(Self::Axisymmetric),
            "planar" | "2d" => Ok(Self::Planar),
            _ => Err(ParseGeometryError { input: s.into() }),
        }
    }
}
