//! Benchmark profiles for the fieldcast extraction pipeline.
//!
//! - [`reference_profile`]: 256x256 rising bubble (65K cells)
//! - [`stress_profile`]: 1024x1024 rising bubble (~1M cells)
//! - [`reference_config`]: unit-square extraction at a given `ny`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::error::Error;

use fieldcast_core::FieldDef;
use fieldcast_extract::{ArgumentError, ExtractionConfig};
use fieldcast_kernels::{VELOCITY, VOLUME_FRACTION};
use fieldcast_mesh::{EdgeBehavior, QuadMesh};

/// Interface half-thickness of the bubble, in domain units.
const INTERFACE_WIDTH: f64 = 0.01;

/// A bubble of radius 0.2 at (0.5, 0.3) on an `n x n` unit square,
/// with a smooth interface and a recirculating velocity field.
pub fn rising_bubble(n: u32) -> Result<QuadMesh, Box<dyn Error>> {
    let mut mesh = QuadMesh::new([0.0, 0.0], 1.0 / n as f64, n, n, EdgeBehavior::Clamp)?;
    mesh.add_field_fn(FieldDef::scalar(VOLUME_FRACTION), |x, y| {
        let r = ((x - 0.5).powi(2) + (y - 0.3).powi(2)).sqrt();
        vec![0.5 * (1.0 - ((r - 0.2) / INTERFACE_WIDTH).tanh())]
    })?;
    mesh.add_field_fn(FieldDef::vector(VELOCITY, 2), |x, y| {
        let (sx, sy) = (std::f64::consts::PI * x, std::f64::consts::PI * y);
        vec![-sx.sin() * sy.cos() * 0.1, sx.cos() * sy.sin() * 0.1 + 0.05]
    })?;
    Ok(mesh)
}

/// 256x256 cells.
pub fn reference_profile() -> Result<QuadMesh, Box<dyn Error>> {
    rising_bubble(256)
}

/// 1024x1024 cells.
pub fn stress_profile() -> Result<QuadMesh, Box<dyn Error>> {
    rising_bubble(1024)
}

/// Extract the whole unit square with `ny` output rows.
pub fn reference_config(ny: u32) -> Result<ExtractionConfig, ArgumentError> {
    ExtractionConfig::new("bench.fcsn", [0.0, 0.0], [1.0, 1.0], ny)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldcast_core::{FieldReader, SourceMesh};

    #[test]
    fn bubble_is_two_phase() {
        let mesh = rising_bubble(64).unwrap();
        let f = mesh.read(mesh.field_id(VOLUME_FRACTION).unwrap()).unwrap();
        assert!(f.iter().any(|&v| v > 0.99));
        assert!(f.iter().any(|&v| v < 0.01));
        assert!(f.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn reference_config_is_square() {
        let cfg = reference_config(128).unwrap();
        assert_eq!(cfg.ny(), 128);
        assert!(reference_config(0).is_err());
    }
}
