//! Log-scaled strain-rate invariant kernel.
//!
//! Reads the volume fraction and velocity and writes, per cell,
//! `log10(μr · D²)` where `D²` is the second invariant of the strain-rate
//! tensor and `μr` blends the phase viscosities across interface cells.
//!
//! Constructed via the builder pattern: [`StrainRate::builder`].

use fieldcast_core::{FieldId, FieldReader, FieldSet, KernelError, MeshTopology};
use fieldcast_kernel::{FieldKernel, KernelContext};

use crate::geometry::Geometry;

/// Viscosity of the secondary phase relative to the primary phase.
pub const GAS_VISCOSITY_RATIO: f64 = 0.02;

/// Value written where `μr · D²` has no finite positive logarithm.
pub const STRAIN_FLOOR: f64 = -10.0;

/// Phase-blended viscosity ratio `f + (1 - f) * GAS_VISCOSITY_RATIO`.
pub fn viscosity_ratio(f: f64) -> f64 {
    f + (1.0 - f) * GAS_VISCOSITY_RATIO
}

/// `log10(v)` for finite positive `v`, [`STRAIN_FLOOR`] otherwise.
///
/// ```
/// use fieldcast_kernels::strain_rate::log_strain;
///
/// assert_eq!(log_strain(100.0), 2.0);
/// assert_eq!(log_strain(0.0), -10.0);
/// assert_eq!(log_strain(f64::NAN), -10.0);
/// ```
pub fn log_strain(v: f64) -> f64 {
    if v > 0.0 && v.is_finite() {
        v.log10()
    } else {
        STRAIN_FLOOR
    }
}

/// Strain-rate invariant kernel.
///
/// Central differences over the four face neighbours of each cell, with
/// `Δ` the cell's own size and `[dx, dy]` cell offsets:
///
/// ```text
/// D11 = (u_y[0,+1] - u_y[0,-1]) / 2Δ
/// D33 = (u_x[+1,0] - u_x[-1,0]) / 2Δ
/// D13 = ½ ((u_y[+1,0] - u_y[-1,0]) + (u_x[0,+1] - u_x[0,-1])) / 2Δ
/// D²  = D11² + D33² + 2 D13²  (+ D22² when axisymmetric)
/// ```
///
/// Neighbours beyond the mesh edge come from the mesh's edge behavior.
///
/// # Construction
///
/// ```
/// use fieldcast_core::FieldId;
/// use fieldcast_kernels::{Geometry, StrainRate};
///
/// let kernel = StrainRate::builder()
///     .volume_fraction(FieldId(0))
///     .velocity(FieldId(1))
///     .geometry(Geometry::Planar)
///     .build()
///     .unwrap();
/// assert_eq!(kernel.geometry(), Geometry::Planar);
/// ```
#[derive(Debug)]
pub struct StrainRate {
    volume_fraction: FieldId,
    velocity: FieldId,
    geometry: Geometry,
}

/// Builder for [`StrainRate`].
///
/// Required fields: `volume_fraction` and `velocity`. `geometry` defaults
/// to [`Geometry::Axisymmetric`].
pub struct StrainRateBuilder {
    volume_fraction: Option<FieldId>,
    velocity: Option<FieldId>,
    geometry: Geometry,
}

impl StrainRate {
    /// Create a new builder for configuring a `StrainRate` kernel.
    pub fn builder() -> StrainRateBuilder {
        StrainRateBuilder {
            volume_fraction: None,
            velocity: None,
            geometry: Geometry::default(),
        }
    }

    /// The geometry this kernel evaluates under.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }
}

impl StrainRateBuilder {
    /// Set the scalar volume-fraction field.
    pub fn volume_fraction(mut self, field: FieldId) -> Self {
        self.volume_fraction = Some(field);
        self
    }

    /// Set the two-component velocity field.
    pub fn velocity(mut self, field: FieldId) -> Self {
        self.velocity = Some(field);
        self
    }

    /// Set the coordinate geometry.
    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Build the kernel, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `volume_fraction` or `velocity` is not set, or if
    /// both name the same field.
    pub fn build(self) -> Result<StrainRate, String> {
        let volume_fraction = self
            .volume_fraction
            .ok_or_else(|| "volume_fraction is required".to_string())?;
        let velocity = self
            .velocity
            .ok_or_else(|| "velocity is required".to_string())?;
        if volume_fraction == velocity {
            return Err(format!(
                "volume_fraction and velocity must differ, both are {velocity}"
            ));
        }
        Ok(StrainRate {
            volume_fraction,
            velocity,
            geometry: self.geometry,
        })
    }
}

fn read_exact<'a>(
    reads: &'a dyn FieldReader,
    field: FieldId,
    expected: usize,
) -> Result<&'a [f64], KernelError> {
    let data = reads
        .read(field)
        .ok_or(KernelError::MissingField { field_id: field })?;
    if data.len() != expected {
        return Err(KernelError::ShapeMismatch {
            field_id: field,
            expected,
            found: data.len(),
        });
    }
    Ok(data)
}

impl FieldKernel for StrainRate {
    fn name(&self) -> &str {
        "StrainRate"
    }

    fn reads(&self) -> FieldSet {
        [self.volume_fraction, self.velocity].into_iter().collect()
    }

    fn compute(&self, ctx: &mut KernelContext<'_>) -> Result<(), KernelError> {
        let (reads, mesh, target) = ctx.split();
        let cells = mesh.cell_count();
        if target.len() != cells {
            return Err(KernelError::TargetSize {
                expected: cells,
                found: target.len(),
            });
        }
        let f = read_exact(reads, self.volume_fraction, cells)?;
        let u = read_exact(reads, self.velocity, cells * 2)?;
        let ux = |c: usize| u[c * 2];
        let uy = |c: usize| u[c * 2 + 1];

        for (cell, out) in target.iter_mut().enumerate() {
            let two_delta = 2.0 * mesh.cell_size(cell);
            let east = mesh.offset(cell, 1, 0);
            let west = mesh.offset(cell, -1, 0);
            let north = mesh.offset(cell, 0, 1);
            let south = mesh.offset(cell, 0, -1);

            let d11 = (uy(north) - uy(south)) / two_delta;
            let d33 = (ux(east) - ux(west)) / two_delta;
            let d13 = 0.5 * ((uy(east) - uy(west)) + (ux(north) - ux(south))) / two_delta;

            let r = mesh.cell_center(cell)[1];
            let d2 = self.geometry.strain_invariant(d11, d33, d13, uy(cell), r);
            *out = log_strain(viscosity_ratio(f[cell]) * d2);
        }
        Ok(())
    }
}
