//! Velocity magnitude kernel.
//!
//! Geometry independent: the same `sqrt(u_x² + u_y²)` under both
//! axisymmetric and planar interpretations of the two components.

use fieldcast_core::{FieldId, FieldReader, FieldSet, KernelError, MeshTopology};
use fieldcast_kernel::{FieldKernel, KernelContext};

/// Writes `|u|` per cell.
///
/// ```
/// use fieldcast_core::FieldId;
/// use fieldcast_kernels::VelocityMagnitude;
///
/// let kernel = VelocityMagnitude::builder().velocity(FieldId(1)).build().unwrap();
/// assert_eq!(kernel.velocity(), FieldId(1));
/// ```
#[derive(Debug)]
pub struct VelocityMagnitude {
    velocity: FieldId,
}

/// Builder for [`VelocityMagnitude`]. Required field: `velocity`.
pub struct VelocityMagnitudeBuilder {
    velocity: Option<FieldId>,
}

impl VelocityMagnitude {
    /// Create a new builder.
    pub fn builder() -> VelocityMagnitudeBuilder {
        VelocityMagnitudeBuilder { velocity: None }
    }

    /// The velocity field read.
    pub fn velocity(&self) -> FieldId {
        self.velocity
    }
}

impl VelocityMagnitudeBuilder {
    /// Set the two-component velocity field.
    pub fn velocity(mut self, field: FieldId) -> Self {
        self.velocity = Some(field);
        self
    }

    /// Build the kernel.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `velocity` is not set.
    pub fn build(self) -> Result<VelocityMagnitude, String> {
        let velocity = self
            .velocity
            .ok_or_else(|| "velocity is required".to_string())?;
        Ok(VelocityMagnitude { velocity })
    }
}

impl FieldKernel for VelocityMagnitude {
    fn name(&self) -> &str {
        "VelocityMagnitude"
    }

    fn reads(&self) -> FieldSet {
        [self.velocity].into_iter().collect()
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
        let u = reads.read(self.velocity).ok_or(KernelError::MissingField {
            field_id: self.velocity,
        })?;
        if u.len() != cells * 2 {
            return Err(KernelError::ShapeMismatch {
                field_id: self.velocity,
                expected: cells * 2,
                found: u.len(),
            });
        }
        for (out, uv) in target.iter_mut().zip(u.chunks_exact(2)) {
            *out = (uv[0] * uv[0] + uv[1] * uv[1]).sqrt();
        }
        Ok(())
    }
}
