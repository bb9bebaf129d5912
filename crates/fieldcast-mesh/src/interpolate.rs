//! Bilinear point interpolation over a [`QuadMesh`].
//!
//! Values live at cell centres. A point is interpolated from the four
//! centres surrounding it; within half a cell of the domain edge the
//! missing centres are supplied by the mesh's [`EdgeBehavior`](crate::EdgeBehavior)
//! exactly as stencil ghosts are. Points outside the closed domain
//! rectangle yield [`Sample::Outside`].

use smallvec::{smallvec, SmallVec};

use fieldcast_core::{FieldId, FieldReader, Interpolate, Sample, SampleError, SourceMesh};

use crate::quadmesh::QuadMesh;

/// Flat cell indices and their bilinear weights. Weights sum to 1.
pub type Stencil = SmallVec<[(usize, f64); 4]>;

impl QuadMesh {
    /// Compute the bilinear stencil for `(x, y)`, or `None` outside the domain.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcast_mesh::{EdgeBehavior, QuadMesh};
    ///
    /// let mesh = QuadMesh::new([0.0, 0.0], 1.0, 2, 2, EdgeBehavior::Clamp).unwrap();
    /// // The domain centre is equidistant from all four cell centres.
    /// let stencil = mesh.bilinear_stencil(1.0, 1.0).unwrap();
    /// assert!(stencil.iter().all(|&(_, w)| (w - 0.25).abs() < 1e-12));
    /// assert!(mesh.bilinear_stencil(2.5, 1.0).is_none());
    /// ```
    pub fn bilinear_stencil(&self, x: f64, y: f64) -> Option<Stencil> {
        if !self.contains(x, y) {
            return None;
        }
        let [x0, y0] = self.origin();
        let edge = self.edge_behavior();

        let fx = (x - x0) / self.delta() - 0.5;
        let fy = (y - y0) / self.delta() - 0.5;
        let i0 = fx.floor();
        let j0 = fy.floor();
        let tx = fx - i0;
        let ty = fy - j0;

        let c0 = edge.resolve(i0 as i64, self.cols());
        let c1 = edge.resolve(i0 as i64 + 1, self.cols());
        let r0 = edge.resolve(j0 as i64, self.rows());
        let r1 = edge.resolve(j0 as i64 + 1, self.rows());

        Some(smallvec![
            (self.flat(c0, r0), (1.0 - tx) * (1.0 - ty)),
            (self.flat(c1, r0), tx * (1.0 - ty)),
            (self.flat(c0, r1), (1.0 - tx) * ty),
            (self.flat(c1, r1), tx * ty),
        ])
    }
}

/// Apply a stencil to scalar cell data.
pub fn apply_stencil(stencil: &Stencil, data: &[f64]) -> f64 {
    stencil.iter().map(|&(cell, w)| data[cell] * w).sum()
}

impl Interpolate for QuadMesh {
    fn interpolate(&self, field: FieldId, x: f64, y: f64) -> Result<Sample, SampleError> {
        let def = self
            .field_def(field)
            .ok_or(SampleError::UnknownField { field_id: field })?;
        if !def.field_type.is_scalar() {
            return Err(SampleError::NotScalar { field_id: field });
        }
        let data = self
            .read(field)
            .ok_or(SampleError::UnknownField { field_id: field })?;
        Ok(match self.bilinear_stencil(x, y) {
            Some(stencil) => Sample::Value(apply_stencil(&stencil, data)),
            None => Sample::Outside,
        })
    }
}
