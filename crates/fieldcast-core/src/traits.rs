//! Capability traits between the extraction pipeline and a source mesh.
//!
//! A restored mesh is reached only through these traits. Kernels see a
//! [`FieldReader`] plus a [`MeshTopology`]; the sampler sees an
//! [`Interpolate`]; the registry needs the full [`SourceMesh`] so it can
//! declare the derived fields it fills.

use std::path::Path;

use crate::error::{FieldError, RestoreError, SampleError};
use crate::field::FieldDef;
use crate::id::FieldId;

/// Read-only access to per-cell field data.
pub trait FieldReader {
    /// Read the data for a field as a flat f64 slice.
    ///
    /// Vector fields are interleaved per cell. Returns `None` if the
    /// field ID is not present.
    fn read(&self, field: FieldId) -> Option<&[f64]>;
}

/// Mutable access to per-cell field data.
pub trait FieldWriter {
    /// Get a mutable slice for writing field data.
    ///
    /// Returns `None` if the field ID is not present.
    fn write(&mut self, field: FieldId) -> Option<&mut [f64]>;
}

/// Cell geometry and stencil navigation over a source mesh.
///
/// Cells are addressed by a flat index in `0..cell_count()`.
pub trait MeshTopology {
    /// Total number of leaf cells.
    fn cell_count(&self) -> usize;

    /// Edge length of the cell (the local Δ).
    fn cell_size(&self, cell: usize) -> f64;

    /// Centre coordinates `[x, y]` of the cell.
    fn cell_center(&self, cell: usize) -> [f64; 2];

    /// Flat index of the cell `dx` cells along x and `dy` cells along y.
    ///
    /// Offsets that leave the mesh are resolved by the mesh's edge
    /// behavior, so the result is always a valid cell index.
    fn offset(&self, cell: usize, dx: i32, dy: i32) -> usize;
}

/// Outcome of interpolating a field at a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    /// The point lies inside the mesh domain.
    Value(f64),
    /// The point lies outside the mesh domain.
    Outside,
}

impl Sample {
    /// The sampled value, or `fallback` for points outside the domain.
    pub fn value_or(self, fallback: f64) -> f64 {
        match self {
            Self::Value(v) => v,
            Self::Outside => fallback,
        }
    }
}

/// Point evaluation of a scalar field at an arbitrary coordinate.
pub trait Interpolate {
    /// Interpolate `field` at `(x, y)`.
    ///
    /// Total over in-domain coordinates: every point inside the mesh
    /// bounds yields [`Sample::Value`].
    fn interpolate(&self, field: FieldId, x: f64, y: f64) -> Result<Sample, SampleError>;
}

/// A restored simulation mesh that derived fields can be added to.
pub trait SourceMesh: FieldReader + FieldWriter + MeshTopology + Interpolate {
    /// Look up a field by name.
    fn field_id(&self, name: &str) -> Option<FieldId>;

    /// Definition of a field, if present.
    fn field_def(&self, field: FieldId) -> Option<&FieldDef>;

    /// Declare a new zero-filled scalar field sized to the mesh.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Duplicate`] if the name is taken.
    fn declare_scalar(&mut self, name: &str) -> Result<FieldId, FieldError>;
}

/// Restores a snapshot artifact into a mesh.
pub trait SnapshotRestore {
    /// The mesh type produced by a successful restore.
    type Mesh: SourceMesh;

    /// Restore the snapshot at `path`.
    fn restore(&self, path: &Path) -> Result<Self::Mesh, RestoreError>;
}
