//! Core types and traits for the fieldcast extraction pipeline.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other fieldcast crate: field ids and
//! descriptors, error types, and the narrow capability traits through
//! which the pipeline talks to a restored source mesh.
//!
//! The pipeline never names a concrete mesh. It reads cell data through
//! [`FieldReader`], walks stencils through [`MeshTopology`], samples
//! arbitrary points through [`Interpolate`], and obtains a mesh in the
//! first place through [`SnapshotRestore`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod id;
pub mod traits;

pub use error::{FieldError, KernelError, RestoreError, SampleError};
pub use field::{FieldDef, FieldSet, FieldSetIter, FieldType};
pub use id::FieldId;
pub use traits::{
    FieldReader, FieldWriter, Interpolate, MeshTopology, Sample, SnapshotRestore, SourceMesh,
};

/// Sentinel written for samples that fall outside the source mesh.
///
/// Large enough that no physical field value collides with it and
/// visualization tools can mask it with a simple threshold.
pub const NODATA: f64 = 1e30;
