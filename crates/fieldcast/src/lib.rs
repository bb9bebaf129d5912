//! fieldcast: samples derived two-phase flow fields from a simulation
//! snapshot onto a uniform output grid.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the fieldcast sub-crates. It also ships the `fieldcast` binary:
//!
//! ```text
//! fieldcast [--geometry axisymmetric|planar] [--output PATH] \
//!     <filename> <xmin> <ymin> <xmax> <ymax> <ny>
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use fieldcast::prelude::*;
//!
//! // A 16x16 single-phase mesh in uniform flow.
//! let mut mesh = QuadMesh::new([0.0, 0.0], 1.0 / 16.0, 16, 16, EdgeBehavior::Clamp).unwrap();
//! mesh.add_field_fn(FieldDef::scalar("f"), |_, _| vec![1.0]).unwrap();
//! mesh.add_field_fn(FieldDef::vector("u", 2), |_, _| vec![3.0, 4.0]).unwrap();
//!
//! let plan = standard_registry(&mesh, Geometry::Planar)
//!     .unwrap()
//!     .dispatch(&mut mesh)
//!     .unwrap();
//! let vel = plan.iter().find(|c| c.name == "vel").unwrap().field;
//! let v = mesh.interpolate(vel, 0.5, 0.5).unwrap().value_or(NODATA);
//! assert!((v - 5.0).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fieldcast-core` | IDs, field definitions, errors, capability traits |
//! | [`mesh`] | `fieldcast-mesh` | Reference quad mesh, interpolation, snapshot codec |
//! | [`kernel`] | `fieldcast-kernel` | Kernel trait and the ordered field registry |
//! | [`kernels`] | `fieldcast-kernels` | Strain-rate and velocity-magnitude kernels |
//! | [`extract`] | `fieldcast-extract` | Validation, grid planning, sampling, row output |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`fieldcast-core`).
///
/// Contains field definitions, the error taxonomy and the capability
/// traits ([`types::FieldReader`], [`types::Interpolate`],
/// [`types::SnapshotRestore`]).
pub use fieldcast_core as types;

/// Reference source mesh and snapshot format (`fieldcast-mesh`).
pub use fieldcast_mesh as mesh;

/// Kernel trait and field registry (`fieldcast-kernel`).
///
/// [`kernel::FieldKernel`] is the extension point for new derived fields.
pub use fieldcast_kernel as kernel;

/// Derived-field kernels (`fieldcast-kernels`).
pub use fieldcast_kernels as kernels;

/// The extraction pipeline (`fieldcast-extract`).
///
/// [`extract::Extraction::run`] drives a whole run from validated
/// arguments to written rows.
pub use fieldcast_extract as extract;

/// Common imports for typical fieldcast usage.
///
/// ```rust
/// use fieldcast::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use fieldcast_core::{
        FieldDef, FieldId, FieldReader, FieldType, FieldWriter, Interpolate, MeshTopology,
        Sample, SnapshotRestore, SourceMesh, NODATA,
    };

    // Errors
    pub use fieldcast_core::{KernelError, RestoreError, SampleError};

    // Mesh
    pub use fieldcast_mesh::{dump_snapshot, EdgeBehavior, QuadMesh, SnapshotReader};

    // Kernels
    pub use fieldcast_kernel::{FieldKernel, FieldRegistry, KernelContext};
    pub use fieldcast_kernels::{Geometry, StrainRate, VelocityMagnitude};

    // Extraction
    pub use fieldcast_extract::{
        standard_registry, ExtractError, Extraction, ExtractionConfig, OutputGrid, RunSummary,
    };
}
