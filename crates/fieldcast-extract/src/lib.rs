//! The fieldcast extraction pipeline.
//!
//! Validates the requested bounds and resolution, plans the uniform
//! output grid, restores a snapshot, computes the derived fields, samples
//! them at every output cell centre and streams `x y v0 v1 ...` rows.
//!
//! # Stages
//!
//! 1. [`ExtractionConfig::from_args`]: six positional values, checked.
//! 2. [`OutputGrid::plan`]: `Δy` from `ny`, `nx` derived from `Δy`.
//! 3. [`SnapshotRestore`](fieldcast_core::SnapshotRestore): source mesh.
//! 4. [`standard_registry`] + dispatch: `D2c` then `vel`.
//! 5. [`Sampler`] into a [`SampleBuffer`].
//! 6. [`RowWriter`]: rows only once sampling has fully succeeded.
//!
//! [`Extraction::run`] drives stages 2-6.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod sampler;
pub mod writer;

pub use buffer::{AllocationError, SampleBuffer};
pub use config::{ArgumentError, ExtractionConfig, USAGE};
pub use error::ExtractError;
pub use grid::{GridError, OutputGrid};
pub use pipeline::{require_field, standard_registry, Extraction, RunSummary};
pub use sampler::{SampleReport, Sampler};
pub use writer::{format_g, RowWriter};
