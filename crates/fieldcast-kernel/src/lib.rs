//! Field kernel trait and ordered registry for fieldcast.
//!
//! A [`FieldKernel`] fills one derived scalar per mesh cell from fields
//! already on the mesh. A [`FieldRegistry`] holds named kernels in
//! registration order; that order is the column order of everything
//! downstream.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod kernel;
pub mod registry;

pub use context::KernelContext;
pub use kernel::FieldKernel;
pub use registry::{Column, ColumnPlan, FieldRegistry, RegistryError};
