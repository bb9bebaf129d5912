//! Derived-field kernels for fieldcast.
//!
//! Two kernels over a two-phase snapshot holding a volume fraction `f`
//! and a velocity `u`:
//!
//! - [`StrainRate`]: log10 of the viscosity-weighted second invariant of
//!   the strain-rate tensor, under a run-wide [`Geometry`].
//! - [`VelocityMagnitude`]: `|u|`.
//!
//! Both are built with builders once the snapshot has been restored and
//! the input [`FieldId`](fieldcast_core::FieldId)s are known.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fields;
pub mod geometry;
pub mod strain_rate;
pub mod velocity_magnitude;

pub use fields::{STRAIN_RATE, VELOCITY_MAGNITUDE, VELOCITY, VOLUME_FRACTION};
pub use geometry::{Geometry, ParseGeometryError};
pub use strain_rate::StrainRate;
pub use velocity_magnitude::VelocityMagnitude;
