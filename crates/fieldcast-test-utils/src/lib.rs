//! Test utilities and mock types for fieldcast development.
//!
//! Mocks for the core capability traits ([`FieldReader`],
//! [`Interpolate`]) and, in [`fixtures`], analytic two-phase meshes whose
//! derived fields have closed-form answers.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use fieldcast_core::{FieldId, FieldReader, Interpolate, Sample, SampleError};

pub use fixtures::*;

/// In-memory [`FieldReader`] for kernel tests.
///
/// Fields added with [`set_field`](MockFieldReader::set_field) are
/// returned as-is; any other id reads as `None`.
pub struct MockFieldReader {
    fields: HashMap<FieldId, Vec<f64>>,
}

impl MockFieldReader {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Store `data` under `field`, replacing any previous values.
    pub fn set_field(&mut self, field: FieldId, data: Vec<f64>) {
        self.fields.insert(field, data);
    }
}

impl Default for MockFieldReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldReader for MockFieldReader {
    fn read(&self, field: FieldId) -> Option<&[f64]> {
        self.fields.get(&field).map(|v| v.as_slice())
    }
}

type PointFn = Box<dyn Fn(f64, f64) -> f64>;

/// Mock implementation of [`Interpolate`].
///
/// Each field is a closure of `(x, y)`. Points outside the configured
/// rectangle return [`Sample::Outside`]; unknown fields return
/// [`SampleError::UnknownField`]. Every call is counted.
pub struct MockInterpolator {
    fields: HashMap<FieldId, PointFn>,
    lower: [f64; 2],
    upper: [f64; 2],
    calls: std::cell::Cell<usize>,
}

impl MockInterpolator {
    /// An interpolator whose domain is the whole plane.
    pub fn new() -> Self {
        Self::with_domain([f64::NEG_INFINITY; 2], [f64::INFINITY; 2])
    }

    /// An interpolator whose domain is the closed rectangle `lower..=upper`.
    pub fn with_domain(lower: [f64; 2], upper: [f64; 2]) -> Self {
        Self {
            fields: HashMap::new(),
            lower,
            upper,
            calls: std::cell::Cell::new(0),
        }
    }

    /// Define `field` as `f(x, y)`.
    pub fn set_field(&mut self, field: FieldId, f: impl Fn(f64, f64) -> f64 + 'static) {
        self.fields.insert(field, Box::new(f));
    }

    /// Number of `interpolate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Default for MockInterpolator {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpolate for MockInterpolator {
    fn interpolate(&self, field: FieldId, x: f64, y: f64) -> Result<Sample, SampleError> {
        self.calls.set(self.calls.get() + 1);
        let f = self
            .fields
            .get(&field)
            .ok_or(SampleError::UnknownField { field_id: field })?;
        let inside = x >= self.lower[0]
            && x <= self.upper[0]
            && y >= self.lower[1]
            && y <= self.upper[1];
        Ok(if inside {
            Sample::Value(f(x, y))
        } else {
            Sample::Outside
        })
    }
}
