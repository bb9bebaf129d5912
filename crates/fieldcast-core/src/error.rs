//! Error types shared across the fieldcast crates.
//!
//! Organized by the stage that raises them: snapshot restore, field
//! declaration on a mesh, kernel execution, and point sampling. The
//! extraction crate wraps all of these into its top-level error.

use std::error::Error;
use std::fmt;
use std::io;

use crate::id::FieldId;

/// Errors from restoring a snapshot into a source mesh.
///
/// Restore failures are fatal for a run and are never retried.
#[derive(Debug)]
pub enum RestoreError {
    /// The snapshot could not be opened or read.
    Io(io::Error),
    /// The file does not start with the expected magic bytes.
    InvalidMagic {
        /// The four bytes actually found.
        found: [u8; 4],
    },
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the file.
        found: u8,
    },
    /// The snapshot is truncated or internally inconsistent.
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A field the pipeline requires is not present.
    MissingField {
        /// Name of the required field.
        name: String,
    },
    /// A required field is present but has the wrong layout.
    FieldShape {
        /// Name of the offending field.
        name: String,
        /// Components per cell the pipeline expects.
        expected: u32,
        /// Components per cell found in the snapshot.
        found: u32,
    },
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic { found } => {
                write!(f, "invalid magic bytes {found:?} (not a snapshot)")
            }
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported snapshot version {found}")
            }
            Self::Malformed { detail } => write!(f, "malformed snapshot: {detail}"),
            Self::MissingField { name } => write!(f, "snapshot has no field '{name}'"),
            Self::FieldShape {
                name,
                expected,
                found,
            } => write!(
                f,
                "field '{name}' has {found} components per cell, expected {expected}"
            ),
        }
    }
}

impl Error for RestoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RestoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Errors from declaring or addressing fields on a mesh.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A field with this name already exists on the mesh.
    Duplicate {
        /// The contested name.
        name: String,
    },
    /// The data length does not match the mesh cell count.
    LengthMismatch {
        /// Name of the field.
        name: String,
        /// Expected number of f64 values.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { name } => write!(f, "field '{name}' already declared"),
            Self::LengthMismatch {
                name,
                expected,
                found,
            } => write!(
                f,
                "field '{name}' has {found} values, mesh needs {expected}"
            ),
        }
    }
}

impl Error for FieldError {}

/// Errors from an individual compute kernel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// A field the kernel reads is not readable on the mesh.
    MissingField {
        /// The unreadable field.
        field_id: FieldId,
    },
    /// An input or output buffer does not have the size the kernel needs.
    ShapeMismatch {
        /// The field (or output target) with the wrong size.
        field_id: FieldId,
        /// Elements the kernel needs.
        expected: usize,
        /// Elements actually present.
        found: usize,
    },
    /// The output slice is not one slot per mesh cell.
    TargetSize {
        /// Mesh cell count.
        expected: usize,
        /// Slots in the output slice.
        found: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field_id } => write!(f, "field {field_id} not readable"),
            Self::ShapeMismatch {
                field_id,
                expected,
                found,
            } => write!(
                f,
                "field {field_id} has {found} elements, need {expected}"
            ),
            Self::TargetSize { expected, found } => {
                write!(f, "output has {found} slots for {expected} cells")
            }
        }
    }
}

impl Error for KernelError {}

/// Errors from the point-interpolation capability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SampleError {
    /// The field is not known to the interpolator.
    UnknownField {
        /// The requested field.
        field_id: FieldId,
    },
    /// The field exists but is not a scalar and cannot be point-sampled.
    NotScalar {
        /// The requested field.
        field_id: FieldId,
    },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField { field_id } => write!(f, "field {field_id} not on mesh"),
            Self::NotScalar { field_id } => {
                write!(f, "field {field_id} is not a scalar and cannot be sampled")
            }
        }
    }
}

impl Error for SampleError {}
