//! Top-level extraction error.

use std::error::Error;
use std::fmt;
use std::io;

use fieldcast_core::{RestoreError, SampleError};
use fieldcast_kernel::RegistryError;

use crate::buffer::AllocationError;
use crate::config::ArgumentError;
use crate::grid::GridError;

/// Any failure of an extraction run. Every variant is fatal.
#[derive(Debug)]
pub enum ExtractError {
    /// Positional values failed validation.
    Argument(ArgumentError),
    /// The output grid could not be derived.
    Grid(GridError),
    /// The snapshot could not be restored or lacks required fields.
    Restore(RestoreError),
    /// A kernel could not be configured.
    KernelConfig {
        /// Builder message.
        reason: String,
    },
    /// Registry validation or kernel dispatch failed.
    Registry(RegistryError),
    /// Point sampling failed.
    Sample(SampleError),
    /// The sample buffer could not be allocated.
    Allocation(AllocationError),
    /// Writing rows failed.
    Io(io::Error),
}

impl ExtractError {
    /// Whether the usage hint should accompany this error.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Argument(_) | Self::Grid(_))
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(e) => write!(f, "invalid arguments: {e}"),
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::Restore(e) => write!(f, "cannot restore snapshot: {e}"),
            Self::KernelConfig { reason } => write!(f, "kernel configuration: {reason}"),
            Self::Registry(e) => write!(f, "field computation: {e}"),
            Self::Sample(e) => write!(f, "sampling: {e}"),
            Self::Allocation(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "writing output: {e}"),
        }
    }
}

impl Error for ExtractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Argument(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Restore(e) => Some(e),
            Self::KernelConfig { .. } => None,
            Self::Registry(e) => Some(e),
            Self::Sample(e) => Some(e),
            Self::Allocation(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<ArgumentError> for ExtractError {
    fn from(e: ArgumentError) -> Self {
        Self::Argument(e)
    }
}

impl From<GridError> for ExtractError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<RestoreError> for ExtractError {
    fn from(e: RestoreError) -> Self {
        Self::Restore(e)
    }
}

impl From<RegistryError> for ExtractError {
    fn from(e: RegistryError) -> Self {
        Self::Registry(e)
    }
}

impl From<SampleError> for ExtractError {
    fn from(e: SampleError) -> Self {
        Self::Sample(e)
    }
}

impl From<AllocationError> for ExtractError {
    fn from(e: AllocationError) -> Self {
        Self::Allocation(e)
    }
}

impl From<io::Error> for ExtractError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
