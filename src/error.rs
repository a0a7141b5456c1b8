//! Error handling.

use ndarray::ShapeError;
use thiserror::Error;

/// Downsampler error type
///
/// This type encapsulates the various errors that may occur while validating configuration or
/// downsampling an array.
#[derive(Debug, Error)]
pub enum DownsampleError {
    /// Invalid configuration (multiple errors)
    #[error("downsample configuration is not valid")]
    ConfigValidation(#[from] validator::ValidationErrors),

    /// Invalid configuration (single error)
    #[error("downsample configuration is not valid")]
    ConfigValidationSingle(#[from] validator::ValidationError),

    /// Array has the wrong number of dimensions for the operation
    #[error("{operation} expects a {expected}D array but got {actual}D")]
    Dimensionality {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Incompatible missing data descriptor
    #[error("Incompatible value {0} for missing")]
    IncompatibleMissing(f64),

    /// Axis index out of range for the array
    #[error("axis {axis} is out of bounds for array of dimension {ndim}")]
    InvalidAxis { axis: usize, ndim: usize },

    /// Downsampling factor must be at least one
    #[error("downsampling factor must be at least 1 (got {factor})")]
    InvalidFactor { factor: usize },

    /// Error stacking, concatenating or reshaping ndarray arrays
    #[error("failed to build array with the requested shape")]
    ShapeInvalid(#[from] ShapeError),

    /// Error converting between integer types
    #[error(transparent)]
    TryFromInt(#[from] std::num::TryFromIntError),

    /// Estimator cannot provide the missing-aware reduction that was requested
    #[error("estimator {estimator} does not support {reason}")]
    UnsupportedReduction {
        estimator: String,
        reason: &'static str,
    },
}
