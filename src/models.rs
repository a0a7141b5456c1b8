//! Configuration data types and associated functions and methods

use serde::Deserialize;
use strum_macros::Display;
use validator::{Validate, ValidationError};

use crate::types::Missing;

/// Built-in estimators
///
/// Selects one of the reductions in [operations](crate::operations).
#[derive(Clone, Copy, Debug, Default, Deserialize, Display, PartialEq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Estimator {
    /// Mean ignoring missing data
    #[default]
    NanMean,
    /// Sum ignoring missing data
    NanSum,
    /// Minimum ignoring missing data
    NanMin,
    /// Maximum ignoring missing data
    NanMax,
    /// Median ignoring missing data
    NanMedian,
    /// Arithmetic mean
    Mean,
    /// Sum
    Sum,
}

/// Policy for axis lengths that are not a multiple of the downsampling factor
#[derive(Clone, Copy, Debug, Default, Deserialize, Display, PartialEq)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Remainder {
    /// Drop the trailing elements
    Truncate,
    /// Extend the axis with missing (NaN) values up to the next multiple of the factor
    #[default]
    Pad,
}

/// Downsampler configuration
#[derive(Clone, Debug, Deserialize, PartialEq, Validate)]
#[serde(deny_unknown_fields)]
#[validate(schema(function = "validate_config"))]
pub struct DownsampleConfig {
    /// Number of input elements per output element along each downsampled axis
    #[validate(range(min = 1, message = "factor must be greater than 0"))]
    pub factor: usize,
    /// Reduction applied to each block
    #[serde(default)]
    pub estimator: Estimator,
    /// Handling of trailing elements for axis downsampling
    #[serde(default)]
    pub remainder: Remainder,
    /// Depth axis of cubes, excluded from averaging
    #[serde(default)]
    #[validate(range(max = 2, message = "ignore_axis must be less than 3"))]
    pub ignore_axis: usize,
    /// Additional missing data, masked to NaN before reduction
    pub missing: Option<Missing<f64>>,
}

impl DownsampleConfig {
    /// Return a new DownsampleConfig with default settings for the given factor.
    pub fn new(factor: usize) -> Self {
        DownsampleConfig {
            factor,
            estimator: Estimator::default(),
            remainder: Remainder::default(),
            ignore_axis: 0,
            missing: None,
        }
    }
}

/// Validate a downsample configuration
fn validate_config(config: &DownsampleConfig) -> Result<(), ValidationError> {
    if let Some(missing) = &config.missing {
        missing.validate()?;
    }
    Ok(())
}
