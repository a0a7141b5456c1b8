//! Missing data descriptors
//!
//! NaN always marks missing data. Arrays can carry additional missing data which should be ignored
//! during downsampling. There are multiple ways to describe it. Currently we support:
//!
//! * A single missing value
//! * Multiple missing values
//! * A valid minimum value
//! * A valid maximum value
//! * A valid range of values

use serde::Deserialize;
use validator::ValidationError;

use crate::error::DownsampleError;
use crate::operation::Element;

/// Missing data
///
/// This enum can represent all known descriptions of missing data used in NetCDF4 files.
/// It is generic over the type of missing data values. We use this in two ways:
/// 1. T = [f64], used in [DownsampleConfig](crate::models::DownsampleConfig) independently of
///    the element type of the arrays.
/// 2. T = the element type ([f32] or [f64]), used when masking an array.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Missing<T> {
    /// A single missing value
    MissingValue(T),
    /// Multple missing values
    MissingValues(Vec<T>),
    /// Valid minimum
    ValidMin(T),
    /// Valid maxiumum
    ValidMax(T),
    /// Valid range
    ValidRange(T, T),
}

impl Missing<f64> {
    /// Validate a [`Missing<f64>`](crate::types::Missing) object.
    ///
    /// Values must be finite, and valid ranges must have a minimum less than their maximum.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let values = match self {
            Missing::MissingValue(value) | Missing::ValidMin(value) | Missing::ValidMax(value) => {
                vec![*value]
            }
            Missing::MissingValues(values) => values.clone(),
            Missing::ValidRange(min, max) => vec![*min, *max],
        };
        if let Some(value) = values.iter().find(|value| !value.is_finite()) {
            let mut error = ValidationError::new("Missing data values must be finite");
            error.add_param("value".into(), &value.to_string());
            return Err(error);
        }
        // Validate min + max for valid ranges.
        if let Missing::ValidRange(min, max) = self {
            if min >= max {
                let mut error =
                    ValidationError::new("Missing data valid range min must be less than max");
                error.add_param("min".into(), min);
                error.add_param("max".into(), max);
                return Err(error);
            };
        };
        Ok(())
    }
}

/// Convert a configured missing value to the element type.
///
/// Values that overflow the element type are rejected rather than saturating to infinity.
fn try_from_f64<T: Element>(value: f64) -> Result<T, DownsampleError> {
    T::from_f64(value)
        .filter(|converted| converted.is_finite())
        .ok_or(DownsampleError::IncompatibleMissing(value))
}

// Implement TryFrom<&Missing<f64>> for Missing<T>.
// This allows us to convert from the configured missing data to the array's element type.
impl<T: Element> TryFrom<&Missing<f64>> for Missing<T> {
    type Error = DownsampleError;

    fn try_from(missing: &Missing<f64>) -> Result<Self, Self::Error> {
        let result = match missing {
            Missing::MissingValue(value) => Missing::<T>::MissingValue(try_from_f64(*value)?),
            Missing::MissingValues(values) => {
                // Map to Results, then use ? on the collected Vec to fail if any is Err.
                let values = values
                    .iter()
                    .map(|value| try_from_f64(*value))
                    .collect::<Result<Vec<T>, _>>()?;
                Missing::<T>::MissingValues(values)
            }
            Missing::ValidMin(min) => Missing::<T>::ValidMin(try_from_f64(*min)?),
            Missing::ValidMax(max) => Missing::<T>::ValidMax(try_from_f64(*max)?),
            Missing::ValidRange(min, max) => {
                Missing::<T>::ValidRange(try_from_f64(*min)?, try_from_f64(*max)?)
            }
        };
        Ok(result)
    }
}

impl<T: Element> Missing<T> {
    /// Check whether the provided value is a 'missing' value.
    ///
    /// NaN is always missing.
    pub fn is_missing(&self, x: &T) -> bool {
        if x.is_nan() {
            return true;
        }
        match self {
            Missing::MissingValue(value) => x == value,
            Missing::MissingValues(values) => values.contains(x),
            Missing::ValidMin(min) => x < min,
            Missing::ValidMax(max) => x > max,
            Missing::ValidRange(min, max) => x < min || x > max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_missing_value() {
        let result = Missing::<f32>::try_from(&Missing::<f64>::MissingValue(42.0)).unwrap();
        assert_eq!(Missing::<f32>::MissingValue(42.0), result);
    }

    #[test]
    fn test_validate_missing_value() {
        Missing::<f64>::MissingValue(42.0).validate().unwrap();
    }

    #[test]
    #[should_panic(expected = "Missing data values must be finite")]
    fn test_validate_infinite() {
        Missing::<f64>::MissingValues(vec![1.0, f64::INFINITY])
            .validate()
            .unwrap();
    }

    #[test]
    #[should_panic(expected = "Missing data values must be finite")]
    fn test_validate_nan() {
        Missing::<f64>::ValidMin(f64::NAN).validate().unwrap();
    }

    #[test]
    #[should_panic(expected = "Missing data valid range min must be less than max")]
    fn test_validate_range_min_gt_max() {
        Missing::<f64>::ValidRange(42.0, -42.0).validate().unwrap();
    }

    #[test]
    #[should_panic(expected = "Missing data valid range min must be less than max")]
    fn test_validate_range_min_eq_max() {
        Missing::<f64>::ValidRange(42.0, 42.0).validate().unwrap();
    }

    #[test]
    fn test_try_from_missing_values() {
        let result =
            Missing::<f64>::try_from(&Missing::<f64>::MissingValues(vec![42.0, -1.0])).unwrap();
        assert_eq!(Missing::<f64>::MissingValues(vec![42.0, -1.0]), result);
    }

    #[test]
    #[should_panic(expected = "IncompatibleMissing(6.805646932770577e38)")]
    fn test_try_from_valid_range_too_large() {
        Missing::<f32>::try_from(&Missing::<f64>::ValidRange((f32::MAX as f64) * 2.0, 42.0))
            .unwrap();
    }

    #[test]
    fn test_try_from_valid_range() {
        let result = Missing::<f32>::try_from(&Missing::<f64>::ValidRange(-42.0, 42.0)).unwrap();
        assert_eq!(Missing::<f32>::ValidRange(-42.0, 42.0), result);
    }

    #[test]
    fn test_is_missing_nan() {
        let missing = Missing::MissingValue(1.0);
        assert!(missing.is_missing(&f64::NAN));
        assert!(!missing.is_missing(&2.0));
    }

    #[test]
    fn test_is_missing_value() {
        let missing = Missing::MissingValue(1.0);
        assert!(!missing.is_missing(&0.0));
        assert!(missing.is_missing(&1.0));
        assert!(!missing.is_missing(&2.0));
    }

    #[test]
    fn test_is_missing_values() {
        let missing = Missing::MissingValues(vec![1.0_f32, 2.0]);
        assert!(!missing.is_missing(&0.0));
        assert!(missing.is_missing(&1.0));
        assert!(missing.is_missing(&2.0));
        assert!(!missing.is_missing(&3.0));
    }

    #[test]
    fn test_is_missing_valid_min() {
        let missing = Missing::ValidMin(1.0);
        assert!(missing.is_missing(&0.0));
        assert!(!missing.is_missing(&1.0));
        assert!(!missing.is_missing(&2.0));
    }

    #[test]
    fn test_is_missing_valid_max() {
        let missing = Missing::ValidMax(1.0);
        assert!(!missing.is_missing(&0.0));
        assert!(!missing.is_missing(&1.0));
        assert!(missing.is_missing(&2.0));
    }

    #[test]
    fn test_is_missing_valid_range() {
        let missing = Missing::ValidRange(1.0, 2.0);
        assert!(missing.is_missing(&0.0));
        assert!(!missing.is_missing(&1.0));
        assert!(!missing.is_missing(&2.0));
        assert!(missing.is_missing(&3.0));
    }
}
