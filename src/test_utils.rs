use crate::models::*;
use crate::operation::Element;
use crate::types::Missing;

use ndarray::{Array, ArrayD, Dimension};

/// Create a DownsampleConfig object with only required fields set.
pub(crate) fn get_test_config() -> DownsampleConfig {
    DownsampleConfig {
        factor: 2,
        estimator: Estimator::NanMean,
        remainder: Remainder::Pad,
        ignore_axis: 0,
        missing: None,
    }
}

/// Create a DownsampleConfig object with all fields set.
pub(crate) fn get_test_config_optional() -> DownsampleConfig {
    DownsampleConfig {
        factor: 3,
        estimator: Estimator::NanMedian,
        remainder: Remainder::Truncate,
        ignore_axis: 2,
        missing: Some(Missing::ValidRange(-10.0, 10.0)),
    }
}

/// Create an array of the given shape holding 0, 1, 2, ... in row-major order.
pub(crate) fn arange(shape: &[usize]) -> ArrayD<f64> {
    let size = shape.iter().product::<usize>();
    ArrayD::from_shape_vec(shape, (0..size).map(|i| i as f64).collect()).unwrap()
}

/// Assert that two arrays are equal, treating NaN as equal to NaN.
pub(crate) fn assert_nan_eq<T: Element, D: Dimension>(
    expected: &Array<T, D>,
    actual: &Array<T, D>,
) {
    assert_eq!(expected.shape(), actual.shape());
    for (x, y) in expected.iter().zip(actual.iter()) {
        assert!(
            (x.is_nan() && y.is_nan()) || x == y,
            "expected {expected:?}, got {actual:?}"
        );
    }
}
