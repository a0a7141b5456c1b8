//! Built-in estimators.
//!
//! Each estimator is implemented as a struct that implements the
//! [Reduction](crate::operation::Reduction) trait. The `Nan*` estimators treat NaN as missing data
//! and ignore it, following NumPy's `nan*` functions. [Mean] and [Sum] let NaN propagate.

use std::cmp::Ordering;

use crate::models::Estimator;
use crate::operation::{Element, Reduction};

use ndarray::{ArrayD, ArrayViewD, Axis};
use num_traits::Float;

/// Sums and counts the non-missing elements along an axis.
fn sum_count_skipnan<T: Element>(array: &ArrayViewD<'_, T>, axis: Axis) -> ArrayD<(T, usize)> {
    array.fold_axis(axis, (T::zero(), 0), |(sum, count), val| {
        if !val.is_nan() {
            (*sum + *val, count + 1)
        } else {
            (*sum, *count)
        }
    })
}

/// Converts an element count to `T`.
fn count_as<T: Element>(count: usize) -> T {
    T::from_usize(count).unwrap_or_else(T::nan)
}

/// Mean of the non-missing elements. NaN where every element is missing.
pub struct NanMean {}

impl<T: Element> Reduction<T> for NanMean {
    fn name(&self) -> &str {
        "nan_mean"
    }

    fn skips_missing(&self) -> bool {
        true
    }

    fn reduce(&self, array: ArrayViewD<'_, T>, axis: Axis) -> ArrayD<T> {
        sum_count_skipnan(&array, axis).mapv(|(sum, count)| {
            if count == 0 {
                T::nan()
            } else {
                sum / count_as(count)
            }
        })
    }
}

/// Sum of the non-missing elements. Zero where every element is missing.
pub struct NanSum {}

impl<T: Element> Reduction<T> for NanSum {
    fn name(&self) -> &str {
        "nan_sum"
    }

    fn skips_missing(&self) -> bool {
        true
    }

    fn reduce(&self, array: ArrayViewD<'_, T>, axis: Axis) -> ArrayD<T> {
        sum_count_skipnan(&array, axis).mapv(|(sum, _)| sum)
    }
}

/// Minimum of the non-missing elements. NaN where every element is missing.
pub struct NanMin {}

impl<T: Element> Reduction<T> for NanMin {
    fn name(&self) -> &str {
        "nan_min"
    }

    fn skips_missing(&self) -> bool {
        true
    }

    fn reduce(&self, array: ArrayViewD<'_, T>, axis: Axis) -> ArrayD<T> {
        // Float::min returns the other operand when one is NaN.
        array.fold_axis(axis, T::nan(), |running_min, val| Float::min(*running_min, *val))
    }
}

/// Maximum of the non-missing elements. NaN where every element is missing.
pub struct NanMax {}

impl<T: Element> Reduction<T> for NanMax {
    fn name(&self) -> &str {
        "nan_max"
    }

    fn skips_missing(&self) -> bool {
        true
    }

    fn reduce(&self, array: ArrayViewD<'_, T>, axis: Axis) -> ArrayD<T> {
        array.fold_axis(axis, T::nan(), |running_max, val| Float::max(*running_max, *val))
    }
}

/// Median of the non-missing elements. NaN where every element is missing.
///
/// Even-length lanes return the midpoint of the two central values.
pub struct NanMedian {}

impl<T: Element> Reduction<T> for NanMedian {
    fn name(&self) -> &str {
        "nan_median"
    }

    fn skips_missing(&self) -> bool {
        true
    }

    fn reduce(&self, array: ArrayViewD<'_, T>, axis: Axis) -> ArrayD<T> {
        array.map_axis(axis, |lane| {
            let mut values = lane
                .iter()
                .copied()
                .filter(|val| !val.is_nan())
                .collect::<Vec<T>>();
            if values.is_empty() {
                return T::nan();
            }
            // NaNs were filtered out above so the order is total.
            values.sort_by(|x, y| x.partial_cmp(y).unwrap_or(Ordering::Equal));
            let mid = values.len() / 2;
            if values.len() % 2 == 1 {
                values[mid]
            } else {
                (values[mid - 1] + values[mid]) / (T::one() + T::one())
            }
        })
    }
}

/// Arithmetic mean. Any NaN in a block makes the result NaN.
pub struct Mean {}

impl<T: Element> Reduction<T> for Mean {
    fn name(&self) -> &str {
        "mean"
    }

    fn skips_missing(&self) -> bool {
        false
    }

    fn reduce(&self, array: ArrayViewD<'_, T>, axis: Axis) -> ArrayD<T> {
        // mean_axis only returns None for an empty axis.
        array
            .mean_axis(axis)
            .unwrap_or_else(|| array.map_axis(axis, |_| T::nan()))
    }
}

/// Sum. Any NaN in a block makes the result NaN.
pub struct Sum {}

impl<T: Element> Reduction<T> for Sum {
    fn name(&self) -> &str {
        "sum"
    }

    fn skips_missing(&self) -> bool {
        false
    }

    fn reduce(&self, array: ArrayViewD<'_, T>, axis: Axis) -> ArrayD<T> {
        array.sum_axis(axis)
    }
}

impl<T: Element> Reduction<T> for Estimator {
    fn name(&self) -> &str {
        match self {
            Estimator::NanMean => "nan_mean",
            Estimator::NanSum => "nan_sum",
            Estimator::NanMin => "nan_min",
            Estimator::NanMax => "nan_max",
            Estimator::NanMedian => "nan_median",
            Estimator::Mean => "mean",
            Estimator::Sum => "sum",
        }
    }

    fn skips_missing(&self) -> bool {
        !matches!(self, Estimator::Mean | Estimator::Sum)
    }

    /// Collapse `axis` of `array`.
    ///
    /// This method dispatches to the estimator struct selected by the variant.
    fn reduce(&self, array: ArrayViewD<'_, T>, axis: Axis) -> ArrayD<T> {
        match self {
            Estimator::NanMean => NanMean {}.reduce(array, axis),
            Estimator::NanSum => NanSum {}.reduce(array, axis),
            Estimator::NanMin => NanMin {}.reduce(array, axis),
            Estimator::NanMax => NanMax {}.reduce(array, axis),
            Estimator::NanMedian => NanMedian {}.reduce(array, axis),
            Estimator::Mean => Mean {}.reduce(array, axis),
            Estimator::Sum => Sum {}.reduce(array, axis),
        }
    }
}
