//! Functions and utilities for working with [ndarray] objects.

use crate::error::DownsampleError;
use crate::operation::Element;
use crate::types::Missing;

use ndarray::prelude::*;
use ndarray::Slice;

/// Check that a downsampling factor is usable as a block size.
pub fn check_factor(factor: usize) -> Result<(), DownsampleError> {
    if factor == 0 {
        return Err(DownsampleError::InvalidFactor { factor });
    }
    Ok(())
}

/// Check that an array has the number of dimensions an operation expects.
///
/// # Arguments
///
/// * `operation`: Name of the operation, for the error message
/// * `expected`: Expected number of dimensions
/// * `actual`: Actual number of dimensions
pub fn check_ndim(
    operation: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), DownsampleError> {
    if expected != actual {
        return Err(DownsampleError::Dimensionality {
            operation,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Check that an axis index is in range for an array with `ndim` dimensions.
pub fn check_axis(axis: usize, ndim: usize) -> Result<(), DownsampleError> {
    if axis >= ndim {
        return Err(DownsampleError::InvalidAxis { axis, ndim });
    }
    Ok(())
}

/// Crop trailing elements along `axis` so that its length is a multiple of `factor`.
///
/// The view is narrowed in place, so no copying takes place.
pub fn crop_axis<T>(array: &mut ArrayViewD<'_, T>, axis: usize, factor: usize) {
    let length = array.len_of(Axis(axis));
    let end = length - length % factor;
    array.slice_axis_inplace(Axis(axis), Slice::from(..end));
}

/// Extend `axis` with NaN slices up to the next multiple of `factor`.
///
/// Returns a copy of the array, even if no padding is required.
pub fn pad_axis<T: Element>(
    array: ArrayViewD<'_, T>,
    axis: usize,
    factor: usize,
) -> Result<ArrayD<T>, DownsampleError> {
    let length = array.len_of(Axis(axis));
    let remainder = length % factor;
    if remainder == 0 {
        return Ok(array.to_owned());
    }
    let mut pad_shape = array.shape().to_vec();
    pad_shape[axis] = factor - remainder;
    let padding = ArrayD::from_elem(pad_shape, T::nan());
    let padded = ndarray::concatenate(Axis(axis), &[array.view(), padding.view()])?;
    Ok(padded)
}

/// Stack every phase of `array` along a new leading axis.
///
/// For each axis in `axes`, a phase is the view starting at an offset in `0..factor` with a
/// stride of `factor`. With `k` axes there are `factor^k` phases. Each downsampled axis must
/// already have a length that is a multiple of `factor`.
///
/// # Arguments
///
/// * `array`: Cropped or padded array
/// * `axes`: Axes to split into phases
/// * `factor`: Downsampling factor
pub fn stack_phases<T: Clone>(
    array: ArrayViewD<'_, T>,
    axes: &[usize],
    factor: usize,
) -> Result<ArrayD<T>, DownsampleError> {
    let step = isize::try_from(factor)?;
    let mut phases = vec![array];
    for &axis in axes {
        phases = phases
            .into_iter()
            .flat_map(|view| {
                (0..factor).map(move |offset| {
                    let mut phase = view.clone();
                    // An empty axis has no room for nonzero offsets.
                    let start = offset.min(phase.len_of(Axis(axis)));
                    phase.slice_axis_inplace(Axis(axis), Slice::from(start..).step_by(step));
                    phase
                })
            })
            .collect();
    }
    let stacked = ndarray::stack(Axis(0), &phases)?;
    Ok(stacked)
}

/// Replace elements described by `missing` with NaN.
pub fn mask_missing<T: Element, D: Dimension>(
    array: &ArrayView<'_, T, D>,
    missing: &Missing<T>,
) -> Array<T, D> {
    array.mapv(|x| if missing.is_missing(&x) { T::nan() } else { x })
}
