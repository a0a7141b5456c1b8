//! Block downsampling of 1D, 2D, 3D and N-dimensional arrays.
//!
//! Every function works the same way. The downsampled axes are cropped or padded to a multiple
//! of the factor. Each axis is then split into `factor` interleaved phases, and the phases are
//! stacked along a new leading axis. Finally an estimator collapses that leading axis, so each
//! output element is the estimator applied to one block of the input.
//!
//! The plain functions use [NanMean] as the estimator. The `_with` variants accept any
//! [Reduction].

use crate::array;
use crate::error::DownsampleError;
use crate::models::Remainder;
use crate::operation::{Element, Reduction};
use crate::operations::NanMean;

use ndarray::{
    Array, Array1, Array2, Array3, ArrayBase, ArrayD, ArrayViewD, Axis, CowArray, Data, Dimension,
    Ix1, Ix2, Ix3,
};

/// Downsample `axes` of `array` by `factor`, reducing each block with `estimator`.
///
/// # Arguments
///
/// * `array`: Array to downsample
/// * `axes`: Axes to downsample. Other axes are left untouched.
/// * `factor`: Block size along each axis in `axes`
/// * `remainder`: Handling of axis lengths that are not a multiple of `factor`
/// * `estimator`: Reduction applied to each block
pub fn block_reduce<T, R>(
    array: ArrayViewD<'_, T>,
    axes: &[usize],
    factor: usize,
    remainder: Remainder,
    estimator: &R,
) -> Result<ArrayD<T>, DownsampleError>
where
    T: Element,
    R: Reduction<T> + ?Sized,
{
    array::check_factor(factor)?;
    for &axis in axes {
        array::check_axis(axis, array.ndim())?;
    }
    let blocks = match remainder {
        Remainder::Truncate => {
            let mut cropped = array;
            for &axis in axes {
                array::crop_axis(&mut cropped, axis, factor);
            }
            CowArray::from(cropped)
        }
        Remainder::Pad => {
            let mut padded = CowArray::from(array);
            for &axis in axes {
                if padded.len_of(Axis(axis)) % factor != 0 {
                    if !estimator.skips_missing() {
                        return Err(DownsampleError::UnsupportedReduction {
                            estimator: estimator.name().to_string(),
                            reason: "padding with missing values",
                        });
                    }
                    padded = CowArray::from(array::pad_axis(padded.view(), axis, factor)?);
                }
            }
            padded
        }
    };
    let stacked = array::stack_phases(blocks.view(), axes, factor)?;
    Ok(estimator.reduce(stacked.view(), Axis(0)))
}

/// Downsample a 1D array by averaging over `factor` elements.
///
/// Trailing elements are dropped if the length is not a multiple of `factor`.
pub fn downsample_1d<T, S, D>(
    array: &ArrayBase<S, D>,
    factor: usize,
) -> Result<Array1<T>, DownsampleError>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    downsample_1d_with(array, factor, &NanMean {})
}

/// Downsample a 1D array by applying `estimator` to each block of `factor` elements.
///
/// Trailing elements are dropped if the length is not a multiple of `factor`.
#[tracing::instrument(level = "DEBUG", skip(array, estimator), fields(shape = ?array.shape(), estimator = estimator.name()))]
pub fn downsample_1d_with<T, S, D, R>(
    array: &ArrayBase<S, D>,
    factor: usize,
    estimator: &R,
) -> Result<Array1<T>, DownsampleError>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
    R: Reduction<T> + ?Sized,
{
    array::check_ndim("downsample_1d", 1, array.ndim())?;
    let result = block_reduce(
        array.view().into_dyn(),
        &[0],
        factor,
        Remainder::Truncate,
        estimator,
    )?;
    Ok(result.into_dimensionality::<Ix1>()?)
}

/// Downsample a 2D array by averaging over `factor` x `factor` blocks.
///
/// Trailing rows and columns are dropped if their count is not a multiple of `factor`.
pub fn downsample_2d<T, S, D>(
    array: &ArrayBase<S, D>,
    factor: usize,
) -> Result<Array2<T>, DownsampleError>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    downsample_2d_with(array, factor, &NanMean {})
}

/// Downsample a 2D array by applying `estimator` to each `factor` x `factor` block.
///
/// Trailing rows and columns are dropped if their count is not a multiple of `factor`.
#[tracing::instrument(level = "DEBUG", skip(array, estimator), fields(shape = ?array.shape(), estimator = estimator.name()))]
pub fn downsample_2d_with<T, S, D, R>(
    array: &ArrayBase<S, D>,
    factor: usize,
    estimator: &R,
) -> Result<Array2<T>, DownsampleError>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
    R: Reduction<T> + ?Sized,
{
    array::check_ndim("downsample_2d", 2, array.ndim())?;
    let result = block_reduce(
        array.view().into_dyn(),
        &[0, 1],
        factor,
        Remainder::Truncate,
        estimator,
    )?;
    Ok(result.into_dimensionality::<Ix2>()?)
}

/// Downsample a 3D array by averaging over `factor` x `factor` blocks of the two axes other than
/// `ignore_axis`.
///
/// The depth axis `ignore_axis` is neither cropped nor averaged. The output has the same axis
/// order as the input.
pub fn downsample_cube<T, S, D>(
    array: &ArrayBase<S, D>,
    factor: usize,
    ignore_axis: usize,
) -> Result<Array3<T>, DownsampleError>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    downsample_cube_with(array, factor, ignore_axis, &NanMean {})
}

/// Downsample a 3D array by applying `estimator` to `factor` x `factor` blocks of the two axes
/// other than `ignore_axis`.
#[tracing::instrument(level = "DEBUG", skip(array, estimator), fields(shape = ?array.shape(), estimator = estimator.name()))]
pub fn downsample_cube_with<T, S, D, R>(
    array: &ArrayBase<S, D>,
    factor: usize,
    ignore_axis: usize,
    estimator: &R,
) -> Result<Array3<T>, DownsampleError>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
    R: Reduction<T> + ?Sized,
{
    array::check_ndim("downsample_cube", 3, array.ndim())?;
    array::check_axis(ignore_axis, 3)?;
    // Move the depth axis to the front, and back again afterwards.
    let mut view = array.view().into_dyn();
    view.swap_axes(0, ignore_axis);
    let mut result = block_reduce(view, &[1, 2], factor, Remainder::Truncate, estimator)?;
    result.swap_axes(0, ignore_axis);
    Ok(result.into_dimensionality::<Ix3>()?)
}

/// Downsample an N-dimensional array along `axis` by averaging over `factor` elements.
///
/// See [downsample_axis_with].
pub fn downsample_axis<T, S, D>(
    array: &ArrayBase<S, D>,
    factor: usize,
    axis: usize,
    remainder: Remainder,
) -> Result<Array<T, D>, DownsampleError>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    downsample_axis_with(array, factor, axis, &NanMean {}, remainder)
}

/// Downsample an N-dimensional array along `axis` by applying `estimator` to each block of
/// `factor` elements.
///
/// With [Remainder::Truncate] trailing elements are dropped and the axis shrinks to
/// `len / factor`. With [Remainder::Pad] the axis is padded with NaN and shrinks to
/// `ceil(len / factor)`. The final block then includes fewer real values. Padding requires a
/// missing-aware estimator. When the axis needs padding, other estimators are rejected with
/// [DownsampleError::UnsupportedReduction] rather than producing NaN-biased blocks.
#[tracing::instrument(level = "DEBUG", skip(array, estimator), fields(shape = ?array.shape(), estimator = estimator.name()))]
pub fn downsample_axis_with<T, S, D, R>(
    array: &ArrayBase<S, D>,
    factor: usize,
    axis: usize,
    estimator: &R,
    remainder: Remainder,
) -> Result<Array<T, D>, DownsampleError>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
    R: Reduction<T> + ?Sized,
{
    let result = block_reduce(
        array.view().into_dyn(),
        &[axis],
        factor,
        remainder,
        estimator,
    )?;
    Ok(result.into_dimensionality::<D>()?)
}
