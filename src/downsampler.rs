//! A downsampler built from a [DownsampleConfig].

use crate::array;
use crate::downsample;
use crate::error::DownsampleError;
use crate::models::{DownsampleConfig, Remainder};
use crate::operation::{Element, Reduction};
use crate::types::Missing;

use ndarray::{Array, Array1, Array2, Array3, ArrayBase, CowArray, Data, Dimension};
use validator::Validate;

/// Downsampler with a validated configuration for element type `T`.
///
/// The configured missing data descriptor is masked to NaN before every reduction.
pub struct Downsampler<T: Element> {
    factor: usize,
    remainder: Remainder,
    ignore_axis: usize,
    missing: Option<Missing<T>>,
    reduction: Box<dyn Reduction<T> + Send + Sync>,
}

impl<T: Element> Downsampler<T> {
    /// Return a new Downsampler for a configuration.
    ///
    /// The configuration is validated, and the missing data descriptor is converted to `T`.
    /// Fails if the estimator cannot ignore the missing data that the configuration would
    /// introduce.
    pub fn new(config: &DownsampleConfig) -> Result<Self, DownsampleError> {
        config.validate()?;
        let missing = config
            .missing
            .as_ref()
            .map(Missing::<T>::try_from)
            .transpose()?;
        let downsampler = Downsampler {
            factor: config.factor,
            remainder: config.remainder,
            ignore_axis: config.ignore_axis,
            missing,
            reduction: Box::new(config.estimator),
        };
        downsampler.check_capabilities()?;
        tracing::debug!(
            "Created downsampler: factor {} estimator {} remainder {} ignore_axis {} missing {:?}",
            config.factor,
            config.estimator,
            config.remainder,
            config.ignore_axis,
            config.missing
        );
        Ok(downsampler)
    }

    /// Replace the configured estimator with a custom reduction.
    pub fn with_reduction<R>(mut self, reduction: R) -> Result<Self, DownsampleError>
    where
        R: Reduction<T> + Send + Sync + 'static,
    {
        self.reduction = Box::new(reduction);
        self.check_capabilities()?;
        tracing::debug!("Using reduction {}", self.reduction.name());
        Ok(self)
    }

    /// Name of the reduction applied to each block.
    pub fn reduction_name(&self) -> &str {
        self.reduction.name()
    }

    fn check_capabilities(&self) -> Result<(), DownsampleError> {
        if self.reduction.skips_missing() {
            return Ok(());
        }
        let reason = if self.missing.is_some() {
            "missing data"
        } else if self.remainder == Remainder::Pad {
            "padding with missing values"
        } else {
            return Ok(());
        };
        Err(DownsampleError::UnsupportedReduction {
            estimator: self.reduction.name().to_string(),
            reason,
        })
    }

    /// Apply the missing data mask, if any.
    fn prepare<'a, S, D>(&self, array: &'a ArrayBase<S, D>) -> CowArray<'a, T, D>
    where
        S: Data<Elem = T>,
        D: Dimension,
    {
        match &self.missing {
            Some(missing) => CowArray::from(array::mask_missing(&array.view(), missing)),
            None => CowArray::from(array.view()),
        }
    }

    /// Downsample a 1D array. Trailing elements are dropped.
    pub fn downsample_1d<S, D>(&self, array: &ArrayBase<S, D>) -> Result<Array1<T>, DownsampleError>
    where
        S: Data<Elem = T>,
        D: Dimension,
    {
        let prepared = self.prepare(array);
        downsample::downsample_1d_with(&prepared, self.factor, &self.reduction)
    }

    /// Downsample a 2D array. Trailing rows and columns are dropped.
    pub fn downsample_2d<S, D>(&self, array: &ArrayBase<S, D>) -> Result<Array2<T>, DownsampleError>
    where
        S: Data<Elem = T>,
        D: Dimension,
    {
        let prepared = self.prepare(array);
        downsample::downsample_2d_with(&prepared, self.factor, &self.reduction)
    }

    /// Downsample a 3D array, leaving the configured `ignore_axis` intact.
    pub fn downsample_cube<S, D>(
        &self,
        array: &ArrayBase<S, D>,
    ) -> Result<Array3<T>, DownsampleError>
    where
        S: Data<Elem = T>,
        D: Dimension,
    {
        let prepared = self.prepare(array);
        downsample::downsample_cube_with(&prepared, self.factor, self.ignore_axis, &self.reduction)
    }

    /// Downsample an N-dimensional array along `axis` using the configured remainder policy.
    pub fn downsample_axis<S, D>(
        &self,
        array: &ArrayBase<S, D>,
        axis: usize,
    ) -> Result<Array<T, D>, DownsampleError>
    where
        S: Data<Elem = T>,
        D: Dimension,
    {
        let prepared = self.prepare(array);
        downsample::downsample_axis_with(
            &prepared,
            self.factor,
            axis,
            &self.reduction,
            self.remainder,
        )
    }
}
