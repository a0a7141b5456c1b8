//! This crate provides block downsampling of n-dimensional numeric arrays. An array is reduced
//! by an integer factor along one or more axes by applying an estimator to each block of
//! `factor` (or `factor` x `factor`) elements. The default estimator is a NaN-ignoring mean, so
//! missing data marked as NaN does not contaminate the blocks around it.
//!
//! The crate is built on top of a number of open source components.
//!
//! * [ndarray] provides [NumPy](https://numpy.org)-like n-dimensional arrays and strided views.
//! * [Serde](serde) and [validator] deserialise and validate [DownsampleConfig] objects.
//! * [tracing](https://docs.rs/tracing) emits spans and events for each downsampling call.
//!
//! # Example
//!
//! ```
//! use downsampler::{downsample_2d, Downsampler, DownsampleConfig, Estimator, Remainder};
//! use ndarray::array;
//!
//! let data = array![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]];
//! let result = downsample_2d(&data, 2).unwrap();
//! assert_eq!(array![[3.5, 5.5]], result);
//!
//! let mut config = DownsampleConfig::new(2);
//! config.estimator = Estimator::NanMax;
//! config.remainder = Remainder::Truncate;
//! let downsampler = Downsampler::<f64>::new(&config).unwrap();
//! assert_eq!(array![[6.0, 8.0]], downsampler.downsample_2d(&data).unwrap());
//! ```

pub mod array;
pub mod downsample;
pub mod downsampler;
pub mod error;
pub mod models;
pub mod operation;
pub mod operations;
#[cfg(test)]
pub mod test_utils;
pub mod tracing;
pub mod types;

pub use crate::downsample::{
    downsample_1d, downsample_1d_with, downsample_2d, downsample_2d_with, downsample_axis,
    downsample_axis_with, downsample_cube, downsample_cube_with,
};
pub use crate::downsampler::Downsampler;
pub use crate::error::DownsampleError;
pub use crate::models::{DownsampleConfig, Estimator, Remainder};
pub use crate::operation::{Custom, Element, Reduction};
pub use crate::types::Missing;
