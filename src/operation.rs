//! Element and reduction traits.

use ndarray::{ArrayD, ArrayViewD, Axis};

/// Trait for array elements.
///
/// Downsampling pads with NaN to mark missing data, so elements must be floating point.
pub trait Element:
    num_traits::Float + num_traits::FromPrimitive + std::fmt::Debug + Send + Sync + 'static
{
}

/// Blanket implementation of Element.
impl<T> Element for T where
    T: num_traits::Float + num_traits::FromPrimitive + std::fmt::Debug + Send + Sync + 'static
{
}

/// Trait for reductions used to collapse the stacked phases of a downsampled array.
///
/// This forms the contract between the downsampling functions and estimators.
pub trait Reduction<T: Element> {
    /// Name of the reduction, used in logs and error messages.
    fn name(&self) -> &str;

    /// Whether NaN entries are ignored rather than propagated.
    ///
    /// Padding and missing data masks are only permitted with reductions that return `true`.
    fn skips_missing(&self) -> bool;

    /// Collapse `axis` of `array`.
    ///
    /// Returns an array with one dimension fewer than the input.
    ///
    /// # Arguments
    ///
    /// * `array`: Array to reduce
    /// * `axis`: Axis to collapse. Always has a non-zero length.
    fn reduce(&self, array: ArrayViewD<'_, T>, axis: Axis) -> ArrayD<T>;
}

impl<T: Element, R: Reduction<T> + ?Sized> Reduction<T> for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn skips_missing(&self) -> bool {
        (**self).skips_missing()
    }

    fn reduce(&self, array: ArrayViewD<'_, T>, axis: Axis) -> ArrayD<T> {
        (**self).reduce(array, axis)
    }
}

impl<T: Element, R: Reduction<T> + ?Sized> Reduction<T> for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn skips_missing(&self) -> bool {
        (**self).skips_missing()
    }

    fn reduce(&self, array: ArrayViewD<'_, T>, axis: Axis) -> ArrayD<T> {
        (**self).reduce(array, axis)
    }
}

/// A reduction backed by a caller-supplied function.
///
/// The function receives the stacked array and the axis to collapse, mirroring the built-in
/// estimators. Whether it tolerates NaN must be declared up front since it cannot be inferred.
pub struct Custom<F> {
    name: String,
    skips_missing: bool,
    func: F,
}

impl<F> Custom<F> {
    /// Return a new Custom reduction which propagates missing data.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Custom {
            name: name.into(),
            skips_missing: false,
            func,
        }
    }

    /// Return a new Custom reduction which ignores missing (NaN) data.
    pub fn missing_aware(name: impl Into<String>, func: F) -> Self {
        Custom {
            name: name.into(),
            skips_missing: true,
            func,
        }
    }
}

impl<T, F> Reduction<T> for Custom<F>
where
    T: Element,
    F: Fn(ArrayViewD<'_, T>, Axis) -> ArrayD<T>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn skips_missing(&self) -> bool {
        self.skips_missing
    }

    fn reduce(&self, array: ArrayViewD<'_, T>, axis: Axis) -> ArrayD<T> {
        (self.func)(array, axis)
    }
}
