//! Interpolator enumeration types for method-driven construction.
//!
//! This module provides:
//! - [`InterpolationMethod`]: Enumeration of the available interpolation methods
//! - [`InterpolatorEnum`]: Static dispatch enum wrapping the concrete interpolators

use super::{
    CubicHermiteInterpolator, Interpolator, LagrangeInterpolator, LinearInterpolator,
    NewtonInterpolator,
};
use crate::types::InterpolationError;
use num_traits::Float;

/// Names of the available interpolation methods.
///
/// Used to select an interpolator at runtime, typically from configuration,
/// via [`InterpolatorEnum::fit`].
///
/// # Variants
///
/// - `Linear`: Piecewise linear between consecutive points
/// - `CubicHermite`: Piecewise cubic with first-derivative control
/// - `Lagrange`: Global polynomial in the Lagrange basis
/// - `Newton`: Global polynomial in Newton divided-difference form
///
/// # Example
///
/// ```
/// use interp_core::interpolators::InterpolationMethod;
///
/// let method = InterpolationMethod::Linear;
/// assert_eq!(method.as_str(), "LINEAR");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMethod {
    /// Piecewise linear interpolation
    Linear,
    /// Piecewise cubic Hermite interpolation
    CubicHermite,
    /// Global Lagrange polynomial interpolation
    Lagrange,
    /// Global Newton divided-difference interpolation
    Newton,
}

impl InterpolationMethod {
    /// Return the string representation of the method name.
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::interpolators::InterpolationMethod;
    ///
    /// assert_eq!(InterpolationMethod::CubicHermite.as_str(), "CUBIC_HERMITE");
    /// assert_eq!(InterpolationMethod::Newton.as_str(), "NEWTON");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationMethod::Linear => "LINEAR",
            InterpolationMethod::CubicHermite => "CUBIC_HERMITE",
            InterpolationMethod::Lagrange => "LAGRANGE",
            InterpolationMethod::Newton => "NEWTON",
        }
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static dispatch enum wrapping the concrete interpolator implementations.
///
/// This enum provides efficient static dispatch for interpolation, avoiding
/// the overhead of trait objects while maintaining AD compatibility through
/// generic type parameter `T: Float`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Variants
///
/// - `Linear`: Piecewise linear interpolator
/// - `CubicHermite`: Piecewise cubic Hermite interpolator
/// - `Lagrange`: Global Lagrange polynomial interpolator
/// - `Newton`: Global Newton divided-difference interpolator
///
/// # Example
///
/// ```
/// use interp_core::interpolators::{InterpolationMethod, Interpolator, InterpolatorEnum};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let interp = InterpolatorEnum::fit(InterpolationMethod::Newton, &xs, &ys).unwrap();
/// assert!((interp.interpolate(1.5).unwrap() - 2.25).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub enum InterpolatorEnum<T: Float> {
    /// Piecewise linear interpolator
    Linear(LinearInterpolator<T>),
    /// Piecewise cubic Hermite interpolator
    CubicHermite(CubicHermiteInterpolator<T>),
    /// Global Lagrange polynomial interpolator
    Lagrange(LagrangeInterpolator<T>),
    /// Global Newton divided-difference interpolator
    Newton(NewtonInterpolator<T>),
}

impl<T: Float> InterpolatorEnum<T> {
    /// Fit the interpolator selected by `method` to the given samples.
    ///
    /// Construction rules (minimum point counts, sorting, duplicate
    /// detection) are those of the underlying interpolator.
    ///
    /// # Arguments
    ///
    /// * `method` - Which interpolation method to fit
    /// * `xs` - Slice of x-coordinates
    /// * `ys` - Slice of corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(InterpolatorEnum)` - Fitted interpolator of the matching variant
    /// * `Err(InterpolationError)` - Construction error from the underlying type
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::interpolators::{InterpolationMethod, Interpolator, InterpolatorEnum};
    ///
    /// let interp =
    ///     InterpolatorEnum::fit(InterpolationMethod::Linear, &[0.0_f64, 1.0], &[0.0, 2.0]).unwrap();
    /// assert!((interp.interpolate(0.5).unwrap() - 1.0).abs() < 1e-12);
    /// ```
    pub fn fit(
        method: InterpolationMethod,
        xs: &[T],
        ys: &[T],
    ) -> Result<Self, InterpolationError> {
        match method {
            InterpolationMethod::Linear => {
                LinearInterpolator::new(xs, ys).map(InterpolatorEnum::Linear)
            }
            InterpolationMethod::CubicHermite => {
                CubicHermiteInterpolator::new(xs, ys).map(InterpolatorEnum::CubicHermite)
            }
            InterpolationMethod::Lagrange => {
                LagrangeInterpolator::new(xs, ys).map(InterpolatorEnum::Lagrange)
            }
            InterpolationMethod::Newton => {
                NewtonInterpolator::new(xs, ys).map(InterpolatorEnum::Newton)
            }
        }
    }

    /// Return the method name of the wrapped interpolator.
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::interpolators::{InterpolationMethod, InterpolatorEnum};
    ///
    /// let interp =
    ///     InterpolatorEnum::fit(InterpolationMethod::Lagrange, &[0.0, 1.0], &[0.0, 2.0]).unwrap();
    /// assert_eq!(interp.method(), InterpolationMethod::Lagrange);
    /// ```
    #[inline]
    pub fn method(&self) -> InterpolationMethod {
        match self {
            InterpolatorEnum::Linear(_) => InterpolationMethod::Linear,
            InterpolatorEnum::CubicHermite(_) => InterpolationMethod::CubicHermite,
            InterpolatorEnum::Lagrange(_) => InterpolationMethod::Lagrange,
            InterpolatorEnum::Newton(_) => InterpolationMethod::Newton,
        }
    }
}

impl<T: Float> Interpolator<T> for InterpolatorEnum<T> {
    /// Evaluate the wrapped interpolator at `x`.
    ///
    /// Delegates to the underlying interpolator implementation, including
    /// its out-of-domain policy.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        match self {
            InterpolatorEnum::Linear(interp) => interp.interpolate(x),
            InterpolatorEnum::CubicHermite(interp) => interp.interpolate(x),
            InterpolatorEnum::Lagrange(interp) => interp.interpolate(x),
            InterpolatorEnum::Newton(interp) => interp.interpolate(x),
        }
    }

    /// Return the domain of the wrapped interpolator.
    ///
    /// Delegates to the underlying interpolator implementation.
    fn domain(&self) -> (T, T) {
        match self {
            InterpolatorEnum::Linear(interp) => interp.domain(),
            InterpolatorEnum::CubicHermite(interp) => interp.domain(),
            InterpolatorEnum::Lagrange(interp) => interp.domain(),
            InterpolatorEnum::Newton(interp) => interp.domain(),
        }
    }
}

impl<T: Float> From<LinearInterpolator<T>> for InterpolatorEnum<T> {
    fn from(interp: LinearInterpolator<T>) -> Self {
        InterpolatorEnum::Linear(interp)
    }
}

impl<T: Float> From<CubicHermiteInterpolator<T>> for InterpolatorEnum<T> {
    fn from(interp: CubicHermiteInterpolator<T>) -> Self {
        InterpolatorEnum::CubicHermite(interp)
    }
}

impl<T: Float> From<LagrangeInterpolator<T>> for InterpolatorEnum<T> {
    fn from(interp: LagrangeInterpolator<T>) -> Self {
        InterpolatorEnum::Lagrange(interp)
    }
}

impl<T: Float> From<NewtonInterpolator<T>> for InterpolatorEnum<T> {
    fn from(interp: NewtonInterpolator<T>) -> Self {
        InterpolatorEnum::Newton(interp)
    }
}
