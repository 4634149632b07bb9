//! Core trait for one-dimensional interpolation.

use crate::types::InterpolationError;
use num_traits::Float;

/// Common interface for one-dimensional interpolators.
///
/// Every interpolator in this crate fits its sample data once at
/// construction and is queried through this trait. Implementations hold no
/// interior mutability, so a shared reference may be queried from multiple
/// threads concurrently.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Out-of-Domain Behaviour
///
/// `domain()` reports the closed hull `[x_min, x_max]` of the fitted sample
/// abscissas. Whether queries outside that hull fail is per-implementation
/// policy: the piecewise interpolators (`LinearInterpolator`,
/// `CubicHermiteInterpolator`) return [`InterpolationError::OutOfBounds`]
/// and never extrapolate, while the global polynomial interpolators
/// (`LagrangeInterpolator`, `NewtonInterpolator`) evaluate their polynomial
/// at any finite query point. Each implementation documents its policy.
///
/// # Example
///
/// ```
/// use interp_core::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
///
/// let (x_min, x_max) = interp.domain();
/// assert_eq!((x_min, x_max), (0.0, 2.0));
///
/// let y = interp.interpolate(0.5).unwrap();
/// assert!((y - 1.0).abs() < 1e-10);
/// ```
pub trait Interpolator<T: Float> {
    /// Interpolate the fitted function at point `x`.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to interpolate
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated value
    /// * `Err(InterpolationError)` - If evaluation fails (e.g., `x` outside
    ///   the domain of an implementation that does not extrapolate)
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the interpolation domain as `(x_min, x_max)`.
    ///
    /// The domain is the closed interval spanned by the fitted sample
    /// abscissas.
    fn domain(&self) -> (T, T);
}
