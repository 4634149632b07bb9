//! Univariate interpolation methods.
//!
//! This module provides a collection of interpolation algorithms over
//! strictly distinct sample abscissas, generic over `T: Float` so the same
//! code serves `f64` and `f32`.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between data points
//! - [`CubicHermiteInterpolator`]: Piecewise cubic with first-derivative control
//! - [`LagrangeInterpolator`]: Global polynomial in the Lagrange basis
//! - [`NewtonInterpolator`]: Global polynomial in Newton divided-difference form
//!
//! Runtime method selection is available through [`InterpolationMethod`] and
//! the static dispatch wrapper [`InterpolatorEnum`].
//!
//! ## Core Trait
//!
//! All interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return the sampled abscissa range
//!
//! The piecewise interpolators reject queries outside `domain()`; the global
//! polynomial interpolators evaluate everywhere and extrapolate beyond it.
//!
//! ## AD Compatibility
//!
//! NOTE: `num_dual::Dual64` does not implement `num_traits::Float`, so the
//! interpolators cannot be instantiated with dual inputs under the current
//! trait bounds. Relaxing `T: Float` to a more permissive combination of
//! traits that both `f64` and `Dual64` satisfy (e.g., `DualNum<f64>` or a
//! custom `Scalar` trait) is tracked as a future enhancement. For now,
//! derivative verification is done via `CubicHermiteInterpolator::derivative`
//! and finite difference comparisons in the test suite.
//!
//! ## Example
//!
//! ```
//! use interp_core::interpolators::{Interpolator, LinearInterpolator, NewtonInterpolator};
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let linear = LinearInterpolator::new(&xs, &ys).unwrap();
//! let (x_min, x_max) = linear.domain();
//! assert_eq!(x_min, 0.0);
//! assert_eq!(x_max, 3.0);
//!
//! // Chord between (1, 1) and (2, 4)
//! let y = linear.interpolate(1.5).unwrap();
//! assert!((y - 2.5).abs() < 1e-10);
//!
//! // The degree-3 fit recovers the underlying quadratic
//! let newton = NewtonInterpolator::new(&xs, &ys).unwrap();
//! let y = newton.interpolate(1.5).unwrap();
//! assert!((y - 2.25).abs() < 1e-10);
//! ```

mod hermite;
mod interpolator_enum;
mod lagrange;
mod linear;
mod newton;
mod traits;

// Re-export public types at module level
pub use hermite::CubicHermiteInterpolator;
pub use interpolator_enum::{InterpolationMethod, InterpolatorEnum};
pub use lagrange::LagrangeInterpolator;
pub use linear::LinearInterpolator;
pub use newton::NewtonInterpolator;
pub use traits::Interpolator;
