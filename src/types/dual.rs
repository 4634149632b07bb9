//! Dual number type integration for automatic differentiation.
//!
//! This module provides a type alias for num-dual's Dual64 type, intended
//! for forward-mode sensitivity verification of interpolation arithmetic.
//!
//! ## Usage
//!
//! ```
//! use interp_core::types::dual::DualNumber;
//!
//! // Seed x with derivative 1.0 and push it through f(x) = x^2
//! let x = DualNumber::new(3.0, 1.0);
//! let y = x * x;
//!
//! assert!((y.re - 9.0).abs() < 1e-12);  // value
//! assert!((y.eps - 6.0).abs() < 1e-12); // dy/dx
//! ```

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// This type supports first-order automatic differentiation with:
/// - `re`: Real part (function value)
/// - `eps`: Dual part (derivative/gradient)
///
/// # Integration with the Interpolators
///
/// NOTE: `DualNumber` (`Dual64`) does NOT implement `num_traits::Float`.
/// To query an interpolator with dual inputs, the trait bounds need to be
/// refactored from `T: Float` to a more permissive combination of traits
/// that both `f64` and `Dual64` satisfy (e.g., `DualNum<f64>` or a custom
/// `Scalar` trait). This is tracked as a future enhancement. For now,
/// derivative verification is done via `CubicHermiteInterpolator::derivative`
/// and finite difference comparisons.
///
/// Example of intended usage (requires trait bound refactoring):
///
/// ```ignore
/// use interp_core::interpolators::{Interpolator, LinearInterpolator};
/// use interp_core::types::dual::DualNumber;
///
/// let xs = [DualNumber::from(0.0), DualNumber::from(1.0), DualNumber::from(2.0)];
/// let ys = [DualNumber::from(0.0), DualNumber::from(2.0), DualNumber::from(4.0)];
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
///
/// // Seed the query point with derivative 1.0
/// let y = interp.interpolate(DualNumber::new(0.5, 1.0)).unwrap();
/// let value = y.re;     // 1.0
/// let gradient = y.eps; // dy/dx = 2.0
/// ```
#[cfg(feature = "num-dual-mode")]
pub type DualNumber = num_dual::Dual64;
