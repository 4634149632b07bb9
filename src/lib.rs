//! # interp_core: Univariate Interpolation Primitives
//!
//! ## Scope
//!
//! interp_core approximates a function from sampled `(x, y)` data, providing
//! four interpolation strategies with different smoothness and locality
//! tradeoffs:
//! - Piecewise linear segments (`interpolators::LinearInterpolator`)
//! - Piecewise cubic Hermite polynomials (`interpolators::CubicHermiteInterpolator`)
//! - A global polynomial in the Lagrange basis (`interpolators::LagrangeInterpolator`)
//! - The same global polynomial via divided differences (`interpolators::NewtonInterpolator`)
//!
//! All interpolators are fit once at construction and queried through the
//! shared [`interpolators::Interpolator`] trait; instances never mutate
//! after construction and are safe to share across threads.
//!
//! ## Minimal Dependency Principle
//!
//! The crate carries only foundational dependencies:
//! - num-traits: Traits for generic numerical computation
//! - num-dual: Dual number types and automatic differentiation (optional)
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Stable Rust Toolchain
//!
//! The crate builds with stable Rust only (nightly not required).
//!
//! ## Usage Examples
//!
//! ```rust
//! use interp_core::interpolators::{Interpolator, LinearInterpolator, NewtonInterpolator};
//!
//! // y = x^2 sampled at four points
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! // Piecewise linear: chord through (1,1)-(2,4) at x = 1.5
//! let linear = LinearInterpolator::new(&xs, &ys).unwrap();
//! assert!((linear.interpolate(1.5).unwrap() - 2.5).abs() < 1e-12);
//!
//! // Global polynomial: reproduces the quadratic exactly
//! let newton = NewtonInterpolator::new(&xs, &ys).unwrap();
//! assert!((newton.interpolate(1.5).unwrap() - 2.25).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Expose the num-dual `DualNumber` alias for derivative verification
//! - `serde`: Enable serialisation for error and method-selection types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod interpolators;
pub mod types;
