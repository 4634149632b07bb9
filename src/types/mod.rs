//! Core numeric and error types.
//!
//! This module provides:
//! - `dual`: Dual number type integration with num-dual for automatic differentiation (when `num-dual-mode` feature is enabled)
//! - `error`: Structured error types for interpolator construction and evaluation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`InterpolationError`] from `error`

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;

// Re-export commonly used types at module level
pub use error::InterpolationError;
