//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolator construction and evaluation

use thiserror::Error;

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolator construction and
/// evaluation with descriptive context for each failure mode.
///
/// # Variants
/// - `OutOfBounds`: Query point outside valid interpolation domain
/// - `InsufficientData`: Not enough data points for interpolation
/// - `DuplicateAbscissa`: Two sample points share the same x value
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use interp_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Two sample points share the same x value.
    #[error("Duplicate x value {x}: abscissas must be pairwise distinct")]
    DuplicateAbscissa {
        /// The repeated x value
        x: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
