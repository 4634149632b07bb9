//! Piecewise linear interpolation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Connects consecutive sample points with straight-line segments. The
/// interpolant reproduces every sample value exactly and is continuous (C0),
/// but its derivative jumps at the knots.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Sample points are sorted by x-coordinate during construction, so callers
/// may pass them in any order. Repeated x values are rejected with
/// `DuplicateAbscissa`. At least 2 points are required.
///
/// # Out-of-Domain Policy
///
/// Queries outside `[x_min, x_max]` fail with `OutOfBounds`. This
/// interpolator never extrapolates; callers that need values beyond the
/// sampled range must extend the sample set instead.
///
/// # Example
///
/// ```
/// use interp_core::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
///
/// // Chord through (1,1) and (2,4) evaluated at the midpoint
/// let y = interp.interpolate(1.5).unwrap();
/// assert!((y - 2.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values (in sorted x order)
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y sample points.
    ///
    /// Samples are sorted by x-coordinate if not already sorted. Requires at
    /// least 2 points with pairwise-distinct x values.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of x-coordinates
    /// * `ys` - Slice of corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched slice lengths
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points
    /// * `Err(InterpolationError::DuplicateAbscissa)` - Repeated x value
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::interpolators::LinearInterpolator;
    ///
    /// // Valid construction
    /// let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    ///
    /// // Insufficient data
    /// let result = LinearInterpolator::new(&[0.0], &[0.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        // Pair up and sort by x
        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        // Equal abscissas end up adjacent after sorting
        for i in 1..sorted_xs.len() {
            if sorted_xs[i] == sorted_xs[i - 1] {
                return Err(InterpolationError::DuplicateAbscissa {
                    x: sorted_xs[i].to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(Self {
            xs: sorted_xs,
            ys: sorted_ys,
        })
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of sample points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no sample points.
    /// Never true for a successfully constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Find the segment index `i` with `xs[i] <= x < xs[i+1]` by binary
    /// search, clamped to `[0, n-2]` so the right boundary falls in the
    /// last segment.
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        pos.saturating_sub(1).min(self.xs.len() - 2)
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolate the value at point `x` on the enclosing segment.
    ///
    /// Locates the segment with an O(log n) binary search, then evaluates
    ///
    /// ```text
    /// y = y_i + (y_{i+1} - y_i) * (x - x_i) / (x_{i+1} - x_i)
    /// ```
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to interpolate
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated value
    /// * `Err(InterpolationError::OutOfBounds)` - If `x` is outside the domain
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::interpolators::{Interpolator, LinearInterpolator};
    ///
    /// let interp = LinearInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
    ///
    /// let y = interp.interpolate(0.5).unwrap();
    /// assert!((y - 1.0).abs() < 1e-10);
    ///
    /// assert!(interp.interpolate(-1.0).is_err());
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let (x_min, x_max) = self.domain();
        if x < x_min || x > x_max {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }

        let i = self.find_segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        Ok(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
    }

    /// Return the valid interpolation domain as `(x_min, x_max)`.
    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
