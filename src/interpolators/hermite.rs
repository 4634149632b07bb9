//! Piecewise cubic Hermite interpolation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise cubic Hermite interpolator.
///
/// Fits one cubic polynomial per interval, matching the sample value and the
/// first derivative at both interval endpoints. The result interpolates
/// every knot and is C1 continuous over the whole domain.
///
/// Knot derivatives are either supplied by the caller
/// ([`CubicHermiteInterpolator::with_derivatives`]) or estimated from the
/// data ([`CubicHermiteInterpolator::new`]).
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Derivative Estimation
///
/// With secant slopes `s_i = (y_{i+1} - y_i) / (x_{i+1} - x_i)`, the
/// estimated knot derivatives are
///
/// - interior: `d_i = (s_{i-1} + s_i) / 2` (mean of the adjacent secants,
///   the Catmull-Rom style estimate),
/// - boundaries: `d_0 = s_0` and `d_{n-1} = s_{n-2}` (one-sided secant).
///
/// With exactly two points both derivatives equal the single secant, so the
/// interpolant degenerates to the chord. The rule is deterministic: the same
/// samples always produce the same estimates.
///
/// # Construction
///
/// Sample points are sorted by x-coordinate during construction (supplied
/// derivatives are carried through the same permutation). Repeated x values
/// are rejected with `DuplicateAbscissa`. At least 2 points are required.
///
/// # Out-of-Domain Policy
///
/// Queries outside `[x_min, x_max]` fail with `OutOfBounds`; the cubics are
/// never extended past the sampled range.
///
/// # Example
///
/// ```
/// use interp_core::interpolators::{CubicHermiteInterpolator, Interpolator};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let interp = CubicHermiteInterpolator::new(&xs, &ys).unwrap();
///
/// // Knots are reproduced exactly
/// assert!((interp.interpolate(2.0).unwrap() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct CubicHermiteInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values (in sorted x order)
    ys: Vec<T>,
    /// Knot derivatives, supplied or estimated (in sorted x order)
    dys: Vec<T>,
}

impl<T: Float> CubicHermiteInterpolator<T> {
    /// Construct a cubic Hermite interpolator, estimating knot derivatives.
    ///
    /// Derivatives follow the secant-mean rule documented on the type.
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
    /// * `Ok(CubicHermiteInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched slice lengths
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points
    /// * `Err(InterpolationError::DuplicateAbscissa)` - Repeated x value
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::interpolators::CubicHermiteInterpolator;
    ///
    /// let interp = CubicHermiteInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    /// // Interior estimate: mean of secants 1 and 3
    /// assert!((interp.derivatives()[1] - 2.0).abs() < 1e-10);
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

        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        for i in 1..sorted_xs.len() {
            if sorted_xs[i] == sorted_xs[i - 1] {
                return Err(InterpolationError::DuplicateAbscissa {
                    x: sorted_xs[i].to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        let dys = Self::estimate_slopes(&sorted_xs, &sorted_ys);

        Ok(Self {
            xs: sorted_xs,
            ys: sorted_ys,
            dys,
        })
    }

    /// Construct a cubic Hermite interpolator from caller-supplied knot
    /// derivatives.
    ///
    /// All three slices must have the same length; samples are sorted by
    /// x-coordinate with their derivatives carried along. Requires at least
    /// 2 points with pairwise-distinct x values.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of x-coordinates
    /// * `ys` - Slice of corresponding y-values
    /// * `dys` - Slice of first derivatives at each sample point
    ///
    /// # Returns
    ///
    /// * `Ok(CubicHermiteInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched slice lengths
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points
    /// * `Err(InterpolationError::DuplicateAbscissa)` - Repeated x value
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::interpolators::{CubicHermiteInterpolator, Interpolator};
    ///
    /// // y = x^2 with exact derivatives dy = 2x reproduces the quadratic
    /// let interp = CubicHermiteInterpolator::with_derivatives(
    ///     &[0.0_f64, 1.0, 2.0, 3.0],
    ///     &[0.0, 1.0, 4.0, 9.0],
    ///     &[0.0, 2.0, 4.0, 6.0],
    /// )
    /// .unwrap();
    /// assert!((interp.interpolate(1.5).unwrap() - 2.25).abs() < 1e-10);
    /// ```
    pub fn with_derivatives(xs: &[T], ys: &[T], dys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() || xs.len() != dys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs, ys and dys must have same length: got {}, {} and {}",
                xs.len(),
                ys.len(),
                dys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }

        let mut triples: Vec<(T, T, T)> = xs
            .iter()
            .zip(ys.iter())
            .zip(dys.iter())
            .map(|((&x, &y), &d)| (x, y, d))
            .collect();
        triples.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        for i in 1..triples.len() {
            if triples[i].0 == triples[i - 1].0 {
                return Err(InterpolationError::DuplicateAbscissa {
                    x: triples[i].0.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        let mut sorted_xs = Vec::with_capacity(triples.len());
        let mut sorted_ys = Vec::with_capacity(triples.len());
        let mut sorted_dys = Vec::with_capacity(triples.len());
        for (x, y, d) in triples {
            sorted_xs.push(x);
            sorted_ys.push(y);
            sorted_dys.push(d);
        }

        Ok(Self {
            xs: sorted_xs,
            ys: sorted_ys,
            dys: sorted_dys,
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

    /// Returns the knot derivatives (in sorted x order), whether supplied
    /// or estimated.
    #[inline]
    pub fn derivatives(&self) -> &[T] {
        &self.dys
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

    /// Evaluate the first derivative of the fitted piecewise cubic at `x`.
    ///
    /// The derivative is computed analytically from the Hermite basis of the
    /// enclosing interval, so at every knot it equals the stored knot
    /// derivative regardless of which adjacent interval is used.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to differentiate
    ///
    /// # Returns
    ///
    /// * `Ok(dy)` - The first derivative at `x`
    /// * `Err(InterpolationError::OutOfBounds)` - If `x` is outside the domain
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::interpolators::CubicHermiteInterpolator;
    ///
    /// let interp = CubicHermiteInterpolator::with_derivatives(
    ///     &[0.0_f64, 1.0, 2.0],
    ///     &[0.0, 1.0, 4.0],
    ///     &[0.0, 2.0, 4.0],
    /// )
    /// .unwrap();
    /// assert!((interp.derivative(1.0).unwrap() - 2.0).abs() < 1e-10);
    /// ```
    pub fn derivative(&self, x: T) -> Result<T, InterpolationError> {
        self.check_bounds(x)?;

        let i = self.find_segment(x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;

        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();
        let four = T::from(4.0).unwrap();
        let six = T::from(6.0).unwrap();

        // d/dx of the Hermite basis; the tangent terms lose the h factor
        let dh00 = (six * t2 - six * t) / h;
        let dh10 = three * t2 - four * t + T::one();
        let dh01 = (six * t - six * t2) / h;
        let dh11 = three * t2 - two * t;

        Ok(dh00 * self.ys[i]
            + dh10 * self.dys[i]
            + dh01 * self.ys[i + 1]
            + dh11 * self.dys[i + 1])
    }

    /// Estimate knot derivatives from sorted samples using the secant-mean
    /// rule documented on the type.
    fn estimate_slopes(xs: &[T], ys: &[T]) -> Vec<T> {
        let n = xs.len();
        let two = T::from(2.0).unwrap();

        let secants: Vec<T> = (0..n - 1)
            .map(|i| (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]))
            .collect();

        let mut dys = Vec::with_capacity(n);
        dys.push(secants[0]);
        for i in 1..n - 1 {
            dys.push((secants[i - 1] + secants[i]) / two);
        }
        dys.push(secants[n - 2]);
        dys
    }

    /// Find the segment index `i` with `xs[i] <= x < xs[i+1]` by binary
    /// search, clamped to `[0, n-2]`.
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        pos.saturating_sub(1).min(self.xs.len() - 2)
    }

    /// Fail with `OutOfBounds` when `x` lies outside the sampled hull.
    fn check_bounds(&self, x: T) -> Result<(), InterpolationError> {
        let (x_min, x_max) = self.domain();
        if x < x_min || x > x_max {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }
}

impl<T: Float> Interpolator<T> for CubicHermiteInterpolator<T> {
    /// Interpolate the value at point `x` on the enclosing interval.
    ///
    /// With `t = (x - x_i) / h` and `h = x_{i+1} - x_i`, evaluates the
    /// standard cubic Hermite basis
    ///
    /// ```text
    /// h00 = 2t^3 - 3t^2 + 1    h10 = t^3 - 2t^2 + t
    /// h01 = -2t^3 + 3t^2       h11 = t^3 - t^2
    ///
    /// H(t) = h00*y_i + h10*h*d_i + h01*y_{i+1} + h11*h*d_{i+1}
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
    /// use interp_core::interpolators::{CubicHermiteInterpolator, Interpolator};
    ///
    /// let interp = CubicHermiteInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
    /// let y = interp.interpolate(0.5).unwrap();
    /// assert!(y.is_finite());
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        self.check_bounds(x)?;

        let i = self.find_segment(x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let two = T::from(2.0).unwrap();
        let three = T::from(3.0).unwrap();

        let h00 = two * t3 - three * t2 + T::one();
        let h10 = t3 - two * t2 + t;
        let h01 = three * t2 - two * t3;
        let h11 = t3 - t2;

        Ok(h00 * self.ys[i]
            + h10 * h * self.dys[i]
            + h01 * self.ys[i + 1]
            + h11 * h * self.dys[i + 1])
    }

    /// Return the valid interpolation domain as `(x_min, x_max)`.
    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
