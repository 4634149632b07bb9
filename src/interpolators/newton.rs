//! Global polynomial interpolation in Newton form with divided differences.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Newton divided-difference polynomial interpolator.
///
/// Fits the same unique polynomial as the Lagrange form, but represents it
/// in the Newton basis:
///
/// ```text
/// P(x) = c_0 + c_1 (x - x_0) + c_2 (x - x_0)(x - x_1) + ...
/// ```
///
/// where `c_k = f[x_0, ..., x_k]` are divided differences built one node at
/// a time. The table is never materialised in full: construction keeps only
/// the trailing anti-diagonal (the differences ending at the newest node),
/// which is exactly the state needed to grow the fit.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Any number of points n >= 1 with pairwise-distinct x values is accepted.
/// Node order is preserved as given; the coefficients depend on it but the
/// fitted polynomial does not.
///
/// # Incremental Refinement
///
/// [`extend`](NewtonInterpolator::extend) produces a new interpolator over
/// the old nodes plus one more in O(n), reusing the stored anti-diagonal.
/// The result is identical to refitting from scratch on the combined data,
/// coefficient for coefficient.
///
/// # Out-of-Domain Policy
///
/// The fitted polynomial is defined for every finite x, so `interpolate`
/// accepts queries outside `domain()`. Values beyond the sampled hull are
/// polynomial extrapolations.
///
/// # Example
///
/// ```
/// use interp_core::interpolators::{Interpolator, NewtonInterpolator};
///
/// let interp = NewtonInterpolator::new(&[0.0_f64, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
/// assert!((interp.interpolate(1.5).unwrap() - 2.25).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonInterpolator<T: Float> {
    /// Node x-coordinates, in caller order
    xs: Vec<T>,
    /// Node y-values, in caller order
    ys: Vec<T>,
    /// Newton coefficients c_k = f[x_0, ..., x_k]
    coeffs: Vec<T>,
    /// Trailing anti-diagonal f[x_{n-1}], f[x_{n-2}, x_{n-1}], ..., f[x_0, ..., x_{n-1}]
    diag: Vec<T>,
}

impl<T: Float> NewtonInterpolator<T> {
    /// Construct a Newton interpolator from x and y sample points.
    ///
    /// Builds the divided-difference coefficients incrementally, one node at
    /// a time, in O(n^2) total.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of x-coordinates (any order)
    /// * `ys` - Slice of corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(NewtonInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched slice lengths
    /// * `Err(InterpolationError::InsufficientData)` - No points at all
    /// * `Err(InterpolationError::DuplicateAbscissa)` - Repeated x value
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::interpolators::NewtonInterpolator;
    ///
    /// let interp = NewtonInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    /// assert_eq!(interp.coefficients().len(), 3);
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.is_empty() {
            return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
        }

        // Check distinctness up front so the table build never divides by zero
        for i in 0..xs.len() {
            for j in (i + 1)..xs.len() {
                if xs[i] == xs[j] {
                    return Err(InterpolationError::DuplicateAbscissa {
                        x: xs[i].to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }

        let mut interp = Self {
            xs: vec![xs[0]],
            ys: vec![ys[0]],
            coeffs: vec![ys[0]],
            diag: vec![ys[0]],
        };
        for (&x, &y) in xs[1..].iter().zip(ys[1..].iter()) {
            interp.push(x, y);
        }
        Ok(interp)
    }

    /// Return a new interpolator covering the existing nodes plus `(x, y)`.
    ///
    /// Costs O(n): one new anti-diagonal row is computed from the stored
    /// one, yielding the single new coefficient `f[x_0, ..., x_n]`. The
    /// result matches a fresh fit on the combined data exactly. `self` is
    /// left untouched.
    ///
    /// # Arguments
    ///
    /// * `x` - New node x-coordinate, distinct from all existing nodes
    /// * `y` - New node y-value
    ///
    /// # Returns
    ///
    /// * `Ok(NewtonInterpolator)` - Interpolator over n + 1 nodes
    /// * `Err(InterpolationError::DuplicateAbscissa)` - `x` already a node
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::interpolators::{Interpolator, NewtonInterpolator};
    ///
    /// let base = NewtonInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    /// let refined = base.extend(3.0, 9.0).unwrap();
    ///
    /// assert_eq!(base.len(), 3);
    /// assert_eq!(refined.len(), 4);
    /// assert!((refined.interpolate(2.5).unwrap() - 6.25).abs() < 1e-10);
    /// ```
    pub fn extend(&self, x: T, y: T) -> Result<Self, InterpolationError> {
        for &xi in &self.xs {
            if xi == x {
                return Err(InterpolationError::DuplicateAbscissa {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        let mut extended = self.clone();
        extended.push(x, y);
        Ok(extended)
    }

    /// Append one node, rolling the anti-diagonal forward by a single row.
    /// The caller has already ruled out a duplicate abscissa.
    fn push(&mut self, x: T, y: T) {
        let mut row = Vec::with_capacity(self.diag.len() + 1);
        row.push(y);
        for (j, &prev) in self.diag.iter().enumerate() {
            let last = row[row.len() - 1];
            row.push((prev - last) / (self.xs[self.xs.len() - 1 - j] - x));
        }

        self.coeffs.push(row[row.len() - 1]);
        self.diag = row;
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Returns the Newton coefficients `c_0, ..., c_{n-1}`.
    ///
    /// `c_k` is the divided difference `f[x_0, ..., x_k]` over the nodes in
    /// stored order.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Returns a reference to the node x-coordinates, in caller order.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the node y-values, in caller order.
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
}

impl<T: Float> Interpolator<T> for NewtonInterpolator<T> {
    /// Evaluate the fitted polynomial at `x` via Horner's scheme.
    ///
    /// Nested evaluation of the Newton form costs O(n) per call:
    ///
    /// ```text
    /// P(x) = c_0 + (x - x_0)(c_1 + (x - x_1)(c_2 + ...))
    /// ```
    ///
    /// Always succeeds: the global polynomial is defined for every finite
    /// query point, inside or outside the sampled hull.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The polynomial value at `x`
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::interpolators::{Interpolator, NewtonInterpolator};
    ///
    /// let interp = NewtonInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    /// assert!((interp.interpolate(0.5).unwrap() - 0.25).abs() < 1e-12);
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let n = self.coeffs.len();
        let mut p = self.coeffs[n - 1];
        for k in (0..n - 1).rev() {
            p = self.coeffs[k] + (x - self.xs[k]) * p;
        }
        Ok(p)
    }

    /// Return the hull of the node abscissas as `(x_min, x_max)`.
    ///
    /// Nodes are stored unsorted, so the hull is found by a linear scan.
    /// A single node yields a degenerate `(x_0, x_0)` interval.
    fn domain(&self) -> (T, T) {
        let mut x_min = self.xs[0];
        let mut x_max = self.xs[0];
        for &x in &self.xs[1..] {
            if x < x_min {
                x_min = x;
            }
            if x > x_max {
                x_max = x;
            }
        }
        (x_min, x_max)
    }
}
