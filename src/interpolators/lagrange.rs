//! Global polynomial interpolation in the Lagrange basis.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Global Lagrange polynomial interpolator.
///
/// Fits the unique polynomial of degree at most n-1 through all n sample
/// points and evaluates it directly in the Lagrange basis:
///
/// ```text
/// P(x) = sum_i y_i * L_i(x),    L_i(x) = prod_{j != i} (x - x_j) / (x_i - x_j)
/// ```
///
/// Each evaluation recomputes the basis products from the raw samples, so a
/// call costs O(n^2). At a sample abscissa the products collapse exactly
/// (every factor of `L_i(x_i)` is 1 and every other basis polynomial
/// contains a zero factor), so `interpolate(x_i)` returns `y_i` without
/// rounding error.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Any number of points n >= 1 with pairwise-distinct x values is accepted;
/// a single point yields the constant polynomial. Node order is preserved
/// as given (the fitted polynomial does not depend on it).
///
/// # Numerical Caveats
///
/// Direct Lagrange-basis evaluation is ill-conditioned for large n or
/// clustered nodes, and high-degree interpolation through evenly spaced
/// nodes oscillates near the domain edges (Runge phenomenon). Both are
/// properties of global polynomial interpolation itself, not defects of a
/// particular query, and neither is detected or corrected at runtime.
///
/// # Out-of-Domain Policy
///
/// The fitted polynomial is defined for every finite x, so `interpolate`
/// accepts queries outside `domain()`. Values beyond the sampled hull are
/// polynomial extrapolations and can diverge rapidly from the underlying
/// function.
///
/// # Example
///
/// ```
/// use interp_core::interpolators::{Interpolator, LagrangeInterpolator};
///
/// // y = x^2 sampled at four points is reproduced exactly
/// let interp = LagrangeInterpolator::new(&[0.0_f64, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
/// assert!((interp.interpolate(1.5).unwrap() - 2.25).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct LagrangeInterpolator<T: Float> {
    /// Node x-coordinates, in caller order
    xs: Vec<T>,
    /// Node y-values, in caller order
    ys: Vec<T>,
}

impl<T: Float> LagrangeInterpolator<T> {
    /// Construct a Lagrange interpolator from x and y sample points.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of x-coordinates (any order)
    /// * `ys` - Slice of corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(LagrangeInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched slice lengths
    /// * `Err(InterpolationError::InsufficientData)` - No points at all
    /// * `Err(InterpolationError::DuplicateAbscissa)` - Repeated x value
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::interpolators::LagrangeInterpolator;
    ///
    /// let interp = LagrangeInterpolator::new(&[1.0, 2.0], &[3.0, 5.0]).unwrap();
    /// assert_eq!(interp.len(), 2);
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

        // Nodes are kept in caller order, so duplicates need a pairwise scan
        for i in 0..xs.len() {
            for j in (i + 1)..xs.len() {
                if xs[i] == xs[j] {
                    return Err(InterpolationError::DuplicateAbscissa {
                        x: xs[i].to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
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

impl<T: Float> Interpolator<T> for LagrangeInterpolator<T> {
    /// Evaluate the fitted polynomial at `x` by direct basis summation.
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
    /// use interp_core::interpolators::{Interpolator, LagrangeInterpolator};
    ///
    /// let interp = LagrangeInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
    ///
    /// // Exact at a node
    /// assert_eq!(interp.interpolate(1.0).unwrap(), 1.0);
    ///
    /// // Defined beyond the hull (polynomial extrapolation)
    /// assert!((interp.interpolate(3.0).unwrap() - 9.0).abs() < 1e-10);
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        let n = self.xs.len();
        let mut sum = T::zero();

        for i in 0..n {
            let mut basis = T::one();
            for j in 0..n {
                if j != i {
                    basis = basis * (x - self.xs[j]) / (self.xs[i] - self.xs[j]);
                }
            }
            sum = sum + self.ys[i] * basis;
        }

        Ok(sum)
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

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new_with_single_point() {
        let interp = LagrangeInterpolator::new(&[2.0], &[7.0]).unwrap();
        assert_eq!(interp.len(), 1);
    }

    #[test]
    fn test_new_empty_input() {
        let xs: [f64; 0] = [];
        let ys: [f64; 0] = [];
        let result = LagrangeInterpolator::new(&xs, &ys);

        match result.unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 0);
                assert_eq!(need, 1);
            }
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_new_mismatched_lengths() {
        let result = LagrangeInterpolator::new(&[0.0, 1.0], &[0.0]);
        assert!(matches!(
            result.unwrap_err(),
            InterpolationError::InvalidInput(_)
        ));
    }

    #[test]
    fn test_new_rejects_duplicate_x() {
        let result = LagrangeInterpolator::new(&[0.0, 1.0, 0.0], &[0.0, 1.0, 2.0]);

        match result.unwrap_err() {
            InterpolationError::DuplicateAbscissa { x } => {
                assert!((x - 0.0).abs() < 1e-10);
            }
            _ => panic!("Expected DuplicateAbscissa error"),
        }
    }

    #[test]
    fn test_new_preserves_caller_order() {
        let interp = LagrangeInterpolator::new(&[2.0, 0.0, 1.0], &[4.0, 0.0, 1.0]).unwrap();
        assert_eq!(interp.xs(), &[2.0, 0.0, 1.0]);
        assert_eq!(interp.ys(), &[4.0, 0.0, 1.0]);
    }

    #[test]
    fn test_clone_and_debug() {
        let interp = LagrangeInterpolator::new(&[0.0, 1.0], &[1.0, 2.0]).unwrap();
        let cloned = interp.clone();
        assert_eq!(interp.xs(), cloned.xs());
        assert!(format!("{:?}", interp).contains("LagrangeInterpolator"));
    }

    // ========================================
    // Evaluation Tests
    // ========================================

    #[test]
    fn test_single_point_is_constant_everywhere() {
        let interp = LagrangeInterpolator::new(&[2.0], &[7.0]).unwrap();

        for x in [-10.0, 0.0, 2.0, 100.0] {
            assert_eq!(interp.interpolate(x).unwrap(), 7.0);
        }
        assert_eq!(interp.domain(), (2.0, 2.0));
    }

    #[test]
    fn test_two_points_give_a_line() {
        let interp = LagrangeInterpolator::new(&[0.0, 2.0], &[1.0, 5.0]).unwrap();

        assert!((interp.interpolate(1.0).unwrap() - 3.0).abs() < 1e-12);
        assert!((interp.interpolate(0.5).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_exact_at_nodes() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 1.0, 4.0, 9.0];
        let interp = LagrangeInterpolator::new(&xs, &ys).unwrap();

        // Direct basis products collapse exactly at the nodes
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_eq!(interp.interpolate(x).unwrap(), y);
        }
    }

    #[test]
    fn test_quadratic_data_reproduced_exactly() {
        // Degree 3 fit through y = x^2 samples is the quadratic itself
        let interp =
            LagrangeInterpolator::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();

        assert!((interp.interpolate(1.5).unwrap() - 2.25).abs() < 1e-12);
        for x in [0.25, 0.75, 1.25, 2.5, 2.9] {
            assert!((interp.interpolate(x).unwrap() - x * x).abs() < 1e-10);
        }
    }

    #[test]
    fn test_evaluation_outside_hull_is_extrapolation() {
        let interp =
            LagrangeInterpolator::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();

        // The global quadratic extends beyond the sampled range
        assert!((interp.interpolate(4.0).unwrap() - 16.0).abs() < 1e-10);
        assert!((interp.interpolate(-1.0).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_node_order_does_not_change_polynomial() {
        let a = LagrangeInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        let b = LagrangeInterpolator::new(&[2.0, 0.0, 1.0], &[4.0, 0.0, 1.0]).unwrap();

        for x in [-0.5, 0.3, 1.1, 1.9, 2.7] {
            let ya = a.interpolate(x).unwrap();
            let yb = b.interpolate(x).unwrap();
            assert!((ya - yb).abs() < 1e-10);
        }
    }

    #[test]
    fn test_partition_of_unity() {
        // Constant samples: the basis polynomials must sum to one
        let interp =
            LagrangeInterpolator::new(&[0.0, 0.5, 1.5, 4.0], &[1.0, 1.0, 1.0, 1.0]).unwrap();

        for x in [-1.0, 0.2, 1.0, 3.0, 5.0] {
            assert!((interp.interpolate(x).unwrap() - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_domain_with_unsorted_nodes() {
        let interp = LagrangeInterpolator::new(&[2.0, -1.0, 0.5], &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(interp.domain(), (-1.0, 2.0));
    }

    #[test]
    fn test_with_f32() {
        let xs: [f32; 3] = [0.0, 1.0, 2.0];
        let ys: [f32; 3] = [0.0, 1.0, 4.0];
        let interp = LagrangeInterpolator::new(&xs, &ys).unwrap();
        assert!((interp.interpolate(1.5_f32).unwrap() - 2.25_f32).abs() < 1e-5);
    }
}
