//! Integration tests for the dual number type alias.
//!
//! Note: num_dual::Dual64 does not implement num_traits::Float, so the
//! interpolators cannot be instantiated with dual inputs under the current
//! trait bounds. This test file validates the DualNumber type alias and the
//! core interpolation arithmetic written out directly in dual numbers:
//! linear blends, Hermite basis polynomials, divided differences, and
//! Horner evaluation.

#![cfg(feature = "num-dual-mode")]

use approx::assert_relative_eq;
use interp_core::types::dual::DualNumber;

/// Test that DualNumber type alias is accessible.
#[test]
fn test_dual_number_type_accessible() {
    let dual = DualNumber::new(3.0, 1.0);
    assert_eq!(dual.re, 3.0);
    assert_eq!(dual.eps, 1.0);
}

/// Test DualNumber basic arithmetic operations.
#[test]
fn test_dual_number_arithmetic() {
    let a = DualNumber::new(2.0, 1.0); // a = 2, da/da = 1
    let b = DualNumber::new(3.0, 0.0); // b = 3, db/da = 0

    // Addition: d(a+b)/da = 1
    let sum = a + b;
    assert_relative_eq!(sum.re, 5.0, epsilon = 1e-10);
    assert_relative_eq!(sum.eps, 1.0, epsilon = 1e-10);

    // Subtraction: d(a-b)/da = 1
    let diff = a - b;
    assert_relative_eq!(diff.re, -1.0, epsilon = 1e-10);
    assert_relative_eq!(diff.eps, 1.0, epsilon = 1e-10);

    // Multiplication: d(a*b)/da = b = 3
    let prod = a * b;
    assert_relative_eq!(prod.re, 6.0, epsilon = 1e-10);
    assert_relative_eq!(prod.eps, 3.0, epsilon = 1e-10);

    // Division: d(a/b)/da = 1/b = 1/3
    let quot = a / b;
    assert_relative_eq!(quot.re, 2.0 / 3.0, epsilon = 1e-10);
    assert_relative_eq!(quot.eps, 1.0 / 3.0, epsilon = 1e-10);
}

/// The linear blend y0 + (y1 - y0) * (x - x0) / (x1 - x0) with a seeded
/// query point carries the segment slope as its derivative.
#[test]
fn test_dual_number_linear_blend() {
    // Segment (1, 1) to (2, 4) of y = x^2, queried at x = 1.5
    let x0 = DualNumber::from(1.0);
    let x1 = DualNumber::from(2.0);
    let y0 = DualNumber::from(1.0);
    let y1 = DualNumber::from(4.0);
    let x = DualNumber::new(1.5, 1.0);

    let y = y0 + (y1 - y0) * (x - x0) / (x1 - x0);

    assert_relative_eq!(y.re, 2.5, epsilon = 1e-12);
    // Chord slope (4 - 1) / (2 - 1)
    assert_relative_eq!(y.eps, 3.0, epsilon = 1e-12);
}

/// The cubic Hermite basis polynomials and their derivatives at the
/// interval midpoint.
#[test]
fn test_dual_number_hermite_basis() {
    use num_dual::DualNum;

    let t = DualNumber::new(0.5, 1.0);
    let two = DualNumber::from(2.0);
    let three = DualNumber::from(3.0);
    let one = DualNumber::from(1.0);

    // h00 = 2t^3 - 3t^2 + 1, h00' = 6t^2 - 6t
    let h00 = two * t.powi(3) - three * t.powi(2) + one;
    assert_relative_eq!(h00.re, 0.5, epsilon = 1e-12);
    assert_relative_eq!(h00.eps, -1.5, epsilon = 1e-12);

    // h10 = t^3 - 2t^2 + t, h10' = 3t^2 - 4t + 1
    let h10 = t.powi(3) - two * t.powi(2) + t;
    assert_relative_eq!(h10.re, 0.125, epsilon = 1e-12);
    assert_relative_eq!(h10.eps, -0.25, epsilon = 1e-12);

    // h01 = 3t^2 - 2t^3, h01' = 6t - 6t^2
    let h01 = three * t.powi(2) - two * t.powi(3);
    assert_relative_eq!(h01.re, 0.5, epsilon = 1e-12);
    assert_relative_eq!(h01.eps, 1.5, epsilon = 1e-12);

    // h11 = t^3 - t^2, h11' = 3t^2 - 2t
    let h11 = t.powi(3) - t.powi(2);
    assert_relative_eq!(h11.re, -0.125, epsilon = 1e-12);
    assert_relative_eq!(h11.eps, -0.25, epsilon = 1e-12);

    // The value basis partitions unity, so the derivative parts cancel
    let unity = h00 + h01;
    assert_relative_eq!(unity.re, 1.0, epsilon = 1e-12);
    assert_relative_eq!(unity.eps, 0.0, epsilon = 1e-12);
}

/// A first-order divided difference is linear in its endpoint ordinate.
#[test]
fn test_dual_number_divided_difference() {
    // f[x0, x1] = (f1 - f0) / (x1 - x0) over x0 = 1, x1 = 2
    let f0 = DualNumber::from(1.0);
    let f1 = DualNumber::new(4.0, 1.0); // df1/df1 = 1
    let x0 = DualNumber::from(1.0);
    let x1 = DualNumber::from(2.0);

    let dd = (f1 - f0) / (x1 - x0);

    assert_relative_eq!(dd.re, 3.0, epsilon = 1e-12);
    // d(f[x0, x1])/df1 = 1 / (x1 - x0)
    assert_relative_eq!(dd.eps, 1.0, epsilon = 1e-12);
}

/// Horner evaluation of the Newton form recovers value and derivative of
/// the underlying polynomial.
#[test]
fn test_dual_number_horner_evaluation() {
    // y = x^2 through nodes 0, 1, 2 has divided differences [0, 1, 1]:
    // p(x) = 0 + (x - 0) * (1 + (x - 1) * 1)
    let c1 = DualNumber::from(1.0);
    let c2 = DualNumber::from(1.0);
    let x0 = DualNumber::from(0.0);
    let x1 = DualNumber::from(1.0);
    let x = DualNumber::new(1.5, 1.0);

    let p = (x - x0) * (c1 + (x - x1) * c2);

    assert_relative_eq!(p.re, 2.25, epsilon = 1e-12);
    // p'(x) = 2x
    assert_relative_eq!(p.eps, 3.0, epsilon = 1e-12);
}

/// Test chain rule with DualNumber.
#[test]
fn test_dual_number_chain_rule() {
    // f(x) = (x^2 + x)^2, f'(x) = 2(x^2 + x)(2x + 1)
    let x = DualNumber::new(1.0, 1.0);
    let inner = x * x + x;
    let result = inner * inner;

    // f(1) = 4
    assert_relative_eq!(result.re, 4.0, epsilon = 1e-10);

    // f'(1) = 2 * 2 * 3 = 12
    assert_relative_eq!(result.eps, 12.0, epsilon = 1e-10);
}

/// Seeding a node ordinate instead of the query point differentiates with
/// respect to that sample: the sensitivity is the weight the blend gives it.
#[test]
fn test_dual_number_derivative_wrt_node_value() {
    // (1 - t) * y0 + t * y1 at t = 0.5, dy1/dy1 = 1
    let t = DualNumber::from(0.5);
    let one = DualNumber::from(1.0);
    let y0 = DualNumber::from(1.0);
    let y1 = DualNumber::new(4.0, 1.0);

    let y = (one - t) * y0 + t * y1;

    assert_relative_eq!(y.re, 2.5, epsilon = 1e-12);
    // The weight on y1 is t = 0.5
    assert_relative_eq!(y.eps, 0.5, epsilon = 1e-12);
}

/// Test creating DualNumber from f64.
#[test]
fn test_dual_number_from_f64() {
    let val: f64 = 5.0;
    let dual = DualNumber::from(val);

    assert_relative_eq!(dual.re, 5.0, epsilon = 1e-10);
    assert_relative_eq!(dual.eps, 0.0, epsilon = 1e-10);
}

/// Test DualNumber negation.
#[test]
fn test_dual_number_negation() {
    let a = DualNumber::new(3.0, 1.0);
    let neg_a = -a;

    assert_relative_eq!(neg_a.re, -3.0, epsilon = 1e-10);
    assert_relative_eq!(neg_a.eps, -1.0, epsilon = 1e-10);
}

/// An unseeded input carries no derivative through the blend arithmetic.
#[test]
fn test_dual_number_unseeded_has_zero_sensitivity() {
    let x0 = DualNumber::from(1.0);
    let x1 = DualNumber::from(2.0);
    let y0 = DualNumber::from(1.0);
    let y1 = DualNumber::from(4.0);
    let x = DualNumber::from(1.5);

    let y = y0 + (y1 - y0) * (x - x0) / (x1 - x0);

    assert_relative_eq!(y.re, 2.5, epsilon = 1e-12);
    assert_eq!(y.eps, 0.0);
}

/// Test that all DualNumber operations return finite values for valid inputs.
#[test]
fn test_dual_number_operations_finite() {
    use num_dual::DualNum;

    let x = DualNumber::new(2.0, 1.0);
    let y = DualNumber::new(3.0, 0.5);

    // Arithmetic
    assert!((x + y).re.is_finite());
    assert!((x - y).re.is_finite());
    assert!((x * y).re.is_finite());
    assert!((x / y).re.is_finite());

    // Polynomial building blocks
    assert!(x.powi(3).re.is_finite());
    assert!((-x).re.is_finite());
    assert!((x * x * x - y * y).re.is_finite());
}
