use num::Complex;

use super::{trace_roots, PolyBase, PolyResult, PolynomialRootSolver};
use crate::{util::doc_macros::errors_invalid_coefficients, Result};

/// `a x^2 + b x + c`
#[derive(Clone, Debug, PartialEq)]
pub struct Quadratic {
    base: PolyBase,
    a: f64,
    b: f64,
    c: f64,
}

impl Quadratic {
    /// # Errors
    #[doc = errors_invalid_coefficients!()]
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        Ok(Self {
            base: PolyBase::new(&[a, b, c])?,
            a,
            b,
            c,
        })
    }

    /// `b^2 - 4ac`
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }
}

impl PolynomialRootSolver for Quadratic {
    fn base(&self) -> &PolyBase {
        &self.base
    }

    /// Quadratic formula over the complex numbers
    ///
    /// ```
    /// use equation_solver::{complex, PolynomialRootSolver, Quadratic};
    ///
    /// let roots = Quadratic::new(1.0, 0.0, 4.0).unwrap().solutions();
    /// assert_eq!(roots, vec![complex!(0.0, 2.0), complex!(0.0, -2.0)]);
    /// ```
    fn solutions(&self) -> PolyResult {
        let delta = Complex::new(self.discriminant(), 0.0).sqrt();
        let two_a = 2.0 * self.a;
        let minus_b = Complex::new(-self.b, 0.0);

        let roots = vec![(minus_b + delta) / two_a, (minus_b - delta) / two_a];
        trace_roots("quadratic", &roots);
        roots
    }
}

#[cfg(test)]
mod test {
    use super::Quadratic;
    use crate::{Error, PolynomialRootSolver};

    #[test]
    fn real_roots() {
        let q = Quadratic::new(1.0, -3.0, 2.0).unwrap();
        assert_eq!(q.discriminant(), 1.0);
        assert_eq!(q.solutions(), vec![complex!(2.0), complex!(1.0)]);
    }

    #[test]
    fn double_root() {
        let q = Quadratic::new(1.0, -4.0, 4.0).unwrap();
        assert_eq!(q.discriminant(), 0.0);
        assert_eq!(q.solutions(), vec![complex!(2.0), complex!(2.0)]);
    }

    #[test]
    fn complex_roots() {
        // 2x^2 + 2x + 1, roots -1/2 +- i/2
        let q = Quadratic::new(2.0, 2.0, 1.0).unwrap();
        assert_eq!(q.discriminant(), -4.0);
        let roots = q.solutions();
        assert!((roots[0] - complex!(-0.5, 0.5)).norm() < 1E-15);
        assert!((roots[1] - complex!(-0.5, -0.5)).norm() < 1E-15);
    }

    #[test]
    fn leading_zero() {
        assert!(matches!(
            Quadratic::new(0.0, 1.0, 1.0),
            Err(Error::InvalidCoefficients)
        ));
    }

    #[test]
    fn polynomial_is_ascending() {
        let q = Quadratic::new(3.0, 2.0, 1.0).unwrap();
        assert_eq!(q.polynomial().as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(q.degree(), 2);
        assert_eq!(q.derivative().as_slice(), &[2.0, 6.0]);
    }

    /// `a (x - r1) (x - r2)` expands back to the input
    #[test]
    fn vieta() {
        for (a, b, c) in [(1.0, 5.0, 6.0), (-2.0, 1.0, 3.0), (0.5, 0.0, 2.0), (3.0, -7.0, 0.0)] {
            let roots = Quadratic::new(a, b, c).unwrap().solutions();
            let sum = roots[0] + roots[1];
            let product = roots[0] * roots[1];
            assert!((sum * a + b).norm() < 1E-12, "{a} {b} {c}");
            assert!((product * a - c).norm() < 1E-12, "{a} {b} {c}");
        }
    }
}
