//! Closed-form roots of polynomials of degree 2, 3 and 4.

use itertools::Itertools;
use num::Complex;

use crate::{util::complex::complex_fmt, Polynomial, Result};

mod quadratic;
pub use quadratic::Quadratic;
mod cubic;
pub use cubic::Cubic;
mod quartic;
pub use quartic::Quartic;
mod generic;
pub use generic::{PolyAlgorithm, PolyEquation};

/// All roots of a polynomial, repeated according to their multiplicity.
pub type PolyResult = Vec<Complex<f64>>;

/// State shared by all polynomial root solvers: the polynomial itself.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyBase {
    poly: Polynomial,
}

impl PolyBase {
    /// Coefficients in descending degree order.
    ///
    /// # Errors
    /// - `InvalidCoefficients`: the leading coefficient is zero.
    pub fn new(coeffs: &[f64]) -> Result<Self> {
        Ok(Self {
            poly: Polynomial::from_descending(coeffs)?,
        })
    }

    #[must_use]
    pub const fn polynomial(&self) -> &Polynomial {
        &self.poly
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.poly.degree()
    }

    #[must_use]
    pub fn derivative(&self) -> Polynomial {
        self.poly.derivative()
    }
}

/// A solver that knows how to find every root of its polynomial.
pub trait PolynomialRootSolver {
    fn base(&self) -> &PolyBase;

    /// All complex roots, one entry per root counted with multiplicity
    fn solutions(&self) -> PolyResult;

    fn polynomial(&self) -> &Polynomial {
        self.base().polynomial()
    }

    fn degree(&self) -> usize {
        self.base().degree()
    }

    fn derivative(&self) -> Polynomial {
        self.base().derivative()
    }
}

fn trace_roots(solver: &str, roots: &[Complex<f64>]) {
    log::trace!(
        "{solver} roots: [{}]",
        roots.iter().map(complex_fmt).join(", ")
    );
}

#[cfg(test)]
mod test {
    use super::{Cubic, PolyBase, PolynomialRootSolver, Quadratic, Quartic};
    use crate::Error;

    #[test]
    fn base_from_descending() {
        let base = PolyBase::new(&[2.0, 0.0, -1.0]).unwrap();
        assert_eq!(base.polynomial().as_slice(), &[-1.0, 0.0, 2.0]);
        assert_eq!(base.degree(), 2);
        assert_eq!(base.derivative().as_slice(), &[0.0, 4.0]);
    }

    #[test]
    fn base_zero_leading() {
        assert!(matches!(
            PolyBase::new(&[0.0, 1.0]),
            Err(Error::InvalidCoefficients)
        ));
    }

    #[test]
    fn trait_objects() {
        let solvers: Vec<Box<dyn PolynomialRootSolver>> = vec![
            Box::new(Quadratic::new(1.0, -3.0, 2.0).unwrap()),
            Box::new(Cubic::new(1.0, -6.0, 11.0, -6.0).unwrap()),
            Box::new(Quartic::new(1.0, -10.0, 35.0, -50.0, 24.0).unwrap()),
        ];
        for s in solvers {
            assert_eq!(s.solutions().len(), s.degree());
            assert_eq!(s.derivative().degree(), s.degree() - 1);
        }
    }
}
