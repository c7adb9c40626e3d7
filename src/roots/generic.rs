use std::fmt;

use super::{PolyBase, PolyResult, PolynomialRootSolver};
use crate::{util::doc_macros::errors_invalid_coefficients, Polynomial, Result};

/// Root finders that work for polynomials of any degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolyAlgorithm {
    Laguerre,
    Bairstow,
}

impl fmt::Display for PolyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Laguerre => write!(f, "laguerre"),
            Self::Bairstow => write!(f, "bairstow"),
        }
    }
}

/// A polynomial of arbitrary degree paired with the algorithm that should
/// find its roots.
///
/// Neither algorithm is available yet, [`PolynomialRootSolver::solutions`]
/// always returns an empty result.
#[derive(Clone, Debug, PartialEq)]
pub struct PolyEquation {
    base: PolyBase,
    method: PolyAlgorithm,
}

impl PolyEquation {
    /// Coefficients in descending degree order.
    ///
    /// # Errors
    #[doc = errors_invalid_coefficients!()]
    pub fn new(coeffs: &[f64], method: PolyAlgorithm) -> Result<Self> {
        Ok(Self {
            base: PolyBase::new(coeffs)?,
            method,
        })
    }

    #[must_use]
    pub const fn method(&self) -> PolyAlgorithm {
        self.method
    }
}

impl PolynomialRootSolver for PolyEquation {
    fn base(&self) -> &PolyBase {
        &self.base
    }

    fn solutions(&self) -> PolyResult {
        let poly = self.base.polynomial();
        match self.method {
            PolyAlgorithm::Laguerre => laguerre(poly),
            PolyAlgorithm::Bairstow => bairstow(poly),
        }
    }
}

// TODO: Laguerre's method with deflation, seeded from a bound on root moduli
fn laguerre(poly: &Polynomial) -> PolyResult {
    log::debug!("laguerre is not implemented {{degree: {}}}", poly.degree());
    vec![]
}

// TODO: Bairstow's quadratic factor extraction
fn bairstow(poly: &Polynomial) -> PolyResult {
    log::debug!("bairstow is not implemented {{degree: {}}}", poly.degree());
    vec![]
}
