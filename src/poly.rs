use std::fmt::Display;

use itertools::Itertools;

use crate::{util::doc_macros::errors_invalid_coefficients, Error, Result};

mod calculus;
mod indexing;

/// A real polynomial stored as a list of coefficients of terms of ascending
/// degree, i.e. `coeffs[i]` multiplies `x^i`.
///
/// The highest degree coefficient is never zero, with one exception: the
/// derivative of a constant is the constant `0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial(Vec<f64>);

impl Polynomial {
    /// Create a polynomial from coefficients in ascending degree order.
    ///
    /// # Errors
    #[doc = errors_invalid_coefficients!()]
    ///
    /// ```
    /// use equation_solver::Polynomial;
    ///
    /// // 3x^2 - 2
    /// let p = Polynomial::new(&[-2.0, 0.0, 3.0]).unwrap();
    /// assert_eq!(p.degree(), 2);
    ///
    /// assert!(Polynomial::new(&[1.0, 0.0]).is_err());
    /// ```
    pub fn new(coeffs: &[f64]) -> Result<Self> {
        match coeffs.last() {
            Some(leading) if *leading != 0.0 => Ok(Self(coeffs.to_vec())),
            _ => Err(Error::InvalidCoefficients),
        }
    }

    /// Create a polynomial from coefficients in descending degree order, as
    /// polynomials are usually written down.
    ///
    /// # Errors
    #[doc = errors_invalid_coefficients!()]
    pub fn from_descending(coeffs: &[f64]) -> Result<Self> {
        let ascending = coeffs.iter().rev().copied().collect_vec();
        Self::new(&ascending)
    }

    /// The constant zero polynomial
    pub(crate) fn zero() -> Self {
        Self(vec![0.0])
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree_raw()
    }

    /// The degree of the polynomial without checking pre-conditions
    #[inline]
    pub(crate) fn degree_raw(&self) -> usize {
        self.0.len() - 1
    }

    /// The last coefficient
    pub(crate) fn last(&self) -> f64 {
        self.0[self.degree_raw()]
    }

    /// Flip the sign of every coefficient in-place. The roots are unchanged.
    pub fn negate(&mut self) {
        self.0.iter_mut().for_each(|c| *c = -*c);
    }

    /// Evaluate the polynomial at `x` with Horner's method.
    ///
    /// The accumulation starts at the leading coefficient and folds in the
    /// coefficients down to degree 1. The constant term is **not** added, so
    /// for degree 1 and above this returns `(p(x) - c0) / x`. Degree 0
    /// polynomials return their constant.
    ///
    /// ```
    /// use equation_solver::Polynomial;
    ///
    /// // x^2 - 2
    /// let p = Polynomial::new(&[-2.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(p.eval(3.0), 3.0);
    /// ```
    // TODO: fold in c0 (loop down to 0) and update `eval_skips_constant_term`
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.degree_raw();
        let mut eval = self.last();
        for i in (1..n).rev() {
            eval = eval * x + self.0[i];
        }
        eval
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.clone()
    }

    /// Iterate over the coefficients, lowest degree first. Use `.rev()` for
    /// descending order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.iter().enumerate();
        if let Some((_, c)) = iter.next() {
            write!(f, "{c}")?;
        } else {
            return Ok(());
        }
        for (i, c) in iter {
            write!(f, " + {c}*x^{i}")?;
        }
        Ok(())
    }
}
