use num::Complex;

use super::{trace_roots, PolyBase, PolyResult, PolynomialRootSolver};
use crate::{util::doc_macros::errors_invalid_coefficients, Result};

/// `a x^4 + b x^3 + c x^2 + d x + e`
#[derive(Clone, Debug, PartialEq)]
pub struct Quartic {
    base: PolyBase,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
}

impl Quartic {
    /// # Errors
    #[doc = errors_invalid_coefficients!()]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64) -> Result<Self> {
        Ok(Self {
            base: PolyBase::new(&[a, b, c, d, e])?,
            a,
            b,
            c,
            d,
            e,
        })
    }

    /// Standard discriminant of a quartic, zero iff there is a repeated root.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn discriminant(&self) -> f64 {
        let Self { a, b, c, d, e, .. } = *self;
        let k = b * b * c * c * d * d - 4.0 * d * d * d * b * b * b - 4.0 * d * d * c * c * c * a
            + 18.0 * d * d * d * c * b * a
            - 27.0 * d * d * d * d * a * a
            + 256.0 * e * e * e * a * a * a;
        let p = e
            * (-4.0 * c * c * c * b * b + 18.0 * d * c * b * b * b + 16.0 * c * c * c * c * a
                - 80.0 * d * c * c * b * a
                - 6.0 * d * d * b * b * a
                + 144.0 * d * d * a * a * c);
        let r = e
            * e
            * (-27.0 * b * b * b * b + 144.0 * c * b * b * a
                - 128.0 * c * c * a * a
                - 192.0 * d * b * a * a);
        k + p + r
    }
}

impl PolynomialRootSolver for Quartic {
    fn base(&self) -> &PolyBase {
        &self.base
    }

    /// Closed form through the resolvent cubic, evaluated entirely in complex
    /// arithmetic with principal square and cube roots.
    ///
    /// The formula divides by `Q7 = 2 sqrt(Q4 / 12 + Q6)`, so polynomials where
    /// that term vanishes (e.g. `x^4 - 1`) come out as NaN or lose all
    /// precision.
    ///
    /// ```
    /// use equation_solver::{PolynomialRootSolver, Quartic};
    ///
    /// // (x - 1)(x - 2)(x - 3)(x - 4)
    /// let roots = Quartic::new(1.0, -10.0, 35.0, -50.0, 24.0).unwrap().solutions();
    /// assert!(roots.iter().all(|z| z.im.abs() < 1E-9));
    ///
    /// let mut re: Vec<f64> = roots.iter().map(|z| z.re).collect();
    /// re.sort_by(f64::total_cmp);
    /// for (x, expected) in re.into_iter().zip([1.0, 2.0, 3.0, 4.0]) {
    ///     assert!((x - expected).abs() < 1E-9);
    /// }
    /// ```
    #[allow(clippy::many_single_char_names)]
    fn solutions(&self) -> PolyResult {
        let b = Complex::new(self.b / self.a, 0.0);
        let c = Complex::new(self.c / self.a, 0.0);
        let d = Complex::new(self.d / self.a, 0.0);
        let e = Complex::new(self.e / self.a, 0.0);

        let q1 = c * c - b * d * 3.0 + e * 12.0;
        let q2 = c * c * c * 2.0 - b * c * d * 9.0 + d * d * 27.0 + b * b * e * 27.0
            - c * e * 72.0;
        let q3 = b * c * 8.0 - d * 16.0 - b * b * b * 2.0;
        let q4 = b * b * 3.0 - c * 8.0;

        let q5 = ((q2 * q2 / 4.0 - q1 * q1 * q1).sqrt() + q2 / 2.0).powf(1.0 / 3.0);
        let q6 = (q1 / q5 + q5) / 3.0;
        let q7 = (q4 / 12.0 + q6).sqrt() * 2.0;
        log::trace!("quartic {{q5: {q5}, q6: {q6}, q7: {q7}}}");

        let lower = (q4 * 4.0 / 6.0 - q6 * 4.0 - q3 / q7).sqrt();
        let upper = (q4 * 4.0 / 6.0 - q6 * 4.0 + q3 / q7).sqrt();
        let roots = vec![
            (-b - q7 - lower) / 4.0,
            (-b - q7 + lower) / 4.0,
            (-b + q7 - upper) / 4.0,
            (-b + q7 + upper) / 4.0,
        ];

        trace_roots("quartic", &roots);
        roots
    }
}
