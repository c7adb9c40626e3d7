use std::f64::consts::TAU;

use num::Complex;

use super::{trace_roots, PolyBase, PolyResult, PolynomialRootSolver};
use crate::{util::doc_macros::errors_invalid_coefficients, Result};

/// `a x^3 + b x^2 + c x + d`
#[derive(Clone, Debug, PartialEq)]
pub struct Cubic {
    base: PolyBase,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Cubic {
    /// # Errors
    #[doc = errors_invalid_coefficients!()]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self> {
        Ok(Self {
            base: PolyBase::new(&[a, b, c, d])?,
            a,
            b,
            c,
            d,
        })
    }

    /// `b^2 c^2 - 4 a c^3 - 4 b^3 d - 27 a^2 d^2 + 18 abcd`
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        let Self { a, b, c, d, .. } = *self;
        c * c * b * b - 4.0 * d * b * b * b - 4.0 * c * c * c * a + 18.0 * a * b * c * d
            - 27.0 * d * d * a * a
    }
}

impl PolynomialRootSolver for Cubic {
    fn base(&self) -> &PolyBase {
        &self.base
    }

    /// Roots through the depressed cubic `t^3 + 3qt - 2r`.
    ///
    /// With `Δ = q^3 + r^2`:
    /// - `Δ < 0`: three distinct real roots, trigonometric method.
    /// - `Δ = 0`: `2 cbrt(r) - A/3` repeated three times.
    /// - `Δ > 0`: one real root and a complex pair, Cardano's method. Both
    ///   entries of the pair carry a positive imaginary part; the second is
    ///   **not** the conjugate of the first.
    ///
    /// ```
    /// use equation_solver::{Cubic, PolynomialRootSolver};
    ///
    /// // (x - 1)(x - 2)(x - 3)
    /// let roots = Cubic::new(1.0, -6.0, 11.0, -6.0).unwrap().solutions();
    /// assert!((roots[0].re - 3.0).abs() < 1E-12);
    /// assert!((roots[1].re - 1.0).abs() < 1E-12);
    /// assert!((roots[2].re - 2.0).abs() < 1E-12);
    /// ```
    fn solutions(&self) -> PolyResult {
        let a = self.b / self.a;
        let b = self.c / self.a;
        let c = self.d / self.a;
        let q = (3.0 * b - a * a) / 9.0;
        let r = (9.0 * a * b - 27.0 * c - 2.0 * a * a * a) / 54.0;

        let a_over_3 = a / 3.0;
        let q_cube = q * q * q;
        let delta = q_cube + r * r;
        log::trace!("cubic {{q: {q}, r: {r}, delta: {delta}}}");

        let roots = if delta < 0.0 {
            let theta = (r / (-q_cube).sqrt()).acos();
            let sqrt_q = (-q).sqrt();
            [0.0, TAU, 2.0 * TAU]
                .into_iter()
                .map(|k| Complex::new(sqrt_q * 2.0 * ((theta + k) / 3.0).cos() - a_over_3, 0.0))
                .collect()
        } else if delta > 0.0 {
            let sqrt_d = delta.sqrt();
            let s = (r + sqrt_d).cbrt();
            let t = (r - sqrt_d).cbrt();
            let real_part = a_over_3 + (s + t) / 2.0;
            let imag_part = 3f64.sqrt() * (s - t) / 2.0;

            // TODO: negate the imaginary part of the last root and update
            //       `complex_pair_is_duplicated`
            vec![
                Complex::new((s + t) - a_over_3, 0.0),
                Complex::new(-real_part, imag_part),
                Complex::new(-real_part, imag_part),
            ]
        } else {
            vec![Complex::new(2.0 * r.cbrt() - a_over_3, 0.0); 3]
        };

        trace_roots("cubic", &roots);
        roots
    }
}
