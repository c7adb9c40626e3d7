//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::{complex::Complex64, Complex, Zero};

use super::{
    complex::complex_sort_mut,
    float::{f64_make_nonzero, f64_make_normal},
};

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(f64_make_nonzero(self.state.f64()))
    }
}

/// Uniformly distributed reals in `[min, max]`
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            real_stream: RandStreamF64::new(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let x = (self.real_stream.next()?).mul_add(self.max - self.min, self.min);
        Some(f64_make_normal(x))
    }
}

/// Complex numbers uniformly distributed in a rectangle
pub struct RandStreamC64Cartesian {
    real_stream: RandStreamF64,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max_re - self.min_re, self.min_re);
        let im = (self.real_stream.next()?).mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex::new(f64_make_normal(re), f64_make_normal(im)))
    }
}

/// Descending real coefficients of `scale * (x - r_1) * ... * (x - r_n)`.
///
/// Imaginary parts of the expanded product are dropped, so complex roots
/// should come in conjugate pairs.
#[must_use]
pub fn poly_from_roots(roots: &[Complex64], scale: f64) -> Vec<f64> {
    // ascending while expanding
    let mut coeffs = vec![Complex64::new(scale, 0.0)];
    for r in roots {
        let mut next = vec![Complex64::zero(); coeffs.len() + 1];
        for (i, c) in coeffs.iter().enumerate() {
            next[i] -= r * c;
            next[i + 1] += *c;
        }
        coeffs = next;
    }
    coeffs.into_iter().rev().map(|c| c.re).collect_vec()
}

/// Generate one test case where the real roots are known and can be compared.
///
/// Returns descending coefficients and the roots.
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = f64>,
    scale: f64,
    degree: usize,
) -> (Vec<f64>, Vec<Complex64>) {
    let roots = roots_stream
        .take(degree)
        .map(|r| Complex::new(r, 0.0))
        .collect_vec();
    (poly_from_roots(&roots, scale), roots)
}

/// Generate one test case made of conjugate pairs, plus one real root if
/// `degree` is odd.
pub fn test_case_conj_roots(
    mut roots_stream: impl Iterator<Item = Complex64>,
    scale: f64,
    degree: usize,
) -> (Vec<f64>, Vec<Complex64>) {
    let mut roots = roots_stream
        .by_ref()
        .take(degree / 2)
        .flat_map(|c| [c, c.conj()])
        .collect_vec();
    if degree % 2 == 1 {
        roots.extend(roots_stream.next().map(|c| Complex::new(c.re, 0.0)));
    }
    (poly_from_roots(&roots, scale), roots)
}

/// Roots sorted by real part first, then imaginary part
#[must_use]
pub fn sorted(mut roots: Vec<Complex64>) -> Vec<Complex64> {
    complex_sort_mut(&mut roots);
    roots
}

/// Check that all roots have been found
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, mut roots2: Vec<Complex64>, tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}
