//! floating point utilities for random test inputs

/// Clamp infinities to the finite range and flush NaN and subnormals to zero.
pub(crate) fn f64_make_normal(x: f64) -> f64 {
    if x.is_nan() || x.is_subnormal() {
        0.0
    } else if x.is_infinite() {
        f64::MAX.copysign(x)
    } else {
        x
    }
}

/// Like [`f64_make_normal`], but zero becomes `MIN_POSITIVE` with the same
/// sign, so the result can always be divided by.
pub(crate) fn f64_make_nonzero(x: f64) -> f64 {
    let x = f64_make_normal(x);
    if x.abs() < f64::MIN_POSITIVE {
        return f64::MIN_POSITIVE.copysign(x);
    }
    x
}
