use num::cast;

/// Nearest `f64`, large counts round.
pub(crate) fn usize_to_f64(x: usize) -> f64 {
    cast(x).unwrap_or(f64::INFINITY)
}

/// Nearest `f64`, integers beyond 2^53 round.
pub(crate) fn i64_to_f64(x: i64) -> f64 {
    cast(x).unwrap_or(f64::NAN)
}

/// Truncates toward zero, saturating at the bounds of `usize`. NaN becomes zero.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub(crate) fn f64_to_usize(x: f64) -> usize {
    x as usize
}

/// Truncates toward zero, saturating at the bounds of `i32`. NaN becomes zero.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn f64_to_i32(x: f64) -> i32 {
    x as i32
}
