use super::{parameters, Algorithm, Guesses};
use crate::{
    equation::{ForwardDifference, Solution},
    util::{casting::f64_to_usize, doc_macros::errors_parameter_count},
    Error, Result, ScalarFunction,
};

/// Find a single root using the secant method.
///
/// Parameters are `[first guess, second guess, tolerance, max iterations]`.
/// The iteration count includes the two starting points, so at most
/// `max iterations - 1` steps are taken. Recorded guesses start at the second
/// guess.
///
/// The residual is evaluated at the iterate *before* the returned root.
///
/// ```
/// use equation_solver::{equation::secant, ForwardDifference};
///
/// let f = |x: f64| x.powi(3) - x - 2.0;
/// let solution = secant(&f, &ForwardDifference::default(), &[1.0, 2.0, 1E-10, 20.0], false).unwrap();
/// assert!((solution.root - 1.521_379_7).abs() < 1E-7);
/// ```
///
/// # Errors
#[doc = errors_parameter_count!()]
/// - `ZeroDenominator`: the two most recent iterates have the same function value.
pub fn secant(
    f: &dyn ScalarFunction,
    _differentiation: &ForwardDifference,
    params: &[f64],
    record_guesses: bool,
) -> Result<Solution> {
    let [first, second, tolerance, max_iter] = parameters(Algorithm::Secant, params)?;
    let max_iter = f64_to_usize(max_iter);
    log::trace!("starting with arguments: {{guesses: [{first}, {second}], tolerance: {tolerance}, max_iter: {max_iter}}}");

    let mut x_old = first;
    let mut x = second;
    let mut guesses = Guesses::new(record_guesses, max_iter, x);

    let mut px_old = f.evaluate(x_old);
    let mut px = f.evaluate(x);

    // forces at least one step
    let mut diff = tolerance + 1.0;
    let mut i = 1;
    while diff >= tolerance && i < max_iter {
        let den = px - px_old;
        if den == 0.0 {
            log::debug!("stopping because f(x) = f(x_old) {{x: {x}, x_old: {x_old}, iteration: {i}}}");
            return Err(Error::ZeroDenominator { x });
        }

        let step = -(px * (x - x_old)) / den;
        x_old = x;
        px_old = px;
        x += step;
        diff = step.abs();
        i += 1;

        guesses.push(x);
        log::trace!("step {{iteration: {i}, x: {x}, step: {step}}}");

        px = f.evaluate(x);
    }

    Ok(Solution::new(x, f.evaluate(x_old), guesses.finish()))
}
