use super::{parameters, Algorithm, Guesses};
use crate::{
    equation::{ForwardDifference, Solution},
    util::{
        casting::{f64_to_i32, f64_to_usize},
        doc_macros::{errors_parameter_count, errors_zero_derivative},
    },
    Error, Result, ScalarFunction,
};

/// Find a single root using Newton's method.
///
/// Parameters are `[initial guess, tolerance, max iterations]`. Iteration
/// stops once a step is smaller than the tolerance or the iteration cap is
/// reached. The residual is `f(root)`.
///
/// ```
/// use equation_solver::{equation::newton, ForwardDifference};
///
/// let f = |x: f64| x * x - 2.0;
/// let solution = newton(&f, &ForwardDifference::default(), &[1.0, 1E-10, 20.0], true).unwrap();
/// assert!((solution.root - 2f64.sqrt()).abs() < 1E-9);
/// assert_eq!(solution.guesses[0], 1.0);
/// ```
///
/// # Errors
#[doc = errors_parameter_count!()]
#[doc = errors_zero_derivative!()]
pub fn newton(
    f: &dyn ScalarFunction,
    differentiation: &ForwardDifference,
    params: &[f64],
    record_guesses: bool,
) -> Result<Solution> {
    let [guess, tolerance, max_iter] = parameters(Algorithm::Newton, params)?;
    newton_inner(
        f,
        differentiation,
        guess,
        tolerance,
        f64_to_usize(max_iter),
        1.0,
        record_guesses,
    )
}

/// Newton's method for a root of known multiplicity `r`.
///
/// Parameters are `[initial guess, tolerance, max iterations, multiplicity]`,
/// the multiplicity is truncated to an integer. Each step is scaled by `r`,
/// which restores quadratic convergence on roots of multiplicity `r`.
///
/// # Errors
#[doc = errors_parameter_count!()]
#[doc = errors_zero_derivative!()]
pub fn newton_with_multiplicity(
    f: &dyn ScalarFunction,
    differentiation: &ForwardDifference,
    params: &[f64],
    record_guesses: bool,
) -> Result<Solution> {
    let [guess, tolerance, max_iter, multiplicity] =
        parameters(Algorithm::NewtonWithMultiplicity, params)?;
    newton_inner(
        f,
        differentiation,
        guess,
        tolerance,
        f64_to_usize(max_iter),
        f64::from(f64_to_i32(multiplicity)),
        record_guesses,
    )
}

fn newton_inner(
    f: &dyn ScalarFunction,
    differentiation: &ForwardDifference,
    guess: f64,
    tolerance: f64,
    max_iter: usize,
    multiplicity: f64,
    record_guesses: bool,
) -> Result<Solution> {
    log::trace!("starting with arguments: {{guess: {guess}, tolerance: {tolerance}, max_iter: {max_iter}, multiplicity: {multiplicity}}}");

    let mut x = guess;
    let mut guesses = Guesses::new(record_guesses, max_iter, x);

    // forces at least one step
    let mut diff = tolerance + 1.0;
    let mut i = 0;
    while diff >= tolerance && i < max_iter {
        let pdx = differentiation.derivative(f, x);
        if pdx == 0.0 {
            log::debug!("stopping because f'(x) = 0 {{x: {x}, iteration: {i}}}");
            return Err(Error::ZeroDerivative { x });
        }

        let step = -multiplicity * (f.evaluate(x) / pdx);
        x += step;
        guesses.push(x);
        log::trace!("step {{iteration: {i}, x: {x}, step: {step}}}");

        diff = step.abs();
        i += 1;
    }

    if i == max_iter && diff >= tolerance {
        log::debug!("stopping at max_iter {{x: {x}, last_step: {diff}}}");
    }

    Ok(Solution::new(x, f.evaluate(x), guesses.finish()))
}
