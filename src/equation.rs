//! Iterative root finding for arbitrary scalar functions.

use std::time::{Duration, Instant};

use crate::{util::casting::usize_to_f64, ExpressionFunction, Result, ScalarFunction};

mod builder;
pub use builder::EquationBuilder;
mod differentiation;
pub use differentiation::ForwardDifference;
mod iterative;
pub use iterative::{newton, newton_with_multiplicity, secant, Algorithm, AlgorithmFn};

/// Step used by the forward difference unless configured otherwise
pub const DEFAULT_STEP: f64 = 1E-13;

/// Tolerance used by [`Equation::solve`]
pub const DEFAULT_TOLERANCE: f64 = 1E-10;

/// Iteration cap used by [`Equation::solve`]
pub const DEFAULT_MAX_ITER: usize = 20;

/// Outcome of an iterative solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Best estimate of the root
    pub root: f64,

    /// Value of the function near the root. Newton methods evaluate it at
    /// `root`, the secant method at the iterate before `root`.
    pub residual: f64,

    /// Every iterate in order, starting with the initial guess. Empty unless
    /// requested.
    pub guesses: Vec<f64>,
}

impl Solution {
    pub(crate) const fn new(root: f64, residual: f64, guesses: Vec<f64>) -> Self {
        Self {
            root,
            residual,
            guesses,
        }
    }

    /// Number of steps taken, only known if guesses were recorded
    #[must_use]
    pub fn iterations(&self) -> Option<usize> {
        self.guesses.len().checked_sub(1)
    }

    #[must_use]
    pub fn into_tuple(self) -> (f64, f64, Vec<f64>) {
        (self.root, self.residual, self.guesses)
    }
}

impl From<Solution> for (f64, f64, Vec<f64>) {
    fn from(value: Solution) -> Self {
        value.into_tuple()
    }
}

/// A single-variable equation `f(x) = 0`.
///
/// The equation can be solved any number of times with different algorithms
/// and parameters; the duration of the last successful solve is kept.
#[derive(Debug, Clone)]
pub struct Equation<F: ScalarFunction = ExpressionFunction> {
    expression: String,
    function: F,
    differentiation: ForwardDifference,
    time: Duration,
}

impl Equation {
    /// Parse an expression in the variable `x`.
    ///
    /// # Errors
    /// - `Parse`: the expression is malformed or uses other identifiers.
    pub fn new(expression: &str) -> Result<Self> {
        Self::builder(expression).build()
    }

    /// Configure the variable name and differentiation step before parsing.
    pub fn builder(expression: impl Into<String>) -> EquationBuilder {
        EquationBuilder::new(expression)
    }
}

impl<F: ScalarFunction> Equation<F> {
    /// Wrap an already callable function. `expression` is only kept for
    /// display purposes.
    ///
    /// ```
    /// use equation_solver::Equation;
    ///
    /// let mut eq = Equation::from_fn("cos(x) - x", |x: f64| x.cos() - x);
    /// let solution = eq.solve(1.0).unwrap();
    /// assert!((solution.root - 0.739_085_133).abs() < 1E-8);
    /// ```
    pub fn from_fn(expression: impl Into<String>, function: F) -> Self {
        Self {
            expression: expression.into(),
            function,
            differentiation: ForwardDifference::default(),
            time: Duration::ZERO,
        }
    }

    /// Replace the differentiation policy
    #[must_use]
    pub fn with_differentiation(mut self, differentiation: ForwardDifference) -> Self {
        self.differentiation = differentiation;
        self
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub const fn differentiation(&self) -> &ForwardDifference {
        &self.differentiation
    }

    /// Evaluate `f(x)`
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.function.evaluate(x)
    }

    /// Forward difference approximation of `f'(x)`
    #[must_use]
    pub fn evaluate_derivative(&self, x: f64) -> f64 {
        self.differentiation.derivative(&self.function, x)
    }

    /// Wall-clock duration of the last successful solve
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.time
    }

    /// Same as [`Equation::elapsed`], in whole milliseconds
    #[must_use]
    pub const fn elapsed_milliseconds(&self) -> u128 {
        self.time.as_millis()
    }

    /// Newton's method from `guess` with [`DEFAULT_TOLERANCE`] and
    /// [`DEFAULT_MAX_ITER`], without recording guesses.
    ///
    /// # Errors
    /// - `ZeroDerivative`: see [`newton`].
    pub fn solve(&mut self, guess: f64) -> Result<Solution> {
        self.solve_equation(
            Algorithm::Newton,
            &[guess, DEFAULT_TOLERANCE, usize_to_f64(DEFAULT_MAX_ITER)],
            false,
        )
    }

    /// Run `algorithm` with the given parameters, see [`Algorithm`] for the
    /// meaning of each parameter.
    ///
    /// On success the elapsed time is stored and can be read back with
    /// [`Equation::elapsed`]. A failed solve leaves the previous time in place.
    ///
    /// # Errors
    /// Any error of the selected algorithm, see [`newton`],
    /// [`newton_with_multiplicity`] and [`secant`].
    pub fn solve_equation(
        &mut self,
        algorithm: Algorithm,
        parameters: &[f64],
        record_guesses: bool,
    ) -> Result<Solution> {
        log::debug!(
            "solving {{expression: \"{}\", algorithm: \"{algorithm}\", parameters: {parameters:?}}}",
            self.expression
        );
        let start = Instant::now();
        let solution = (algorithm.function())(
            &self.function,
            &self.differentiation,
            parameters,
            record_guesses,
        )?;
        self.time = start.elapsed();
        Ok(solution)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::{Algorithm, Equation, ForwardDifference};
    use crate::Error;

    #[test]
    fn sqrt_2() {
        let mut eq = Equation::new("x^2 - 2").unwrap();
        let solution = eq
            .solve_equation(Algorithm::Newton, &[1.0, 1E-10, 20.0], false)
            .unwrap();
        assert!((solution.root - 2f64.sqrt()).abs() < 1E-9);
        assert!(solution.residual.abs() < 1E-9);
        assert!(solution.guesses.is_empty());
    }

    #[test]
    fn solve_is_default_newton() {
        let mut eq = Equation::new("x^2 - 2").unwrap();
        let a = eq.solve(1.0).unwrap();
        let b = eq
            .solve_equation(Algorithm::Newton, &[1.0, 1E-10, 20.0], false)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn multiplicity_speeds_up_double_root() {
        let mut eq = Equation::new("x * x").unwrap();
        let plain = eq
            .solve_equation(
                Algorithm::NewtonWithMultiplicity,
                &[1.0, 1E-10, 20.0, 1.0],
                true,
            )
            .unwrap();
        let double = eq
            .solve_equation(
                Algorithm::NewtonWithMultiplicity,
                &[1.0, 1E-10, 20.0, 2.0],
                true,
            )
            .unwrap();
        assert!(double.iterations().unwrap() < plain.iterations().unwrap());
        assert!(double.root.abs() < 1E-9);
    }

    #[test]
    fn secant_cubic() {
        let mut eq = Equation::new("x^3 - x - 2").unwrap();
        let solution = eq
            .solve_equation(Algorithm::Secant, &[1.0, 2.0, 1E-10, 20.0], true)
            .unwrap();
        assert!((solution.root - 1.521_379_7).abs() < 1E-7);
        assert_eq!(solution.guesses[0], 2.0);
    }

    #[test]
    fn derivative_of_square() {
        let eq = Equation::new("x^2").unwrap();
        assert!((eq.evaluate_derivative(3.0) - 6.0).abs() < 0.05);
    }

    #[test]
    fn constant_has_zero_derivative() {
        let mut eq = Equation::new("5").unwrap();
        let e = eq.solve(0.3).unwrap_err();
        assert!(matches!(e, Error::ZeroDerivative { x } if x == 0.3));
    }

    #[test]
    fn default_expression_is_zero() {
        let eq = super::EquationBuilder::default().build().unwrap();
        assert_eq!(eq.expression(), "0");
        assert_eq!(eq.evaluate(42.0), 0.0);
    }

    #[test]
    fn wrong_parameter_count() {
        let mut eq = Equation::new("x - 1").unwrap();
        for (algorithm, params) in [
            (Algorithm::Newton, vec![1.0, 1E-10]),
            (Algorithm::Newton, vec![1.0, 1E-10, 20.0, 2.0]),
            (Algorithm::NewtonWithMultiplicity, vec![1.0, 1E-10, 20.0]),
            (Algorithm::Secant, vec![0.0, 1.0, 1E-10]),
            (Algorithm::Secant, vec![]),
        ] {
            let e = eq.solve_equation(algorithm, &params, false).unwrap_err();
            assert!(
                matches!(
                    e,
                    Error::InvalidParameterCount { algorithm: a, expected, found }
                        if a == algorithm && expected == algorithm.arity() && found == params.len()
                ),
                "{e}"
            );
        }
    }

    #[test]
    fn failed_solve_keeps_time() {
        let mut eq = Equation::from_fn("slow", |x: f64| {
            std::thread::sleep(Duration::from_millis(2));
            x - 1.0
        });
        eq.solve(0.0).unwrap();
        let time = eq.elapsed();
        assert!(time >= Duration::from_millis(2));
        assert!(eq.solve_equation(Algorithm::Newton, &[0.0], false).is_err());
        assert_eq!(eq.elapsed(), time);
        assert_eq!(eq.elapsed_milliseconds(), time.as_millis());
    }

    #[test]
    fn fractional_literals() {
        let mut eq = Equation::new("x^2 - 1/4").unwrap();
        let solution = eq.solve(1.0).unwrap();
        assert!((solution.root - 0.5).abs() < 1E-9);
    }

    #[test]
    fn unknown_function_fails_early() {
        assert!(matches!(Equation::new("foo(x)"), Err(Error::Parse { .. })));
    }

    #[test]
    fn closures() {
        let mut eq = Equation::from_fn("x^2 - 2", |x: f64| x * x - 2.0);
        assert_eq!(eq.expression(), "x^2 - 2");
        assert_eq!(eq.evaluate(2.0), 2.0);
        let (root, residual, guesses) = eq.solve(1.0).unwrap().into_tuple();
        assert!((root - 2f64.sqrt()).abs() < 1E-9);
        assert!(residual.abs() < 1E-9);
        assert!(guesses.is_empty());
    }

    #[test]
    fn custom_step() {
        let eq = Equation::from_fn("x^2", |x: f64| x * x)
            .with_differentiation(ForwardDifference::new(0.5));
        assert_eq!(eq.differentiation().step(), 0.5);
        // ((3.5)^2 - 9) / 0.5
        assert_eq!(eq.evaluate_derivative(3.0), 6.5);
    }
}
