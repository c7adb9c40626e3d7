//! Root finding for single-variable real functions and low-degree polynomials.
//!
//! Two families of solvers live here:
//!
//! - [`Equation`] wraps an arbitrary scalar function (usually a parsed
//!   expression) and finds one real root with Newton's method, Newton's
//!   method with a known multiplicity, or the secant method. Derivatives are
//!   approximated with a forward difference.
//! - [`Quadratic`], [`Cubic`] and [`Quartic`] compute all complex roots of a
//!   polynomial of degree 2, 3 or 4 in closed form.
//!
//! ```
//! use equation_solver::{Algorithm, Equation};
//!
//! let mut eq = Equation::new("x^2 - 2").unwrap();
//! let solution = eq
//!     .solve_equation(Algorithm::Newton, &[1.0, 1E-10, 20.0], false)
//!     .unwrap();
//! assert!((solution.root - 2f64.sqrt()).abs() < 1E-9);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub use num;

/// Shorthand for building a [`num::Complex<f64>`], mostly useful in tests.
///
/// ```
/// # use equation_solver::complex;
/// use num::Complex;
///
/// assert_eq!(complex!(1.0), Complex::new(1.0, 0.0));
/// assert_eq!(complex!(1.0, -2.0), Complex::new(1.0, -2.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::num::Complex::<f64>::new($re, 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::num::Complex::<f64>::new($re, $im)
    };
}

mod error;
pub use error::{Error, Result};

mod util;
// re-exported for integration tests and benches, not part of the API
#[doc(hidden)]
pub use util::__testing;

mod poly;
pub use poly::Polynomial;

mod function;
pub use function::{ExpressionFunction, ScalarFunction};

pub mod equation;
pub use equation::{
    Algorithm, Equation, EquationBuilder, ForwardDifference, Solution, DEFAULT_MAX_ITER,
    DEFAULT_STEP, DEFAULT_TOLERANCE,
};

pub mod roots;
pub use roots::{
    Cubic, PolyAlgorithm, PolyBase, PolyEquation, PolyResult, PolynomialRootSolver, Quadratic,
    Quartic,
};
