use std::fmt::Display;

use super::{ForwardDifference, Solution};
use crate::{Error, Result, ScalarFunction};

mod newton;
pub use newton::{newton, newton_with_multiplicity};
mod secant;
pub use secant::secant;

/// Signature shared by all iterative algorithms.
///
/// Arguments are the function, the differentiation policy, the algorithm's
/// parameters, and whether to record every iterate.
pub type AlgorithmFn =
    fn(&dyn ScalarFunction, &ForwardDifference, &[f64], bool) -> Result<Solution>;

/// Upper bound on the capacity reserved up front for recorded guesses
const MAX_RESERVED_GUESSES: usize = 1 << 16;

/// The iterative algorithms an [`Equation`](super::Equation) can run.
///
/// Each algorithm takes its parameters as a slice of `f64`, in the order given
/// by [`Algorithm::parameter_names`]. Counts are truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// `[initial guess, tolerance, max iterations]`
    Newton,

    /// `[initial guess, tolerance, max iterations, multiplicity]`
    NewtonWithMultiplicity,

    /// `[first guess, second guess, tolerance, max iterations]`
    Secant,
}

impl Algorithm {
    pub const ALL: [Self; 3] = [Self::Newton, Self::NewtonWithMultiplicity, Self::Secant];

    #[must_use]
    pub const fn parameter_names(self) -> &'static [&'static str] {
        match self {
            Self::Newton => &["initial guess", "tolerance", "max iterations"],
            Self::NewtonWithMultiplicity => &[
                "initial guess",
                "tolerance",
                "max iterations",
                "multiplicity",
            ],
            Self::Secant => &[
                "first guess",
                "second guess",
                "tolerance",
                "max iterations",
            ],
        }
    }

    /// Number of parameters the algorithm expects
    #[must_use]
    pub const fn arity(self) -> usize {
        self.parameter_names().len()
    }

    /// The function implementing this algorithm
    #[must_use]
    pub fn function(self) -> AlgorithmFn {
        match self {
            Self::Newton => newton,
            Self::NewtonWithMultiplicity => newton_with_multiplicity,
            Self::Secant => secant,
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Newton => write!(f, "newton"),
            Self::NewtonWithMultiplicity => write!(f, "newton with multiplicity"),
            Self::Secant => write!(f, "secant"),
        }
    }
}

/// Destructure a parameter slice into exactly `N` values.
fn parameters<const N: usize>(algorithm: Algorithm, params: &[f64]) -> Result<[f64; N]> {
    debug_assert_eq!(N, algorithm.arity());
    params
        .try_into()
        .map_err(|_| Error::InvalidParameterCount {
            algorithm,
            expected: N,
            found: params.len(),
        })
}

/// Storage for iterates, which stays empty unless recording was requested.
struct Guesses {
    record: bool,
    guesses: Vec<f64>,
}

impl Guesses {
    fn new(record: bool, max_iter: usize, first: f64) -> Self {
        if !record {
            return Self {
                record,
                guesses: vec![],
            };
        }
        let mut guesses = Vec::with_capacity(max_iter.min(MAX_RESERVED_GUESSES));
        guesses.push(first);
        Self { record, guesses }
    }

    fn push(&mut self, x: f64) {
        if self.record {
            self.guesses.push(x);
        }
    }

    fn finish(mut self) -> Vec<f64> {
        self.guesses.shrink_to_fit();
        self.guesses
    }
}
