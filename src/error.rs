use thiserror::Error;

use crate::equation::Algorithm;

/// The top-level error type for this crate.
///
/// Every error aborts the current computation, no partial results are kept.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The highest degree coefficient of a polynomial was zero, or no
    /// coefficients were given at all.
    #[error("the highest degree coefficient cannot be zero")]
    InvalidCoefficients,

    #[error(
        "{algorithm} expects {expected} parameters ({}), got {found}",
        .algorithm.parameter_names().join(", ")
    )]
    InvalidParameterCount {
        algorithm: Algorithm,
        expected: usize,
        found: usize,
    },

    /// The forward difference evaluated to exactly zero
    #[error("found f'(x) = 0 at x = {x}")]
    ZeroDerivative { x: f64 },

    /// Two consecutive secant iterates have the same function value
    #[error("secant denominator is zero at x = {x}")]
    ZeroDenominator { x: f64 },

    #[error("could not parse expression `{expression}`")]
    Parse {
        expression: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn parse(expression: &str, source: impl Into<anyhow::Error>) -> Self {
        Self::Parse {
            expression: expression.to_owned(),
            source: source.into(),
        }
    }
}
