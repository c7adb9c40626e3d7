//! Macros for reducing doc comment boilerplate.

/// Documents [`Error::InvalidParameterCount`](crate::Error::InvalidParameterCount) errors.
macro_rules! errors_parameter_count {
    () => {
        r"- `InvalidParameterCount`: the parameter slice does not have exactly the number of entries the algorithm expects.
"
    };
}
pub(crate) use errors_parameter_count;

/// Documents [`Error::ZeroDerivative`](crate::Error::ZeroDerivative) errors.
macro_rules! errors_zero_derivative {
    () => {
        r"- `ZeroDerivative`: the forward difference evaluated to exactly zero at the current iterate.
"
    };
}
pub(crate) use errors_zero_derivative;

/// Documents [`Error::InvalidCoefficients`](crate::Error::InvalidCoefficients) errors.
macro_rules! errors_invalid_coefficients {
    () => {
        r"- `InvalidCoefficients`: the leading coefficient is zero.
"
    };
}
pub(crate) use errors_invalid_coefficients;
