use std::time::Duration;

use super::{Equation, ForwardDifference, DEFAULT_STEP};
use crate::{ExpressionFunction, Result};

/// Configures how an [`Equation`] is parsed and differentiated.
///
/// ```
/// use equation_solver::Equation;
///
/// let eq = Equation::builder("t^2 - 4").variable("t").step(1E-8).build().unwrap();
/// assert_eq!(eq.evaluate(2.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct EquationBuilder {
    expression: String,
    variable: String,
    step: f64,
}

impl Default for EquationBuilder {
    /// The constant equation `0` in `x`
    fn default() -> Self {
        Self::new("0")
    }
}

impl EquationBuilder {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            variable: "x".to_owned(),
            step: DEFAULT_STEP,
        }
    }

    /// Name of the free variable, `x` by default.
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>) -> Self {
        self.variable = name.into();
        self
    }

    /// Step of the forward difference, [`DEFAULT_STEP`] by default.
    #[must_use]
    pub fn step(mut self, h: f64) -> Self {
        self.step = h;
        self
    }

    /// # Errors
    /// - `Parse`: the expression is malformed or uses identifiers other than
    ///   the configured variable.
    pub fn build(self) -> Result<Equation> {
        let function = ExpressionFunction::parse(&self.expression, &self.variable)?;
        Ok(Equation {
            expression: self.expression,
            function,
            differentiation: ForwardDifference::new(self.step),
            time: Duration::ZERO,
        })
    }
}
