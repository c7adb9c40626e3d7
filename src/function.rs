//! The boundary between the solvers and whatever produces function values.

use evalexpr::{
    build_operator_tree, ContextWithMutableVariables, HashMapContext, Node, Operator, Value,
};

use crate::{util::casting::i64_to_f64, Error, Result};

/// Real functions evalexpr provides under the `math::` namespace
const MATH_FUNCTIONS: [&str; 24] = [
    "ln", "log", "log2", "log10", "exp", "exp2", "pow", "cos", "acos", "cosh", "acosh", "sin",
    "asin", "sinh", "asinh", "tan", "atan", "tanh", "atanh", "atan2", "sqrt", "cbrt", "hypot",
    "abs",
];

/// Real functions evalexpr provides without a namespace
const BARE_FUNCTIONS: [&str; 5] = ["floor", "round", "ceil", "min", "max"];

/// A real function of one real variable.
///
/// Implemented for every `Fn(f64) -> f64` and for [`ExpressionFunction`].
pub trait ScalarFunction {
    fn evaluate(&self, x: f64) -> f64;
}

impl<F: Fn(f64) -> f64> ScalarFunction for F {
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A parsed mathematical expression in a single variable.
///
/// ```
/// use equation_solver::{ExpressionFunction, ScalarFunction};
///
/// let f = ExpressionFunction::parse("x^2 - 2*x", "x").unwrap();
/// assert_eq!(f.evaluate(3.0), 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionFunction {
    tree: Node,
    variable: String,
}

impl ExpressionFunction {
    /// Parse `expression`, treating `variable` as the only free identifier.
    ///
    /// Integer literals are read as reals, so `1/2` is `0.5`. Math functions
    /// may be written with or without the `math::` prefix (`sin(x)`,
    /// `math::sin(x)`), plus `floor`, `round`, `ceil`, `min` and `max`.
    ///
    /// # Errors
    /// - `Parse`: the expression is malformed, references an identifier other
    ///   than `variable`, or calls a function outside the list above.
    pub fn parse(expression: &str, variable: &str) -> Result<Self> {
        let mut tree =
            build_operator_tree(expression).map_err(|e| Error::parse(expression, e))?;

        if let Some(unknown) = tree
            .iter_variable_identifiers()
            .find(|ident| *ident != variable)
        {
            return Err(Error::parse(
                expression,
                anyhow::anyhow!("unknown identifier `{unknown}`, expected only `{variable}`"),
            ));
        }

        for ident in tree.iter_function_identifiers_mut() {
            match resolve_function(ident) {
                Some(resolved) => *ident = resolved,
                None => {
                    return Err(Error::parse(
                        expression,
                        anyhow::anyhow!("unknown function `{ident}`"),
                    ))
                }
            }
        }
        promote_integers(&mut tree);

        log::debug!("parsed {{expression: \"{expression}\", variable: \"{variable}\"}}");
        Ok(Self {
            tree,
            variable: variable.to_owned(),
        })
    }

    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

fn resolve_function(ident: &str) -> Option<String> {
    let name = ident.strip_prefix("math::").unwrap_or(ident);
    if MATH_FUNCTIONS.contains(&name) {
        Some(format!("math::{name}"))
    } else if BARE_FUNCTIONS.contains(&ident) {
        Some(ident.to_owned())
    } else {
        None
    }
}

/// Replace every integer constant with the equivalent float, so that
/// arithmetic never truncates.
fn promote_integers(tree: &mut Node) {
    for operator in tree.iter_operators_mut() {
        if let Operator::Const { value } = operator {
            if let Value::Int(i) = *value {
                *value = Value::Float(i64_to_f64(i));
            }
        }
    }
}

impl ScalarFunction for ExpressionFunction {
    /// Evaluates the expression with the variable bound to `x`.
    ///
    /// Expressions that parse but cannot be evaluated as a number (e.g.
    /// `x > 1`) yield NaN.
    fn evaluate(&self, x: f64) -> f64 {
        let mut context = HashMapContext::new();
        let result = context
            .set_value(self.variable.clone(), Value::Float(x))
            .and_then(|()| self.tree.eval_number_with_context(&context));
        match result {
            Ok(y) => y,
            Err(e) => {
                log::warn!("evaluation failed {{x: {x}, error: \"{e}\"}}");
                f64::NAN
            }
        }
    }
}
