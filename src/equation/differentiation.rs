use super::DEFAULT_STEP;
use crate::ScalarFunction;

/// Approximates derivatives with one forward step, `(f(x + h) - f(x)) / h`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardDifference {
    step: f64,
}

impl Default for ForwardDifference {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl ForwardDifference {
    #[must_use]
    pub const fn new(step: f64) -> Self {
        Self { step }
    }

    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    pub fn derivative<F: ScalarFunction + ?Sized>(&self, f: &F, x: f64) -> f64 {
        let h = self.step;
        (f.evaluate(x + h) - f.evaluate(x)) / h
    }
}
