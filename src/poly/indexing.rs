use std::ops::Index;

use crate::Polynomial;

impl Index<usize> for Polynomial {
    type Output = f64;

    /// Coefficient of the term of degree `idx`
    fn index(&self, idx: usize) -> &Self::Output {
        &self.0[idx]
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
