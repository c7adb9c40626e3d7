use crate::{util::casting::usize_to_f64, Polynomial};

impl Polynomial {
    /// Derivative
    ///
    /// ```
    /// use equation_solver::Polynomial;
    ///
    /// let p = Polynomial::new(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(p.derivative().as_slice(), &[2.0, 6.0]);
    /// ```
    #[must_use]
    pub fn derivative(&self) -> Self {
        // derivative of constant is zero
        if self.degree_raw() == 0 {
            return Self::zero();
        }

        let coeffs: Vec<_> = self
            .iter()
            .enumerate()
            .skip(1) // shift degrees down
            .map(|(n, c)| c * usize_to_f64(n))
            .collect();
        Self(coeffs)
    }
}

#[cfg(test)]
mod test {
    use crate::Polynomial;

    fn diff(coeffs: &[f64]) -> Vec<f64> {
        Polynomial::new(coeffs).unwrap().derivative().to_vec()
    }

    #[test]
    fn degree_0() {
        assert_eq!(diff(&[7.0]), vec![0.0]);
    }

    #[test]
    fn degree_1() {
        assert_eq!(diff(&[7.0, -3.0]), vec![-3.0]);
    }

    #[test]
    fn degree_2() {
        assert_eq!(diff(&[1.0, 2.0, 3.0]), vec![2.0, 6.0]);
    }

    #[test]
    fn degree_3() {
        assert_eq!(diff(&[1.0, 2.0, 3.0, 4.0]), vec![2.0, 6.0, 12.0]);
    }

    #[test]
    fn degree_4() {
        assert_eq!(diff(&[5.0, 0.0, -1.0, 0.5, 2.0]), vec![0.0, -2.0, 1.5, 8.0]);
    }

    /// The zero polynomial is closed under differentiation
    #[test]
    fn repeated() {
        let p = Polynomial::new(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let d = p.derivative().derivative().derivative();
        assert_eq!(d.as_slice(), &[24.0]);
        assert_eq!(d.derivative().as_slice(), &[0.0]);
        assert_eq!(d.derivative().derivative().as_slice(), &[0.0]);
        assert_eq!(d.derivative().degree(), 0);
    }
}
