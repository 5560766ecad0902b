use std::ops::Index;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Coefficient of the term of the given degree, `None` if the degree is
    /// above the degree of the polynomial
    #[must_use]
    pub fn get(&self, degree: usize) -> Option<T> {
        debug_assert!(self.is_normalized());
        self.coeffs.get(degree).copied()
    }

    /// Coefficient of the term of the given degree, zero above the degree of
    /// the polynomial
    #[must_use]
    pub fn coeff(&self, degree: usize) -> T {
        self.get(degree).unwrap_or_else(T::zero)
    }

    /// The term of the given degree as a new polynomial
    ///
    /// ```
    /// use real_poly::poly;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.get_term(1).unwrap(), poly![0.0, 2.0]);
    /// assert!(p.get_term(3).is_none());
    /// ```
    #[must_use]
    pub fn get_term(&self, degree: usize) -> Option<Self> {
        let coeff = self.get(degree)?;
        Some(Self::term(coeff, degree).named(self.var.clone()))
    }
}

impl<T: RealScalar> Index<usize> for Poly<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coeffs[index]
    }
}
