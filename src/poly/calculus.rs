use itertools::chain;
use num::Zero;

use crate::{util::casting::usize_to_scalar, Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Derivative
    ///
    /// ```
    /// use real_poly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].derivative(), poly![2.0, 6.0]);
    /// assert_eq!(poly![7.0].derivative(), poly![0.0]);
    /// ```
    #[must_use]
    pub fn derivative(&self) -> Self {
        debug_assert!(self.is_normalized());

        // derivative of constant is zero
        if self.degree_raw() == 0 {
            return Self::from_parts(vec![T::zero()], self.var.clone());
        }

        let coeffs: Vec<_> = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1) // shift degrees down
            .map(|(i, &c)| usize_to_scalar::<T>(i) * c)
            .collect();
        Self::from_parts(coeffs, self.var.clone())
    }

    /// Antiderivative with a constant of integration of zero, see
    /// [`Poly::integral_with`]
    #[must_use]
    pub fn integral(&self) -> Self {
        self.integral_with(T::zero())
    }

    /// Antiderivative with the given constant of integration.
    ///
    /// Every coefficient `c_i` becomes `c_i / (i + 1)` at degree `i + 1`, so a
    /// polynomial of degree `d` integrates to one of degree `d + 1` (unless it
    /// is zero).
    ///
    /// ```
    /// use real_poly::poly;
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].integral_with(5.0), poly![5.0, 1.0, 1.0, 1.0]);
    /// assert_eq!(poly![0.0].integral_with(2.0), poly![2.0]);
    /// ```
    #[must_use]
    pub fn integral_with(&self, constant: T) -> Self {
        debug_assert!(self.is_normalized());

        let coeffs: Vec<_> = chain(
            [constant],
            self.coeffs
                .iter()
                .enumerate()
                .map(|(i, &c)| c / usize_to_scalar::<T>(i + 1)),
        )
        .collect();
        Self::from_parts(coeffs, self.var.clone())
    }
}
