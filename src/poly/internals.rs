use num::Zero;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Build a polynomial from owned parts, normalizing on the way in. Every
    /// constructor funnels through here.
    pub(crate) fn from_parts(coeffs: Vec<T>, var: String) -> Self {
        Self { coeffs, var }.normalize()
    }

    /// The length of the polynomial without checking pre-conditions
    pub(crate) fn len_raw(&self) -> usize {
        self.coeffs.len()
    }

    /// The degree of the polynomial without checking pre-conditions
    #[inline]
    pub(crate) fn degree_raw(&self) -> usize {
        self.len_raw() - 1
    }

    pub(crate) fn is_normalized(&self) -> bool {
        let n = self.len_raw();
        if n == 0 {
            // zero-polynomials are stored as [0], never as []
            return false;
        }
        // a constant is always normalized, as it may be just a constant zero
        if n == 1 {
            return true;
        }
        !self.coeffs[n - 1].is_zero()
    }

    pub(crate) fn normalize(mut self) -> Self {
        if self.is_normalized() {
            return self;
        }
        let end = self
            .coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .map_or(1, |i| i + 1);
        self.coeffs.truncate(end);
        if self.coeffs.is_empty() {
            self.coeffs.push(T::zero());
        }

        // post-condition: polynomial is now normalized
        debug_assert!(self.is_normalized());
        self
    }

    /// The last coefficient
    pub(crate) fn last(&self) -> T {
        self.coeffs[self.len_raw() - 1]
    }

    /// Apply `f` to every coefficient, then re-normalize
    pub(crate) fn map_coeffs(self, f: impl FnMut(T) -> T) -> Self {
        let Self { coeffs, var } = self;
        Self::from_parts(coeffs.into_iter().map(f).collect(), var)
    }
}
