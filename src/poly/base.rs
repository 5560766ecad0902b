use std::hash::{Hash, Hasher};

use num::Float;

use crate::{Poly, RealScalar};

impl<T: RealScalar> Poly<T> {
    /// Coefficients in ascending order of degree
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// The variable name used when printing
    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Change the variable name used when printing. This is the only mutation
    /// a polynomial allows, and it does not affect equality.
    pub fn set_var(&mut self, var: impl Into<String>) {
        self.var = var.into();
    }

    /// Moving version of [`Poly::set_var`]
    #[must_use]
    pub fn named(mut self, var: impl Into<String>) -> Self {
        self.set_var(var);
        self
    }

    /// Degree of the polynomial. The zero polynomial has degree 0.
    #[must_use]
    pub fn degree(&self) -> usize {
        debug_assert!(self.is_normalized());
        self.degree_raw()
    }

    /// Number of coefficients, i.e. `degree + 1`
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        debug_assert!(self.is_normalized());
        self.len_raw()
    }

    /// The coefficient of the highest degree term
    #[must_use]
    pub fn leading_coeff(&self) -> T {
        debug_assert!(self.is_normalized());
        self.last()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.coeffs
    }
}

impl<T: RealScalar> PartialEq for Poly<T> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

// NaN coefficients break reflexivity, same as for the floats themselves
impl<T: RealScalar> Eq for Poly<T> {}

impl<T: RealScalar> Hash for Poly<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coeffs.len().hash(state);
        for c in &self.coeffs {
            // 0.0 == -0.0, so they must hash alike
            let c = if c.is_zero() { T::zero() } else { *c };
            Float::integer_decode(c).hash(state);
        }
    }
}

/// A polynomial equals a scalar if it is the constant polynomial with that
/// value.
///
/// ```
/// use real_poly::poly;
///
/// assert!(poly![5.0] == 5.0);
/// assert!(poly![5.0, 1.0] != 5.0);
/// assert!(5.0_f64 == poly![5.0]);
/// ```
impl<T: RealScalar> PartialEq<T> for Poly<T> {
    fn eq(&self, other: &T) -> bool {
        self.is_constant() && self.coeffs[0] == *other
    }
}

macro_rules! impl_scalar_eq {
    ($($t:ty),+) => {
        $(
            impl PartialEq<Poly<$t>> for $t {
                fn eq(&self, other: &Poly<$t>) -> bool {
                    other == self
                }
            }
        )+
    };
}

impl_scalar_eq!(f32, f64);

#[cfg(test)]
mod test {
    use std::collections::{hash_map::DefaultHasher, HashSet};
    use std::hash::{Hash, Hasher};

    use crate::{Poly, Poly64};

    fn hash_of(p: &Poly64) -> u64 {
        let mut h = DefaultHasher::new();
        p.hash(&mut h);
        h.finish()
    }

    #[test]
    fn equality_ignores_var() {
        let p = Poly::with_var(&[1.0, 2.0], "x");
        let q = Poly::with_var(&[1.0, 2.0], "y");
        assert_eq!(p, q);
        assert_eq!(hash_of(&p), hash_of(&q));
    }

    #[test]
    fn signed_zero_hash() {
        let p = poly![0.0, 1.0];
        let q = poly![-0.0, 1.0];
        assert_eq!(p, q);
        assert_eq!(hash_of(&p), hash_of(&q));
    }

    #[test]
    fn hash_set() {
        let set: HashSet<Poly64> = [poly![1.0, 2.0], poly![1.0, 2.0, 0.0], poly![2.0]]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&poly![2.0]));
    }

    #[test]
    fn scalar_eq() {
        assert!(poly![5.0] == 5.0);
        assert!(poly![5.0, 1.0] != 5.0);
        assert!(Poly64::zero() == 0.0);
        assert!(2.0f32 == Poly::new(&[2.0f32]));
    }

    #[test]
    fn set_var() {
        let mut p = poly![1.0, 1.0];
        assert_eq!(p.var(), "x");
        p.set_var("z");
        assert_eq!(p.var(), "z");
        assert_eq!(p.to_string(), "1 + z");
        assert_eq!(p, poly![1.0, 1.0]);
        assert_eq!(poly![0.0, 3.0].named("q").to_string(), "3q");
    }

    #[test]
    fn degree_and_len() {
        assert_eq!(Poly64::zero().degree(), 0);
        assert_eq!(Poly64::zero().len(), 1);
        let p = poly![1.0, 0.0, 2.0];
        assert_eq!(p.degree(), 2);
        assert_eq!(p.len(), 3);
        assert_eq!(p.leading_coeff(), 2.0);
        assert_eq!(p.into_vec(), vec![1.0, 0.0, 2.0]);
    }
}
