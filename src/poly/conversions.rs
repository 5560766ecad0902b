use crate::{Poly, RealScalar, DEFAULT_VAR};

impl<T: RealScalar> Poly<T> {
    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coeffs.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.coeffs.clone()
    }

    /// The same as `Poly::new()`, but takes ownership of the coefficients
    #[must_use]
    pub fn from_vec(coeffs: Vec<T>) -> Self {
        Self::from_parts(coeffs, DEFAULT_VAR.to_owned())
    }

    #[must_use]
    pub fn from_iterator(coeffs: impl Iterator<Item = T>) -> Self {
        Self::from_vec(coeffs.collect())
    }
}

impl<T: RealScalar> From<&[T]> for Poly<T> {
    fn from(value: &[T]) -> Self {
        Self::new(value)
    }
}

impl<T: RealScalar> From<Vec<T>> for Poly<T> {
    fn from(value: Vec<T>) -> Self {
        Self::from_vec(value)
    }
}

impl<T: RealScalar> From<Poly<T>> for Vec<T> {
    fn from(val: Poly<T>) -> Self {
        val.into_vec()
    }
}

impl<T: RealScalar> FromIterator<T> for Poly<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iterator(iter.into_iter())
    }
}

impl<'a, T: RealScalar> IntoIterator for &'a Poly<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use crate::{Poly, Poly64};

    #[test]
    fn from_vec_normalizes() {
        assert_eq!(Poly::from_vec(vec![1.0, 2.0, 0.0]).coeffs(), &[1.0, 2.0]);
        assert_eq!(Poly64::from_vec(vec![]), Poly::zero());
    }

    #[test]
    fn conversions() {
        let p: Poly64 = vec![0.0, 1.0].into();
        assert_eq!(p, poly![0.0, 1.0]);
        let q = Poly::from(&[3.0, 0.0][..]);
        assert_eq!(q, poly![3.0]);
        let v: Vec<f64> = poly![1.0, 2.0].into();
        assert_eq!(v, vec![1.0, 2.0]);
        let r: Poly64 = [1.0, 2.0, 3.0].into_iter().collect();
        assert_eq!(r, poly![1.0, 2.0, 3.0]);
    }

    #[test]
    fn iter() {
        let p = poly![1.0, 2.0, 3.0];
        assert_eq!(p.iter().sum::<f64>(), 6.0);
        assert_eq!((&p).into_iter().count(), 3);
        assert_eq!(p.to_vec(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn clone_is_independent() {
        let mut p = poly![1.0, 2.0];
        let q = p.clone();
        p.set_var("y");
        assert_eq!(q.var(), "x");
        assert_eq!(p, q);
    }
}
