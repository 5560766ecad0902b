//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::{EitherOrBoth, Itertools};

use crate::Poly64;

use super::float::f64_make_nonzero;

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        // NOTE: I think fastrand::f64 does not emit subnormals, but just in case
        Some(f64_make_nonzero(self.state.f64()))
    }
}

/// Endless stream of uniformly distributed reals in `[min, max)`
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        let real_stream = RandStreamF64::new(seed);
        Self {
            real_stream,
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.real_stream.next()?).mul_add(self.max - self.min, self.min))
    }
}

/// Endless stream of small integers in `[min, max]` as floats, handy when the
/// arithmetic under test should be exact
pub struct RandStreamInt64 {
    state: Rng,
    min: i32,
    max: i32,
}

impl RandStreamInt64 {
    #[must_use]
    pub fn new(seed: u64, min: i32, max: i32) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            state: Rng::with_seed(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamInt64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(f64::from(self.state.i32(self.min..=self.max)))
    }
}

/// Endless stream of polynomials of degree up to `max_degree`, with
/// coefficients drawn from `coeff_stream`
pub struct PolyStream {
    degree_rng: Rng,
    max_degree: usize,
    coeff_stream: Box<dyn Iterator<Item = f64>>,
}

impl PolyStream {
    pub fn new(
        seed: u64,
        max_degree: usize,
        coeff_stream: impl Iterator<Item = f64> + 'static,
    ) -> Self {
        Self {
            degree_rng: Rng::with_seed(seed),
            max_degree,
            coeff_stream: Box::new(coeff_stream),
        }
    }
}

impl Iterator for PolyStream {
    type Item = Poly64;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.degree_rng.usize(0..=self.max_degree) + 1;
        let coeffs = self.coeff_stream.by_ref().take(len).collect_vec();
        if coeffs.len() < len {
            return None;
        }
        Some(Poly64::from_vec(coeffs))
    }
}

/// Check that two polynomials have the same coefficients up to an absolute
/// tolerance. Missing coefficients count as zero.
#[must_use]
pub fn check_almost_equal(p1: &Poly64, p2: &Poly64, tol: f64) -> bool {
    p1.iter().zip_longest(p2.iter()).all(|pair| match pair {
        EitherOrBoth::Both(a, b) => (a - b).abs() <= tol,
        EitherOrBoth::Left(c) | EitherOrBoth::Right(c) => c.abs() <= tol,
    })
}

#[cfg(test)]
mod test {
    use super::{check_almost_equal, PolyStream, RandStreamInt64, RandStreamR64};

    #[test]
    fn streams_are_seeded() {
        let a: Vec<f64> = RandStreamR64::new(7, -1.0, 1.0).take(5).collect();
        let b: Vec<f64> = RandStreamR64::new(7, -1.0, 1.0).take(5).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|x| (-1.0..1.0).contains(x)));
    }

    #[test]
    fn poly_stream_respects_degree() {
        let polys = PolyStream::new(1, 4, RandStreamInt64::new(2, 1, 9));
        for p in polys.take(50) {
            assert!(p.degree() <= 4);
        }
    }

    #[test]
    fn almost_equal() {
        assert!(check_almost_equal(&poly![1.0, 2.0], &poly![1.0, 2.0 + 1e-12], 1e-9));
        assert!(!check_almost_equal(&poly![1.0, 2.0], &poly![1.0, 2.1], 1e-9));
        assert!(!check_almost_equal(&poly![1.0], &poly![1.0, 1.0], 1e-9));
    }
}
