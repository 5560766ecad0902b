//! Exploratory tests which check algebraic laws on randomized test cases

use fastrand::Rng;
use real_poly::__testing::{check_almost_equal, PolyStream, RandStreamInt64, RandStreamR64};
use real_poly::{Poly, Poly64};

const ITER: usize = 500;

/// Polynomials with small integer coefficients, where every law holds exactly
fn int_polys(seed: u64, max_degree: usize) -> PolyStream {
    let mut seed_stream = Rng::with_seed(seed);
    PolyStream::new(
        seed_stream.u64(..),
        max_degree,
        RandStreamInt64::new(seed_stream.u64(..), -9, 9),
    )
}

fn real_polys(seed: u64, max_degree: usize) -> PolyStream {
    let mut seed_stream = Rng::with_seed(seed);
    PolyStream::new(
        seed_stream.u64(..),
        max_degree,
        RandStreamR64::new(seed_stream.u64(..), -10.0, 10.0),
    )
}

#[test]
fn add_commutes() {
    let mut lhs = int_polys(1, 6);
    let mut rhs = int_polys(2, 6);
    for _ in 0..ITER {
        let (p, q) = (lhs.next().unwrap(), rhs.next().unwrap());
        assert_eq!(&p + &q, &q + &p);
        assert_eq!(&p + Poly64::zero(), p);
        assert_eq!(&p - &p, Poly::zero());
    }
}

#[test]
fn add_associates() {
    let mut stream = int_polys(3, 5);
    for _ in 0..ITER {
        let (p, q, r) = (
            stream.next().unwrap(),
            stream.next().unwrap(),
            stream.next().unwrap(),
        );
        assert_eq!((&p + &q) + &r, &p + (&q + &r));
    }
}

#[test]
fn mul_commutes_and_distributes() {
    let mut stream = int_polys(4, 5);
    for _ in 0..ITER {
        let (p, q, r) = (
            stream.next().unwrap(),
            stream.next().unwrap(),
            stream.next().unwrap(),
        );
        assert_eq!(&p * &q, &q * &p);
        assert_eq!(&p * (&q + &r), &p * &q + &p * &r);
        assert_eq!((&p * &q) * &r, &p * (&q * &r));
        if !p.is_zero() && !q.is_zero() {
            assert_eq!((&p * &q).degree(), p.degree() + q.degree());
        }
    }
}

#[test]
fn eval_is_a_ring_homomorphism() {
    let mut stream = int_polys(5, 4);
    let mut points = RandStreamInt64::new(6, -3, 3);
    for _ in 0..ITER {
        let (p, q) = (stream.next().unwrap(), stream.next().unwrap());
        let x = points.next().unwrap();
        assert_eq!((&p + &q).eval(x), p.eval(x) + q.eval(x));
        assert_eq!((&p * &q).eval(x), p.eval(x) * q.eval(x));
        assert_eq!(p.compose(&q).eval(x), p.eval(q.eval(x)));
    }
}

#[test]
fn pow_is_repeated_mul() {
    let mut stream = int_polys(7, 3);
    for _ in 0..ITER / 5 {
        let p = stream.next().unwrap();
        assert_eq!(p.pow(0), Poly::one());
        assert_eq!(p.pow(1), p);
        assert_eq!(p.pow(3), &p * &p * &p);
    }
}

#[test]
fn integral_derivative_round_trip() {
    let mut stream = real_polys(8, 8);
    for _ in 0..ITER {
        let p = stream.next().unwrap();
        let q = p.integral().derivative();
        assert!(check_almost_equal(&p, &q, 1E-12), "{p:?} != {q:?}");
        assert_eq!(p.integral().len(), p.len() + usize::from(!p.is_zero()));
    }
}

#[test]
fn display_parse_round_trip() {
    let mut stream = int_polys(9, 6);
    for _ in 0..ITER {
        let p = stream.next().unwrap();
        let q = Poly64::from_string(&p.to_string()).unwrap();
        assert_eq!(p, q, "{p}");
    }
}

#[test]
fn roots_are_roots() {
    let mut seed_stream = Rng::with_seed(10);
    let mut roots_stream = RandStreamInt64::new(seed_stream.u64(..), -5, 5);
    for _ in 0..ITER {
        let degree = seed_stream.usize(0..6);
        let roots: Vec<f64> = roots_stream.by_ref().take(degree).collect();
        let p = Poly::from_roots(&roots);
        assert_eq!(p.degree(), degree);
        assert_eq!(p.leading_coeff(), 1.0);
        for r in roots {
            assert_eq!(p.eval(r), 0.0);
        }
    }
}
