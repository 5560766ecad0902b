use itertools::Itertools;

use crate::{util::doc_macros::panic_absurd_size, Error, RealScalar, Result, DEFAULT_VAR};

mod base;
mod calculus;
mod conversions;
mod display;
mod impl_num;
mod indexing;
mod internals;
mod parse;

/// A univariate polynomial with real coefficients.
///
/// Coefficients are stored in ascending order of degree, so index `i` holds
/// the coefficient of `x^i`. The polynomial is always normalized: the last
/// coefficient is non-zero, unless the polynomial is the constant zero, which
/// is stored as `[0]`.
///
/// The variable name is only a display label. It takes no part in arithmetic,
/// equality or hashing.
#[derive(Clone)]
pub struct Poly<T: RealScalar> {
    pub(crate) coeffs: Vec<T>,
    pub(crate) var: String,
}

impl<T: RealScalar> Poly<T> {
    /// Create a polynomial from its coefficients, in ascending order of degree.
    ///
    /// Trailing zeros are stripped, an empty slice gives the zero polynomial.
    ///
    /// # Examples
    /// ```
    /// use real_poly::Poly;
    ///
    /// let p = Poly::new(&[1.0, 0.0, 0.0]);
    /// assert_eq!(p.coeffs(), &[1.0]);
    /// assert_eq!(p.degree(), 0);
    /// ```
    #[must_use]
    pub fn new(coeffs: &[T]) -> Self {
        Self::with_var(coeffs, DEFAULT_VAR)
    }

    /// Same as [`Poly::new`], but with a custom variable label
    ///
    /// ```
    /// use real_poly::Poly;
    ///
    /// let p = Poly::with_var(&[0.0, 2.0, -1.0], "t");
    /// assert_eq!(p.to_string(), "2t - t^2");
    /// ```
    #[must_use]
    pub fn with_var(coeffs: &[T], var: impl Into<String>) -> Self {
        Self::from_parts(coeffs.to_vec(), var.into())
    }

    /// The constant polynomial `0`
    #[must_use]
    pub fn zero() -> Self {
        Self::new(&[T::zero()])
    }

    /// The constant polynomial `1`, the multiplicative identity
    #[must_use]
    pub fn one() -> Self {
        Self::new(&[T::one()])
    }

    /// Create a polynomial from a single term (coefficient + degree)
    ///
    /// # Examples
    /// ```
    /// use real_poly::{poly, Poly};
    ///
    /// assert_eq!(Poly::term(2.0, 3), poly![0.0, 0.0, 0.0, 2.0]);
    /// assert_eq!(Poly::term(0.0, 3), Poly::zero());
    /// ```
    ///
    /// # Panics
    #[doc = panic_absurd_size!()]
    #[must_use]
    pub fn term(coeff: T, degree: usize) -> Self {
        let mut coeffs = vec![T::zero(); degree + 1];
        coeffs[degree] = coeff;
        Self::from_vec(coeffs)
    }

    /// Monic polynomial from its roots, i.e. `(x - r_1)(x - r_2)...(x - r_k)`.
    ///
    /// No roots gives the constant `1`.
    ///
    /// # Examples
    /// ```
    /// use real_poly::{poly, Poly};
    ///
    /// let p = Poly::from_roots(&[1.0, -1.0]);
    /// assert_eq!(p, poly![-1.0, 0.0, 1.0]);
    /// assert_eq!(p.eval(1.0), 0.0);
    /// assert_eq!(p.eval(-1.0), 0.0);
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[T]) -> Self {
        Self::from_roots_with_var(roots, DEFAULT_VAR)
    }

    /// Same as [`Poly::from_roots`], but with a custom variable label
    #[must_use]
    pub fn from_roots_with_var(roots: &[T], var: impl Into<String>) -> Self {
        let var = var.into();
        roots
            .iter()
            .map(|&r| Self::from_parts(vec![-r, T::one()], var.clone()))
            .fold(Self::from_parts(vec![T::one()], var.clone()), |acc, x| {
                acc * x
            })
    }

    /// Raise to a non-negative integer power by repeated multiplication.
    ///
    /// The zeroth power of any polynomial, including zero, is `1`.
    ///
    /// ```
    /// use real_poly::{poly, Poly};
    ///
    /// assert_eq!(poly![1.0, 2.0, 3.0].pow(2), poly![1.0, 4.0, 10.0, 12.0, 9.0]);
    /// assert_eq!(Poly::<f64>::zero().pow(0), Poly::one());
    /// ```
    #[must_use]
    pub fn pow(&self, pow: u32) -> Self {
        // invariant: poly is normalized
        debug_assert!(self.is_normalized());

        let mut res = Self::from_parts(vec![T::one()], self.var.clone());
        for _ in 0..pow {
            res = res * self;
        }
        res
    }

    /// Like [`Poly::pow`], but takes a signed exponent.
    ///
    /// # Errors
    /// [`Error::Domain`] if the exponent is negative or does not fit in a `u32`.
    ///
    /// ```
    /// use real_poly::{poly, Error};
    ///
    /// assert_eq!(poly![1.0, 1.0].try_pow(2).unwrap(), poly![1.0, 2.0, 1.0]);
    /// assert!(matches!(poly![1.0, 1.0].try_pow(-1), Err(Error::Domain { .. })));
    /// ```
    pub fn try_pow(&self, pow: i64) -> Result<Self> {
        if pow < 0 {
            return Err(Error::domain("cannot raise polynomial to negative power"));
        }
        let pow = u32::try_from(pow)
            .map_err(|_| Error::domain(format!("exponent {pow} is too large")))?;
        Ok(self.pow(pow))
    }

    /// Like [`Poly::pow`], but takes the exponent as a real number, which must
    /// be a non-negative integer.
    ///
    /// # Errors
    /// [`Error::Domain`] if the exponent is negative, has a fractional part,
    /// is not finite or does not fit in a `u32`.
    ///
    /// ```
    /// use real_poly::{poly, Error};
    ///
    /// assert_eq!(poly![0.0, 1.0].try_powf(3.0).unwrap(), poly![0.0, 0.0, 0.0, 1.0]);
    /// assert!(matches!(poly![0.0, 1.0].try_powf(0.5), Err(Error::Domain { .. })));
    /// ```
    pub fn try_powf(&self, pow: T) -> Result<Self> {
        if pow < T::zero() {
            return Err(Error::domain("cannot raise polynomial to negative power"));
        }
        if !pow.is_finite() || !pow.fract().is_zero() {
            return Err(Error::domain(format!(
                "cannot raise polynomial to non-integer power {pow}"
            )));
        }
        let pow = pow
            .to_u32()
            .ok_or_else(|| Error::domain(format!("exponent {pow} is too large")))?;
        Ok(self.pow(pow))
    }

    /// Compose two polynomials, returning `self(other(x))`.
    ///
    /// Substitute the given polynomial `other` into `self` and expand the
    /// result into a new polynomial.
    ///
    /// # Examples
    ///
    /// ```
    /// use real_poly::{poly, Poly};
    ///
    /// let f = poly![1.0, 0.0, 1.0];
    /// let g = poly![1.0, 1.0];
    /// assert_eq!(f.compose(&g), poly![2.0, 2.0, 1.0]);
    /// assert_eq!(f.compose(&Poly::zero()), poly![1.0]);
    /// ```
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(other.is_normalized());

        let mut power = Self::from_parts(vec![T::one()], other.var.clone());
        let mut res = Self::from_parts(vec![T::zero()], self.var.clone());
        for (i, &c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                power = power * other;
            }
            res = res + &power * c;
        }
        res
    }

    /// Evaluate the polynomial at a single value of `x`, as the sum of
    /// `c_i * x^i` over all terms in ascending order.
    ///
    /// ```
    /// use real_poly::poly;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.eval(1.0), 6.0);
    /// assert_eq!(p.eval(-2.0), 9.0);
    /// ```
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        debug_assert!(self.is_normalized());
        self.coeffs
            .iter()
            .fold((T::zero(), T::one()), |(acc, x_pow), &c| {
                (acc + c * x_pow, x_pow * x)
            })
            .0
    }

    /// Whether the polynomial has degree zero, i.e. it is a constant
    #[must_use]
    pub fn is_constant(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.is_constant() && self.coeffs[0].is_zero()
    }

    #[must_use]
    pub fn is_one(&self) -> bool {
        self.is_constant() && self.coeffs[0].is_one()
    }

    /// Terms of the polynomial as `(coefficient, degree)` pairs, skipping
    /// zero coefficients
    pub fn terms(&self) -> impl Iterator<Item = (T, usize)> + '_ {
        self.coeffs
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, c)| (c, i))
    }

    /// The coefficients as `(degree, coefficient)` pairs of non-zero terms,
    /// highest degree first. Useful for conventional descending notation.
    #[must_use]
    pub fn terms_descending(&self) -> Vec<(usize, T)> {
        self.terms().map(|(c, i)| (i, c)).sorted_by(|a, b| b.0.cmp(&a.0)).collect()
    }
}
