#![allow(clippy::op_ref)]

// Implementation of traits related to numeric operations, operators and the
// dynamically checked counterparts of the operators

use itertools::{EitherOrBoth, Itertools};
use num::{One, Zero};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{util::linalg::convolve_1d, Error, Operand, Poly, RealScalar, Result};

impl<T: RealScalar> Poly<T> {
    /// Add a scalar or a polynomial, checking the operand at runtime.
    ///
    /// # Errors
    /// [`Error::Type`] if `other` is neither a scalar nor a polynomial.
    ///
    /// # Examples
    /// ```
    /// use real_poly::{poly, Error};
    ///
    /// let p = poly![1.0, 2.0];
    /// assert_eq!(p.checked_add(1).unwrap(), poly![2.0, 2.0]);
    /// assert_eq!(p.checked_add(&poly![0.0, 0.0, 3.0]).unwrap(), poly![1.0, 2.0, 3.0]);
    ///
    /// let err = p.checked_add("abc").unwrap_err();
    /// assert_eq!(err.to_string(), "cannot add polynomial with object of type '&str'");
    /// ```
    pub fn checked_add(&self, other: impl Into<Operand<T>>) -> Result<Self> {
        match other.into() {
            Operand::Scalar(c) => Ok(self + c),
            Operand::Poly(p) => Ok(self + p),
            Operand::Unsupported(name) => Err(Error::unsupported_operand("add", name)),
        }
    }

    /// Subtract a scalar or a polynomial, checking the operand at runtime.
    ///
    /// # Errors
    /// [`Error::Type`] if `other` is neither a scalar nor a polynomial.
    pub fn checked_sub(&self, other: impl Into<Operand<T>>) -> Result<Self> {
        match other.into() {
            Operand::Scalar(c) => Ok(self + -c),
            Operand::Poly(p) => Ok(self + -p),
            Operand::Unsupported(name) => Err(Error::unsupported_operand("subtract", name)),
        }
    }

    /// Multiply by a scalar or a polynomial, checking the operand at runtime.
    ///
    /// # Errors
    /// [`Error::Type`] if `other` is neither a scalar nor a polynomial.
    ///
    /// ```
    /// use real_poly::poly;
    ///
    /// let p = poly![1.0, 1.0];
    /// assert_eq!(p.checked_mul(&p).unwrap(), poly![1.0, 2.0, 1.0]);
    /// assert_eq!(p.checked_mul(-2).unwrap(), poly![-2.0, -2.0]);
    /// assert!(p.checked_mul('x').is_err());
    /// ```
    pub fn checked_mul(&self, other: impl Into<Operand<T>>) -> Result<Self> {
        match other.into() {
            Operand::Scalar(c) => Ok(self * c),
            Operand::Poly(p) => Ok(self * p),
            Operand::Unsupported(name) => Err(Error::unsupported_operand("multiply", name)),
        }
    }

    /// Divide by a scalar, checking the operand at runtime.
    ///
    /// Division by a zero scalar follows floating point semantics and yields
    /// infinite or `NaN` coefficients.
    ///
    /// # Errors
    /// [`Error::Type`] if `other` is not a scalar. Dividing by a polynomial is
    /// not supported.
    ///
    /// ```
    /// use real_poly::poly;
    ///
    /// let p = poly![2.0, 4.0];
    /// assert_eq!(p.checked_div(2).unwrap(), poly![1.0, 2.0]);
    /// assert!(p.checked_div(&p).is_err());
    /// ```
    pub fn checked_div(&self, other: impl Into<Operand<T>>) -> Result<Self> {
        match other.into() {
            Operand::Scalar(c) => Ok(self / c),
            other => Err(Error::unsupported_operand("divide", other.type_name())),
        }
    }

    /// Compose with a polynomial, checking the operand at runtime. See
    /// [`Poly::compose`].
    ///
    /// # Errors
    /// [`Error::Type`] if `other` is not a polynomial.
    pub fn try_compose(&self, other: impl Into<Operand<T>>) -> Result<Self> {
        match other.into() {
            Operand::Poly(p) => Ok(self.compose(&p)),
            other => Err(Error::unsupported_operand("compose", other.type_name())),
        }
    }
}

impl<T: RealScalar> Add<Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        let coeffs = self
            .coeffs
            .iter()
            .zip_longest(rhs.coeffs.iter())
            .map(|p| match p {
                EitherOrBoth::Both(&l, &r) => l + r,
                EitherOrBoth::Left(&c) | EitherOrBoth::Right(&c) => c,
            })
            .collect_vec();
        Self::from_parts(coeffs, self.var)
    }
}

impl<T: RealScalar> Add<T> for Poly<T> {
    type Output = Self;

    /// Adds to the constant term only
    fn add(mut self, rhs: T) -> Self::Output {
        self.coeffs[0] = self.coeffs[0] + rhs;
        self.normalize()
    }
}

impl<T: RealScalar> Sub<Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl<T: RealScalar> Sub<T> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self::Output {
        self + -rhs
    }
}

impl<T: RealScalar> Mul<Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self * &rhs
    }
}

impl<T: RealScalar> Mul<&Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        let ret = convolve_1d(&self.coeffs, &rhs.coeffs);
        Self::from_parts(ret, self.var)
    }
}

impl<T: RealScalar> Mul<T> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.map_coeffs(|c| c * rhs)
    }
}

impl<T: RealScalar> Div<T> for Poly<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self.map_coeffs(|c| c / rhs)
    }
}

impl<T: RealScalar> Neg for Poly<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map_coeffs(|c| -c)
    }
}

impl<T: RealScalar> Neg for &Poly<T> {
    type Output = Poly<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

/// Forwards the borrowed forms of a binary operator to the owned one
macro_rules! forward_ref_binop {
    ($imp:ident, $method:ident) => {
        impl<T: RealScalar> $imp<&Poly<T>> for &Poly<T> {
            type Output = Poly<T>;

            fn $method(self, rhs: &Poly<T>) -> Self::Output {
                self.clone().$method(rhs.clone())
            }
        }

        impl<T: RealScalar> $imp<Poly<T>> for &Poly<T> {
            type Output = Poly<T>;

            fn $method(self, rhs: Poly<T>) -> Self::Output {
                self.clone().$method(rhs)
            }
        }

        impl<T: RealScalar> $imp<T> for &Poly<T> {
            type Output = Poly<T>;

            fn $method(self, rhs: T) -> Self::Output {
                self.clone().$method(rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);
forward_ref_binop!(Mul, mul);

impl<T: RealScalar> Add<&Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        self + rhs.clone()
    }
}

impl<T: RealScalar> Sub<&Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        self + -rhs
    }
}

impl<T: RealScalar> Div<T> for &Poly<T> {
    type Output = Poly<T>;

    fn div(self, rhs: T) -> Self::Output {
        self.clone() / rhs
    }
}

/// Scalar on the left hand side, e.g. `2.0 * p`. The result keeps the
/// polynomial's variable name.
macro_rules! impl_scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl Add<Poly<$t>> for $t {
                type Output = Poly<$t>;

                fn add(self, rhs: Poly<$t>) -> Self::Output {
                    rhs + self
                }
            }

            impl Add<&Poly<$t>> for $t {
                type Output = Poly<$t>;

                fn add(self, rhs: &Poly<$t>) -> Self::Output {
                    rhs + self
                }
            }

            impl Sub<Poly<$t>> for $t {
                type Output = Poly<$t>;

                fn sub(self, rhs: Poly<$t>) -> Self::Output {
                    -rhs + self
                }
            }

            impl Sub<&Poly<$t>> for $t {
                type Output = Poly<$t>;

                fn sub(self, rhs: &Poly<$t>) -> Self::Output {
                    -rhs + self
                }
            }

            impl Mul<Poly<$t>> for $t {
                type Output = Poly<$t>;

                fn mul(self, rhs: Poly<$t>) -> Self::Output {
                    rhs * self
                }
            }

            impl Mul<&Poly<$t>> for $t {
                type Output = Poly<$t>;

                fn mul(self, rhs: &Poly<$t>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_lhs!(f32, f64);

impl<T: RealScalar> std::iter::Sum for Poly<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a, T: RealScalar> std::iter::Sum<&'a Self> for Poly<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<T: RealScalar> std::iter::Product for Poly<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<T: RealScalar> Zero for Poly<T> {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl<T: RealScalar> One for Poly<T> {
    fn one() -> Self {
        Self::one()
    }
}
