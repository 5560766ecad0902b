//! Univariate polynomials with real coefficients.
//!
//! A [`Poly`] stores its coefficients in ascending order of degree and is
//! always kept in canonical form: no trailing zero coefficients, except for
//! the zero polynomial, which is stored as a single `0`.
//!
//! ```
//! use real_poly::{poly, Poly64};
//!
//! let p: Poly64 = "x^2 - 3x + 2".parse().unwrap();
//! assert_eq!(p, poly![2.0, -3.0, 1.0]);
//! assert_eq!(p.to_string(), "2 - 3x + x^2");
//! assert_eq!(p.derivative(), poly![-3.0, 2.0]);
//! assert_eq!(p.eval(2.0), 0.0);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use num::Float;

/// Construct a [`Poly`] from a list of coefficients, in ascending order of
/// degree.
///
/// ```
/// use real_poly::{poly, Poly64};
///
/// let p = poly![1.0, 0.0, -3.0];
/// assert_eq!(p.to_string(), "1 - 3x^2");
/// assert_eq!(poly![], Poly64::zero());
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::Poly::<f64>::zero()
    };
    ($($c:expr),+ $(,)?) => {
        $crate::Poly::new(&[$($c),+])
    };
}

mod error;
pub use error::{Error, Result};

mod operand;
pub use operand::Operand;

mod poly;
pub use poly::Poly;

mod util;

// re-exported only so that integration tests and benches can reach it
#[doc(hidden)]
pub use util::__testing;

/// Scalar types usable as polynomial coefficients.
///
/// Blanket-implemented for every real floating point type, in practice `f32`
/// and `f64`.
pub trait RealScalar: Float + FromStr + Display + Debug + 'static {}

impl<T: Float + FromStr + Display + Debug + 'static> RealScalar for T {}

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;

/// The variable label used when none is given
pub const DEFAULT_VAR: &str = "x";
