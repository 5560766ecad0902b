use crate::{Poly, RealScalar};

/// The right-hand side of a dynamically checked operation, see
/// [`Poly::checked_add`] and friends.
///
/// Anything that converts into an `Operand` can be passed to those methods.
/// Values that are neither scalars nor polynomials become
/// [`Operand::Unsupported`] and are rejected with [`crate::Error::Type`].
///
/// ```
/// use real_poly::{Operand, Poly64};
///
/// assert!(matches!(Operand::<f64>::from(2i32), Operand::Scalar(c) if c == 2.0));
/// assert!(matches!(Operand::<f64>::from("abc"), Operand::Unsupported("&str")));
/// assert!(matches!(Operand::from(Poly64::one()), Operand::Poly(_)));
/// ```
#[derive(Clone, Debug)]
pub enum Operand<T: RealScalar> {
    Scalar(T),
    Poly(Poly<T>),
    /// Name of the type that was supplied
    Unsupported(&'static str),
}

impl<T: RealScalar> Operand<T> {
    /// Human readable name of the operand's type, as reported in errors
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => std::any::type_name::<T>(),
            Self::Poly(_) => "Poly",
            Self::Unsupported(name) => *name,
        }
    }
}

impl<T: RealScalar> From<Poly<T>> for Operand<T> {
    fn from(value: Poly<T>) -> Self {
        Self::Poly(value)
    }
}

impl<T: RealScalar> From<&Poly<T>> for Operand<T> {
    fn from(value: &Poly<T>) -> Self {
        Self::Poly(value.clone())
    }
}

macro_rules! impl_from_scalar {
    ($target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Operand<$target> {
                fn from(value: $source) -> Self {
                    Self::Scalar(<$target>::from(value))
                }
            }
        )+
    };
}

impl_from_scalar!(f64: f64, f32, i8, i16, i32, u8, u16, u32);
impl_from_scalar!(f32: f32, i8, i16, u8, u16);

// integers too wide for a lossless conversion round to the nearest scalar
macro_rules! impl_from_wide_int {
    ($target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Operand<$target> {
                #[allow(clippy::cast_precision_loss)]
                fn from(value: $source) -> Self {
                    Self::Scalar(value as $target)
                }
            }
        )+
    };
}

impl_from_wide_int!(f64: i64, u64, isize, usize);
impl_from_wide_int!(f32: i32, u32, i64, u64, isize, usize);

macro_rules! impl_from_unsupported {
    ($($source:ty => $name:literal),+) => {
        $(
            impl<T: RealScalar> From<$source> for Operand<T> {
                fn from(_: $source) -> Self {
                    Self::Unsupported($name)
                }
            }
        )+
    };
}

impl_from_unsupported!(
    &str => "&str",
    String => "String",
    &String => "String",
    bool => "bool",
    char => "char"
);
