use num::NumCast;

use crate::RealScalar;

/// Cast with loss of precision, explicitly clamping out of bounds values instead
/// of panicking (also shuts up clippy 📎)
pub(crate) fn usize_to_scalar<T: RealScalar>(x: usize) -> T {
    <T as NumCast>::from(x).unwrap_or_else(T::infinity)
}
