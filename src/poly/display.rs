use std::fmt::{self, Debug, Display};

use num::{One, Zero};

use crate::{Poly, RealScalar};

/// Renders terms from the lowest degree to the highest, e.g. `2 - 3x + x^2`.
///
/// Zero terms are skipped, a coefficient of magnitude one is omitted in front
/// of the variable, and the zero polynomial renders as `0`.
impl<T: RealScalar> Display for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nonzero_found = false;
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let sign = match (nonzero_found, c >= T::zero()) {
                (false, true) => "",
                (false, false) => "-",
                (true, true) => " + ",
                (true, false) => " - ",
            };
            nonzero_found = true;

            let magnitude = c.abs();
            f.write_str(sign)?;
            if i == 0 || !magnitude.is_one() {
                write!(f, "{magnitude}")?;
            }
            match i {
                0 => {}
                1 => f.write_str(&self.var)?,
                _ => write!(f, "{}^{i}", self.var)?,
            }
        }
        if !nonzero_found {
            f.write_str("0")?;
        }
        Ok(())
    }
}

/// Renders the constructor call that rebuilds the polynomial.
///
/// ```
/// use real_poly::poly;
///
/// assert_eq!(format!("{:?}", poly![2.0, -3.0, 1.0]), r#"Poly::with_var(&[2.0, -3.0, 1.0], "x")"#);
/// ```
impl<T: RealScalar> Debug for Poly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Poly::with_var(&{:?}, {:?})", self.coeffs, self.var)
    }
}
