//! Macros for reducing doc comment boilerplate.

/// Documents panics due to absurdly large polynomials
macro_rules! panic_absurd_size {
    () => {
        r"May theoretically panic for absurdly large polynomials, however such polynomials will likely not fit in memory anyway.

"
    };
}
pub(crate) use panic_absurd_size;
