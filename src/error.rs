use thiserror::Error;

/// The top-level error type for this crate.
///
/// Every fallible polynomial operation returns one of these variants, so a
/// caller can either match on the specific kind or handle the whole family
/// at once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A term of a parsed expression is not a constant, `coeff·var` or
    /// `coeff·var^exp`.
    #[error("malformed polynomial term: '{term}'")]
    Parse { term: String },

    /// An operator received something that is neither a scalar nor a
    /// polynomial.
    #[error("cannot {operation} polynomial with object of type '{operand}'")]
    Type {
        operation: &'static str,
        operand: String,
    },

    /// Mathematically invalid input, e.g. a negative exponent.
    #[error("{message}")]
    Domain { message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn malformed_term(term: impl Into<String>) -> Self {
        Self::Parse { term: term.into() }
    }

    pub(crate) fn unsupported_operand(operation: &'static str, operand: impl Into<String>) -> Self {
        Self::Type {
            operation,
            operand: operand.into(),
        }
    }

    pub(crate) fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }

    /// The offending term, if this is a parse error
    #[must_use]
    pub fn term(&self) -> Option<&str> {
        match self {
            Self::Parse { term } => Some(term),
            _ => None,
        }
    }
}
