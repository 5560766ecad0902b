//! Parsing of polynomials written like `"x^2 - 3x + 2"`.
//!
//! The input is first split into signed terms by a small tokenizer, then
//! each term is matched against one of three shapes: a constant, `c·var` or
//! `c·var^n`.

use std::{collections::BTreeMap, mem, str::FromStr};

use num::{One, Zero};

use crate::{Error, Poly, RealScalar, Result, DEFAULT_VAR};

impl<T: RealScalar> Poly<T> {
    /// Highest exponent [`Poly::from_string`] accepts in a term
    pub const MAX_PARSED_DEGREE: usize = 1 << 20;

    /// Parse a polynomial in the default variable `x`.
    ///
    /// # Errors
    /// [`Error::Parse`] naming the first term that could not be read. Terms
    /// with an exponent above [`Poly::MAX_PARSED_DEGREE`] count as malformed.
    ///
    /// # Examples
    /// ```
    /// use real_poly::{poly, Error, Poly64};
    ///
    /// assert_eq!(Poly64::from_string("x^2 - 3x + 2").unwrap(), poly![2.0, -3.0, 1.0]);
    /// assert_eq!(Poly64::from_string("-x^3+2x-1").unwrap(), poly![-1.0, 2.0, 0.0, -1.0]);
    ///
    /// let err = Poly64::from_string("x^^2").unwrap_err();
    /// assert_eq!(err, Error::Parse { term: "x^^2".to_owned() });
    /// ```
    pub fn from_string(input: &str) -> Result<Self> {
        Self::from_string_with_var(input, DEFAULT_VAR)
    }

    /// Parse a polynomial in the given variable.
    ///
    /// # Errors
    /// [`Error::Parse`] naming the first term that could not be read.
    ///
    /// ```
    /// use real_poly::{poly, Poly64};
    ///
    /// let p = Poly64::from_string_with_var("2t^2 + t", "t").unwrap();
    /// assert_eq!(p, poly![0.0, 1.0, 2.0]);
    /// assert_eq!(p.var(), "t");
    /// ```
    pub fn from_string_with_var(input: &str, var: impl Into<String>) -> Result<Self> {
        let var = var.into();
        let terms = signed_terms(input);
        log::trace!("parsing {{input: \"{input}\", var: \"{var}\", terms: {terms:?}}}");

        // sums coefficients that share an exponent
        let mut by_exponent: BTreeMap<usize, T> = BTreeMap::new();
        for term in terms {
            let Some((coeff, exponent)) = parse_term::<T>(&term, &var) else {
                log::debug!("rejecting malformed term \"{term}\" in \"{input}\"");
                return Err(Error::malformed_term(term));
            };
            log::trace!("{{term: \"{term}\", coeff: {coeff}, exponent: {exponent}}}");
            let slot = by_exponent.entry(exponent).or_insert_with(T::zero);
            *slot = *slot + coeff;
        }

        let degree = by_exponent.keys().next_back().copied().unwrap_or(0);
        let mut coeffs = vec![T::zero(); degree + 1];
        for (exponent, coeff) in by_exponent {
            coeffs[exponent] = coeff;
        }
        Ok(Self::from_parts(coeffs, var))
    }
}

impl<T: RealScalar> FromStr for Poly<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

/// Split an expression into signed terms.
///
/// Whitespace is dropped. A `+` ends the current term. A `-` ends the current
/// term too (unless it directly follows a `+` or opens the expression) and
/// becomes the sign of the next one. Runs of operators therefore leave empty
/// or sign-only terms behind, which the term grammar rejects.
fn signed_terms(input: &str) -> Vec<String> {
    let mut terms = vec![];
    let mut current = String::new();
    let mut prev = None;
    for ch in input.chars().filter(|c| !c.is_whitespace()) {
        match ch {
            '+' => terms.push(mem::take(&mut current)),
            '-' => {
                if prev.is_some() && prev != Some('+') {
                    terms.push(mem::take(&mut current));
                }
                current.push('-');
            }
            _ => current.push(ch),
        }
        prev = Some(ch);
    }
    terms.push(current);
    terms
}

/// Read a single signed term into `(coefficient, exponent)`
fn parse_term<T: RealScalar>(term: &str, var: &str) -> Option<(T, usize)> {
    // constant
    if let Ok(c) = term.parse::<T>() {
        return Some((c, 0));
    }

    let marker = format!("{var}^");
    let parts: Vec<&str> = term.split(marker.as_str()).collect();
    match parts.as_slice() {
        // coeff·var^exp
        [coeff, exponent] => Some((parse_coeff(coeff)?, parse_exponent::<T>(exponent)?)),
        // coeff·var
        [_] if !term.contains('^') => Some((parse_coeff(term.strip_suffix(var)?)?, 1)),
        _ => None,
    }
}

fn parse_exponent<T: RealScalar>(exponent: &str) -> Option<usize> {
    exponent
        .parse()
        .ok()
        .filter(|&n| n <= Poly::<T>::MAX_PARSED_DEGREE)
}

/// A coefficient in front of the variable, which may be omitted or reduced
/// to a bare sign
fn parse_coeff<T: RealScalar>(coeff: &str) -> Option<T> {
    match coeff {
        "" => Some(T::one()),
        "-" => Some(-T::one()),
        _ => coeff.parse().ok(),
    }
}
