//! Parity guards
//!
//! Even/odd classification over numbers, bigints and integer-literal
//! strings. Strings are validated strictly before coercion: anything that
//! is not a canonical optionally-signed run of digits is a negative
//! answer, never a truncated parse.

use std::str::FromStr;
use std::sync::LazyLock;

use num_bigint::BigInt;
use num_integer::Integer;
use regex::Regex;
use value_core::Value;

use super::real;

/// Canonical integer literal: optional sign, digits only.
static INT_LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("static pattern compiles"));

/// Evenness of the subject, or `None` when parity is undefined for it.
fn parity(value: &Value) -> Option<bool> {
    match value {
        Value::Number(n) if real::is_integer(*n) => Some((n.abs() % 2.0) == 0.0),
        Value::BigInt(n) => Some(n.is_even()),
        Value::String(s) if INT_LITERAL_RE.is_match(s) => {
            BigInt::from_str(s).ok().map(|n| n.is_even())
        }
        _ => None,
    }
}

/// Whether the value is an even integer (number, bigint, or strict
/// integer-literal string).
pub fn is_even(value: &Value) -> bool {
    parity(value) == Some(true)
}

/// Whether the value is an odd integer.
pub fn is_odd(value: &Value) -> bool {
    parity(value) == Some(false)
}
