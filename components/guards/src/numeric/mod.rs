//! Numeric classification guards
//!
//! Layered as: atomic f64 predicates ([`real`]), width and precision
//! refinements ([`width`], [`float`]), parity ([`parity`]), validated
//! ranges ([`range`]), and the type-level branding system ([`brand`]).
//!
//! Value-level guards never fail on a bad subject: anything that is not a
//! number (or, for the parity guards, a bigint or strict integer-literal
//! string) is simply a negative answer. Each derived guard calls the next
//! more primitive guard and adds exactly one check.

pub mod brand;
pub(crate) mod float;
mod parity;
mod range;
pub(crate) mod real;
pub(crate) mod width;

pub use parity::{is_even, is_odd};
pub use range::{in_range, BoundMode, Range, RangeSpecError};

use value_core::Value;

/// Largest integer exactly representable as an f64.
pub const MAX_SAFE_INTEGER: f64 = real::MAX_SAFE_INTEGER;

fn num(value: &Value) -> Option<f64> {
    value.as_number()
}

/// Whether the value is NaN.
pub fn is_nan(value: &Value) -> bool {
    matches!(num(value), Some(n) if real::is_nan(n))
}

/// Whether the value is a finite number.
pub fn is_finite(value: &Value) -> bool {
    matches!(num(value), Some(n) if real::is_finite(n))
}

/// Whether the value is an infinity.
pub fn is_infinity(value: &Value) -> bool {
    matches!(num(value), Some(n) if real::is_infinity(n))
}

/// Whether the value is an integer number.
pub fn is_integer(value: &Value) -> bool {
    matches!(num(value), Some(n) if real::is_integer(n))
}

/// Whether the value is a safe integer.
pub fn is_safe_integer(value: &Value) -> bool {
    matches!(num(value), Some(n) if real::is_safe_integer(n))
}

/// Whether the value is zero (either sign).
pub fn is_zero(value: &Value) -> bool {
    matches!(num(value), Some(n) if real::is_zero(n))
}

/// Whether the value is a non-zero number.
pub fn is_non_zero(value: &Value) -> bool {
    matches!(num(value), Some(n) if real::is_non_zero(n))
}

/// Whether the value is positive zero.
pub fn is_positive_zero(value: &Value) -> bool {
    matches!(num(value), Some(n) if real::is_positive_zero(n))
}

/// Whether the value is negative zero.
pub fn is_negative_zero(value: &Value) -> bool {
    matches!(num(value), Some(n) if real::is_negative_zero(n))
}

/// Whether the value is a positive number (sign bit clear).
pub fn is_positive(value: &Value) -> bool {
    matches!(num(value), Some(n) if real::is_positive(n))
}

/// Whether the value is a negative number (sign bit set).
pub fn is_negative(value: &Value) -> bool {
    matches!(num(value), Some(n) if real::is_negative(n))
}

/// Whether the value is a finite non-integer number.
pub fn is_float(value: &Value) -> bool {
    matches!(num(value), Some(n) if float::is_float(n))
}

/// Whether the value is exactly representable at half precision.
pub fn is_float16(value: &Value) -> bool {
    matches!(num(value), Some(n) if float::is_float16(n))
}

/// Whether the value is exactly representable at single precision.
pub fn is_float32(value: &Value) -> bool {
    matches!(num(value), Some(n) if float::is_float32(n))
}

/// Whether the value is a finite number (every f64 is double precision).
pub fn is_float64(value: &Value) -> bool {
    matches!(num(value), Some(n) if float::is_float64(n))
}

/// Whether the value is an integer in the i8 range.
pub fn is_int8(value: &Value) -> bool {
    matches!(num(value), Some(n) if width::is_int8(n))
}

/// Whether the value is an integer in the u8 range.
pub fn is_uint8(value: &Value) -> bool {
    matches!(num(value), Some(n) if width::is_uint8(n))
}

/// Whether the value is an integer in the i16 range.
pub fn is_int16(value: &Value) -> bool {
    matches!(num(value), Some(n) if width::is_int16(n))
}

/// Whether the value is an integer in the u16 range.
pub fn is_uint16(value: &Value) -> bool {
    matches!(num(value), Some(n) if width::is_uint16(n))
}

/// Whether the value is an integer in the i32 range.
pub fn is_int32(value: &Value) -> bool {
    matches!(num(value), Some(n) if width::is_int32(n))
}

/// Whether the value is an integer in the u32 range.
pub fn is_uint32(value: &Value) -> bool {
    matches!(num(value), Some(n) if width::is_uint32(n))
}

/// Whether the value is a 64-bit-representable integer.
///
/// Number subjects use the safe-integer range; bigint subjects are checked
/// against the exact i64 range.
pub fn is_int64(value: &Value) -> bool {
    use num_traits::ToPrimitive;
    match value {
        Value::Number(n) => width::is_int64(*n),
        Value::BigInt(n) => n.to_i64().is_some(),
        _ => false,
    }
}

/// Whether the value is a non-negative 64-bit-representable integer.
pub fn is_uint64(value: &Value) -> bool {
    use num_traits::ToPrimitive;
    match value {
        Value::Number(n) => width::is_uint64(*n),
        Value::BigInt(n) => n.to_u64().is_some(),
        _ => false,
    }
}

// Derived conjunctions. Each one narrows the previous guard in its chain
// by a single additional check.

/// Whether the value is a positive integer.
pub fn is_positive_integer(value: &Value) -> bool {
    is_integer(value) && matches!(num(value), Some(n) if real::is_positive(n))
}

/// Whether the value is a negative integer.
pub fn is_negative_integer(value: &Value) -> bool {
    is_integer(value) && matches!(num(value), Some(n) if real::is_negative(n))
}

/// Whether the value is a non-zero integer.
pub fn is_non_zero_integer(value: &Value) -> bool {
    is_integer(value) && matches!(num(value), Some(n) if real::is_non_zero(n))
}

/// Whether the value is a positive finite number.
pub fn is_positive_finite(value: &Value) -> bool {
    is_finite(value) && matches!(num(value), Some(n) if real::is_positive(n))
}

/// Whether the value is a negative finite number.
pub fn is_negative_finite(value: &Value) -> bool {
    is_finite(value) && matches!(num(value), Some(n) if real::is_negative(n))
}

/// Whether the value is a non-zero finite number.
pub fn is_non_zero_finite(value: &Value) -> bool {
    is_finite(value) && matches!(num(value), Some(n) if real::is_non_zero(n))
}

/// Whether the value is a positive finite integer.
pub fn is_positive_finite_integer(value: &Value) -> bool {
    is_positive_finite(value) && matches!(num(value), Some(n) if real::is_integer(n))
}

/// Whether the value is a negative finite integer.
pub fn is_negative_finite_integer(value: &Value) -> bool {
    is_negative_finite(value) && matches!(num(value), Some(n) if real::is_integer(n))
}

/// Whether the value is a positive non-zero integer.
pub fn is_positive_non_zero_integer(value: &Value) -> bool {
    is_positive_integer(value) && matches!(num(value), Some(n) if real::is_non_zero(n))
}

/// Whether the value is a negative non-zero integer.
pub fn is_negative_non_zero_integer(value: &Value) -> bool {
    is_negative_integer(value) && matches!(num(value), Some(n) if real::is_non_zero(n))
}

/// Whether the value is a positive non-zero finite number.
pub fn is_positive_non_zero_finite(value: &Value) -> bool {
    is_positive_finite(value) && matches!(num(value), Some(n) if real::is_non_zero(n))
}

/// Whether the value is a negative non-zero finite number.
pub fn is_negative_non_zero_finite(value: &Value) -> bool {
    is_negative_finite(value) && matches!(num(value), Some(n) if real::is_non_zero(n))
}

/// Whether the value is a positive non-zero finite integer.
pub fn is_positive_non_zero_finite_integer(value: &Value) -> bool {
    is_positive_non_zero_finite(value) && matches!(num(value), Some(n) if real::is_integer(n))
}

/// Whether the value is a negative non-zero finite integer.
pub fn is_negative_non_zero_finite_integer(value: &Value) -> bool {
    is_negative_non_zero_finite(value) && matches!(num(value), Some(n) if real::is_integer(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_number_subjects_are_negative() {
        let catalogue: [fn(&Value) -> bool; 10] = [
            is_nan,
            is_finite,
            is_infinity,
            is_integer,
            is_zero,
            is_positive,
            is_negative,
            is_float32,
            is_int16,
            is_positive_non_zero_finite_integer,
        ];
        for guard in catalogue {
            assert!(!guard(&Value::Undefined));
            assert!(!guard(&Value::string("3")));
            assert!(!guard(&Value::Null));
            assert!(!guard(&Value::boolean(true)));
        }
    }

    #[test]
    fn test_signed_zero_guards() {
        assert!(is_positive_zero(&Value::number(0.0)));
        assert!(!is_positive_zero(&Value::number(-0.0)));
        assert!(is_negative_zero(&Value::number(-0.0)));
        assert!(!is_negative_zero(&Value::number(0.0)));
        assert!(!is_positive_zero(&Value::number(1.0)));
        assert!(!is_negative_zero(&Value::number(-1.0)));
    }

    #[test]
    fn test_positive_non_zero_finite_integer_scenarios() {
        assert!(!is_positive_non_zero_finite_integer(&Value::number(0.0)));
        assert!(!is_positive_non_zero_finite_integer(&Value::number(-0.0)));
        assert!(is_positive_non_zero_finite_integer(&Value::number(1.0)));
        assert!(!is_positive_non_zero_finite_integer(&Value::number(
            f64::INFINITY
        )));
        assert!(!is_positive_non_zero_finite_integer(&Value::number(1.5)));
        assert!(!is_positive_non_zero_finite_integer(&Value::number(-2.0)));
    }

    #[test]
    fn test_int16_scenarios() {
        assert!(is_int16(&Value::number(32767.0)));
        assert!(!is_int16(&Value::number(32768.0)));
        assert!(!is_int16(&Value::number(-32769.0)));
    }

    #[test]
    fn test_64_bit_guards_accept_bigints() {
        assert!(is_int64(&Value::bigint(i64::MAX)));
        assert!(is_int64(&Value::bigint(i64::MIN)));
        assert!(!is_int64(&Value::bigint(num_bigint::BigInt::from(i64::MAX) + 1)));
        assert!(is_uint64(&Value::bigint(u64::MAX)));
        assert!(!is_uint64(&Value::bigint(-1)));
        assert!(is_int64(&Value::number(42.0)));
        assert!(!is_int64(&Value::number(1.5)));
    }

    #[test]
    fn test_derived_chains_match_their_parts() {
        let candidates = [
            Value::number(0.0),
            Value::number(-0.0),
            Value::number(3.0),
            Value::number(-3.0),
            Value::number(2.5),
            Value::number(f64::INFINITY),
            Value::number(f64::NEG_INFINITY),
            Value::number(f64::NAN),
        ];
        for v in &candidates {
            assert_eq!(
                is_positive_non_zero_finite_integer(v),
                is_positive(v) && is_non_zero(v) && is_finite(v) && is_integer(v),
            );
            assert_eq!(
                is_negative_non_zero_finite(v),
                is_negative(v) && is_non_zero(v) && is_finite(v),
            );
            assert_eq!(is_non_zero_integer(v), is_non_zero(v) && is_integer(v));
        }
    }

    #[test]
    fn test_infinity_and_nan_classification() {
        assert!(is_infinity(&Value::number(f64::INFINITY)));
        assert!(is_positive(&Value::number(f64::INFINITY)));
        assert!(is_negative(&Value::number(f64::NEG_INFINITY)));
        assert!(!is_finite(&Value::number(f64::INFINITY)));
        assert!(is_nan(&Value::number(f64::NAN)));
        assert!(!is_nan(&Value::number(1.0)));
    }
}
