//! Numeric family contract tests: signed zero, precision round trips,
//! branding, range configuration errors.

use guards::numeric::brand::{Int16, PositiveNonZeroFiniteInteger, Real};
use guards::{
    in_range, is_even, is_float16, is_float32, is_float64, is_negative_zero, is_odd,
    is_positive_zero, BoundMode, Range, RangeSpecError,
};
use value_core::Value;

#[test]
fn test_signed_zero_distinction() {
    assert!(is_positive_zero(&Value::number(0.0)));
    assert!(!is_positive_zero(&Value::number(-0.0)));
    assert!(is_negative_zero(&Value::number(-0.0)));
    assert!(!is_negative_zero(&Value::number(0.0)));
    for nonzero in [1.0, -1.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        assert!(!is_positive_zero(&Value::number(nonzero)));
        assert!(!is_negative_zero(&Value::number(nonzero)));
    }
}

#[test]
fn test_float32_round_trip_property() {
    // Exactly representable at single precision: bit-for-bit round trip.
    for exact in [0.5f64, 1.0, -2.25, 1024.0, 123456.0] {
        let round_tripped = (exact as f32) as f64;
        assert_eq!(round_tripped.to_bits(), exact.to_bits());
        assert!(is_float32(&Value::number(exact)), "{}", exact);
    }
    // Values that need the full double significand fail the float32 guard.
    let needs_double = 0.1 + 0.2;
    assert!(!is_float32(&Value::number(needs_double)));
    assert!(is_float64(&Value::number(needs_double)));
}

#[test]
fn test_float16_tier() {
    assert!(is_float16(&Value::number(1.5)));
    assert!(is_float16(&Value::number(65504.0)));
    assert!(!is_float16(&Value::number(65505.0)));
    assert!(!is_float16(&Value::number(0.1)));
    // Everything float16 is also float32 and float64.
    for x in [0.0, -0.5, 2048.0] {
        if is_float16(&Value::number(x)) {
            assert!(is_float32(&Value::number(x)));
            assert!(is_float64(&Value::number(x)));
        }
    }
}

#[test]
fn test_parity_with_strict_strings() {
    assert!(is_even(&Value::string("42")));
    assert!(is_odd(&Value::string("-1")));
    // Fractional and malformed strings are rejected, not truncated.
    assert!(!is_even(&Value::string("42.9")));
    assert!(!is_odd(&Value::string("1e3")));
    assert!(!is_even(&Value::string("42abc")));
    assert!(is_even(&Value::bigint(1_234_567_890_123_456_788_i64)));
}

#[test]
fn test_range_configuration_is_validated() {
    assert!(matches!(
        Range::inclusive(0.0, f64::NAN),
        Err(RangeSpecError::NonFiniteBound(_))
    ));
    assert!(matches!(
        Range::new(5.0, -5.0, BoundMode::Inclusive),
        Err(RangeSpecError::InvertedBounds { .. })
    ));

    let range = Range::new(0.0, 1.0, BoundMode::MaxExclusive).unwrap();
    assert!(in_range(&Value::number(0.0), &range));
    assert!(!in_range(&Value::number(1.0), &range));
    assert!(!in_range(&Value::string("0.5"), &range));
}

#[test]
fn test_branded_construction_mirrors_guards() {
    for (x, expected) in [
        (1.0, true),
        (0.0, false),
        (-0.0, false),
        (-1.0, false),
        (1.5, false),
        (f64::INFINITY, false),
        (f64::NAN, false),
    ] {
        assert_eq!(
            PositiveNonZeroFiniteInteger::new(x).is_some(),
            expected,
            "branding {}",
            x
        );
        assert_eq!(
            guards::is_positive_non_zero_finite_integer(&Value::number(x)),
            expected,
            "guard {}",
            x
        );
    }
}

#[test]
fn test_branded_width_round_trip() {
    let branded = Int16::from_value(&Value::number(-32768.0)).expect("in range");
    assert_eq!(branded.get(), -32768.0);
    assert!(Int16::from_value(&Value::number(-32769.0)).is_none());
    assert!(Int16::from_value(&Value::string("5")).is_none());

    let unconstrained: Real = branded.widen();
    assert_eq!(f64::from(unconstrained), -32768.0);
}
