//! Disjointness and idempotence properties
//!
//! For every disjoint-by-construction pair of guards, no value may satisfy
//! both. Guards are pure, so a second call on the same value must agree
//! with the first.

use guards::{
    is_finite, is_infinity, is_negative, is_negative_zero, is_non_zero, is_positive,
    is_positive_zero, is_zero,
};
use value_core::{Realm, Value};

fn sample_values() -> Vec<Value> {
    let realm = Realm::new();
    vec![
        Value::Undefined,
        Value::Null,
        Value::boolean(true),
        Value::number(0.0),
        Value::number(-0.0),
        Value::number(1.0),
        Value::number(-1.0),
        Value::number(0.5),
        Value::number(-0.5),
        Value::number(f64::INFINITY),
        Value::number(f64::NEG_INFINITY),
        Value::number(f64::NAN),
        Value::number(f64::MIN_POSITIVE),
        Value::bigint(0),
        Value::string("0"),
        Value::string(""),
        realm.new_plain_object(),
        realm.new_array(vec![]),
        realm.new_map(vec![]),
        realm.new_boxed_number(0.0),
    ]
}

#[test]
fn test_sign_pair_is_disjoint() {
    for v in sample_values() {
        assert!(
            !(is_positive(&v) && is_negative(&v)),
            "positive and negative both true for {:?}",
            v
        );
    }
}

#[test]
fn test_zero_pair_is_disjoint() {
    for v in sample_values() {
        assert!(
            !(is_zero(&v) && is_non_zero(&v)),
            "zero and non-zero both true for {:?}",
            v
        );
    }
}

#[test]
fn test_finiteness_pair_is_disjoint() {
    for v in sample_values() {
        assert!(
            !(is_finite(&v) && is_infinity(&v)),
            "finite and infinite both true for {:?}",
            v
        );
    }
}

#[test]
fn test_signed_zero_pair_is_disjoint() {
    for v in sample_values() {
        assert!(
            !(is_positive_zero(&v) && is_negative_zero(&v)),
            "both signed zeros true for {:?}",
            v
        );
    }
}

#[test]
fn test_every_number_with_a_sign_has_exactly_one() {
    // Every actual number except NaN is either positive or negative.
    for v in sample_values() {
        if let Value::Number(n) = v {
            if !n.is_nan() {
                assert!(is_positive(&v) ^ is_negative(&v), "{:?}", v);
            }
        }
    }
}

#[test]
fn test_idempotence() {
    let guards: Vec<(&str, fn(&Value) -> bool)> = vec![
        ("positive", is_positive),
        ("negative", is_negative),
        ("zero", is_zero),
        ("non_zero", is_non_zero),
        ("finite", is_finite),
        ("infinity", is_infinity),
        ("map", guards::is_map),
        ("iterable", guards::is_iterable),
        ("plain_object", guards::is_plain_object),
        ("array_like", guards::is_array_like),
    ];
    for v in sample_values() {
        for (name, guard) in &guards {
            let first = guard(&v);
            let second = guard(&v);
            assert_eq!(first, second, "guard {} changed its answer on {:?}", name, v);
        }
    }
}
