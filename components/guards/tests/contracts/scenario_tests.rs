//! Concrete classification scenarios

use guards::{
    is_array_like, is_int16, is_plain_object, is_positive_non_zero_finite_integer,
    is_typed_array_of, is_weak_map,
};
use value_core::{Realm, Value};

#[test]
fn scenario_array_like_shapes() {
    let realm = Realm::new();

    let shaped = realm.new_plain_object();
    shaped.set("length", Value::number(3.0));
    shaped.set("0", Value::string("a"));
    shaped.set("1", Value::string("b"));
    shaped.set("2", Value::string("c"));
    assert!(is_array_like(&shaped));

    let negative = realm.new_plain_object();
    negative.set("length", Value::number(-1.0));
    assert!(!is_array_like(&negative));

    let infinite = realm.new_plain_object();
    infinite.set("length", Value::number(f64::INFINITY));
    assert!(!is_array_like(&infinite));
}

#[test]
fn scenario_plain_object() {
    let realm = Realm::new();

    // Object.create(null)
    assert!(is_plain_object(&realm.object_create(None)));

    // new (class Foo {}) - inherits through a constructor prototype
    let foo_prototype = realm.new_plain_object();
    let foo_instance = realm.object_create(Some(&foo_prototype));
    assert!(!is_plain_object(&foo_instance));

    // []
    assert!(!is_plain_object(&realm.new_array(vec![])));
}

#[test]
fn scenario_int16_boundaries() {
    assert!(is_int16(&Value::number(32767.0)));
    assert!(!is_int16(&Value::number(32768.0)));
    assert!(!is_int16(&Value::number(-32769.0)));
}

#[test]
fn scenario_positive_non_zero_finite_integer() {
    assert!(!is_positive_non_zero_finite_integer(&Value::number(0.0)));
    assert!(!is_positive_non_zero_finite_integer(&Value::number(-0.0)));
    assert!(is_positive_non_zero_finite_integer(&Value::number(1.0)));
    assert!(!is_positive_non_zero_finite_integer(&Value::number(
        f64::INFINITY
    )));
}

#[test]
fn scenario_typed_array_discriminator() {
    let realm = Realm::new();
    let bytes = realm
        .new_typed_array(value_core::TypedArrayKind::Uint8, 4)
        .unwrap();
    assert!(is_typed_array_of(&bytes, "Uint8Array"));
    assert!(!is_typed_array_of(&bytes, "Int8Array"));
}

#[test]
fn scenario_weak_map_slot_check() {
    let realm = Realm::new();
    assert!(is_weak_map(&realm.new_weak_map()));
    assert!(!is_weak_map(
        &realm.object_create(Some(&realm.intrinsics.weak_map_prototype))
    ));
}
