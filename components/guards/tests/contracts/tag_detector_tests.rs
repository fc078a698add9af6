//! Tagged-native detector round trips and spoof resistance

use guards::tag::{is_tagged, tagged, TagOptions};
use value_core::{ErrorKind, PromiseState, Realm, Symbols, Value};

#[test]
fn test_round_trip_for_every_stable_tag() {
    let realm = Realm::new();
    let cases: Vec<(Value, &str)> = vec![
        (realm.new_array(vec![]), "Array"),
        (realm.new_map(vec![]), "Map"),
        (realm.new_set(vec![]), "Set"),
        (realm.new_promise(PromiseState::Pending), "Promise"),
        (realm.new_error(ErrorKind::Error, "e"), "Error"),
        (realm.new_regexp("x", ""), "RegExp"),
        (realm.new_date(0.0), "Date"),
        (realm.new_weak_map(), "WeakMap"),
        (realm.new_weak_set(), "WeakSet"),
        (realm.new_array_buffer(4).unwrap(), "ArrayBuffer"),
        (realm.new_arguments(vec![]), "Arguments"),
    ];
    for (value, tag) in &cases {
        assert!(is_tagged(value, tag), "genuine {} not detected", tag);
        // Every other tag rejects it.
        for (_, other) in &cases {
            if other != tag {
                assert!(!is_tagged(value, other), "{} detected as {}", tag, other);
            }
        }
    }
}

#[test]
fn test_prototype_only_construction_never_passes() {
    let realm = Realm::new();
    let protos = [
        (&realm.intrinsics.array_prototype, "Array"),
        (&realm.intrinsics.map_prototype, "Map"),
        (&realm.intrinsics.promise_prototype, "Promise"),
        (&realm.intrinsics.regexp_prototype, "RegExp"),
        (&realm.intrinsics.date_prototype, "Date"),
    ];
    for (proto, tag) in protos {
        let fake = realm.object_create(Some(proto));
        assert!(!is_tagged(&fake, tag), "prototype-only {} passed", tag);
    }
}

#[test]
fn test_own_tag_spoof_is_self_declaration() {
    let realm = Realm::new();
    let declared = realm.new_plain_object();
    declared.set_symbol(&Symbols::to_string_tag(), Value::string("Thing"));
    assert!(is_tagged(&declared, "Thing"));
}

#[test]
fn test_inherited_tag_spoof_is_rejected_without_opt_in() {
    let realm = Realm::new();
    let proto = realm.new_plain_object();
    proto.set_symbol(&Symbols::to_string_tag(), Value::string("Map"));
    let impostor = realm.object_create(Some(&proto));

    assert!(!is_tagged(&impostor, "Map"));
    assert!(tagged(&impostor, "Map", TagOptions { allow_custom: true }));
    // The spoof never fools the probe-based guard either way.
    assert!(!guards::is_map(&impostor));
}

#[test]
fn test_nullish_candidates_short_circuit() {
    assert!(!is_tagged(&Value::Undefined, "Undefined"));
    assert!(!is_tagged(&Value::Null, "Null"));
}

#[test]
fn test_primitives_classify_via_wrapper_class() {
    assert!(is_tagged(&Value::number(1.0), "Number"));
    assert!(is_tagged(&Value::boolean(true), "Boolean"));
    assert!(is_tagged(&Value::string("s"), "String"));
    assert!(is_tagged(&Value::bigint(1), "BigInt"));
    assert!(is_tagged(&Value::symbol(Symbols::unique(None)), "Symbol"));
}

#[test]
fn test_mismatched_expected_tag() {
    let realm = Realm::new();
    assert!(!is_tagged(&realm.new_map(vec![]), "Set"));
    assert!(!is_tagged(&realm.new_plain_object(), "Map"));
}
