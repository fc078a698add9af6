//! Cross-realm and reduced-environment behavior
//!
//! Values built in a second realm carry different prototype identities;
//! slot- and tag-based guards must classify them anyway. Realms built
//! without an optional constructor simply never produce its instances, and
//! every guard stays a total function there.

use guards::{
    is_array, is_data_view, is_date, is_error, is_float16_array, is_instance_of, is_map,
    is_promise, is_reg_exp, is_set, is_shared_array_buffer, is_typed_array, is_weak_map,
    is_weak_ref,
};
use value_core::{ErrorKind, PromiseState, Realm, RealmOptions, TypedArrayKind, Value};

#[test]
fn test_cross_realm_classification() {
    let home = Realm::new();
    let foreign = Realm::new();

    let values: Vec<(Value, fn(&Value) -> bool)> = vec![
        (foreign.new_array(vec![]), is_array),
        (foreign.new_map(vec![]), is_map),
        (foreign.new_set(vec![]), is_set),
        (foreign.new_weak_map(), is_weak_map),
        (foreign.new_promise(PromiseState::Pending), is_promise),
        (foreign.new_error(ErrorKind::TypeError, "t"), is_error),
        (foreign.new_regexp("a", "i"), is_reg_exp),
        (foreign.new_date(0.0), is_date),
    ];
    for (value, guard) in &values {
        assert!(guard(value), "foreign value failed: {:?}", value);
    }

    // Identity-based checks fail across realms - exactly the failure mode
    // the slot- and tag-based detectors avoid.
    let foreign_map = foreign.new_map(vec![]);
    assert!(!is_instance_of(&foreign_map, &home.intrinsics.map_prototype));
    assert!(is_instance_of(&foreign_map, &foreign.intrinsics.map_prototype));
    assert!(is_map(&foreign_map));
}

#[test]
fn test_cross_realm_typed_arrays_and_views() {
    let foreign = Realm::new();
    let view = foreign.new_typed_array(TypedArrayKind::Float64, 2).unwrap();
    assert!(is_typed_array(&view));

    let buf = foreign.new_array_buffer(8).unwrap();
    assert!(is_data_view(&foreign.new_data_view(&buf, 0, None).unwrap()));
}

#[test]
fn test_reduced_realm_yields_false_not_failures() {
    let reduced = Realm::with_options(RealmOptions {
        weak_refs: false,
        float16_arrays: false,
        shared_buffers: false,
    });

    // The constructors are absent, so nothing in this realm can satisfy
    // the guards; the guards themselves still answer normally.
    assert!(reduced.new_weak_ref(&reduced.new_plain_object()).is_err());
    assert!(reduced.new_shared_array_buffer(8).is_err());
    assert!(reduced.new_typed_array(TypedArrayKind::Float16, 1).is_err());

    for v in [
        reduced.new_plain_object(),
        reduced.new_array(vec![]),
        Value::Undefined,
    ] {
        assert!(!is_weak_ref(&v));
        assert!(!is_shared_array_buffer(&v));
        assert!(!is_float16_array(&v));
    }
}

#[test]
fn test_full_realm_values_recognized_by_guards_everywhere() {
    // Guards carry no realm state, so the same guard instance classifies
    // values from any number of realms.
    let realms: Vec<Realm> = (0..3).map(|_| Realm::new()).collect();
    for realm in &realms {
        assert!(is_map(&realm.new_map(vec![])));
        assert!(is_shared_array_buffer(&realm.new_shared_array_buffer(4).unwrap()));
        assert!(is_float16_array(
            &realm.new_typed_array(TypedArrayKind::Float16, 1).unwrap()
        ));
    }
}
