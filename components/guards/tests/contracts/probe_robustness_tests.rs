//! Probe robustness: genuine instances and correctly-initialized
//! subclasses pass; prototype-only fakes and shape imitations fail.

use guards::{
    is_boxed_number, is_boxed_string, is_data_view, is_date, is_map, is_set, is_typed_array,
    is_weak_map, is_weak_ref, is_weak_set,
};
use value_core::{Realm, TypedArrayKind, Value};

#[test]
fn test_genuine_instances_pass() {
    let realm = Realm::new();
    let target = realm.new_plain_object();
    let buf = realm.new_array_buffer(8).unwrap();

    assert!(is_map(&realm.new_map(vec![])));
    assert!(is_set(&realm.new_set(vec![])));
    assert!(is_weak_map(&realm.new_weak_map()));
    assert!(is_weak_set(&realm.new_weak_set()));
    assert!(is_weak_ref(&realm.new_weak_ref(&target).unwrap()));
    assert!(is_data_view(&realm.new_data_view(&buf, 0, None).unwrap()));
    assert!(is_typed_array(&realm.new_typed_array(TypedArrayKind::Int32, 2).unwrap()));
    assert!(is_date(&realm.new_date(0.0)));
}

#[test]
fn test_prototype_only_fakes_fail() {
    let realm = Realm::new();
    assert!(!is_map(&realm.object_create(Some(&realm.intrinsics.map_prototype))));
    assert!(!is_set(&realm.object_create(Some(&realm.intrinsics.set_prototype))));
    assert!(!is_weak_map(&realm.object_create(Some(&realm.intrinsics.weak_map_prototype))));
    assert!(!is_weak_set(&realm.object_create(Some(&realm.intrinsics.weak_set_prototype))));
    assert!(!is_data_view(&realm.object_create(Some(&realm.intrinsics.data_view_prototype))));
    assert!(!is_date(&realm.object_create(Some(&realm.intrinsics.date_prototype))));
    if let Some(proto) = &realm.intrinsics.weak_ref_prototype {
        assert!(!is_weak_ref(&realm.object_create(Some(proto))));
    }
}

#[test]
fn test_shape_imitation_cannot_fake_a_slot() {
    let realm = Realm::new();
    let imitation = realm.new_plain_object();
    imitation.set("size", Value::number(0.0));
    imitation.set("has", realm.new_function("has"));
    imitation.set("get", realm.new_function("get"));
    imitation.set("set", realm.new_function("set"));

    assert!(!is_map(&imitation));
    assert!(!is_set(&imitation));
}

#[test]
fn test_subclass_instances_pass() {
    let realm = Realm::new();

    let sub_map_proto = realm.object_create(Some(&realm.intrinsics.map_prototype));
    let sub_map = realm.new_map(vec![(Value::string("k"), Value::Null)]);
    sub_map.set_prototype(Some(sub_map_proto));
    assert!(is_map(&sub_map));

    let sub_view_proto = realm.object_create(Some(&realm.intrinsics.data_view_prototype));
    let buf = realm.new_array_buffer(4).unwrap();
    let sub_view = realm.new_data_view(&buf, 0, None).unwrap();
    sub_view.set_prototype(Some(sub_view_proto));
    assert!(is_data_view(&sub_view));
}

#[test]
fn test_boxed_primitive_probes() {
    let realm = Realm::new();
    assert!(is_boxed_string(&realm.new_boxed_string("x")));
    assert!(is_boxed_number(&realm.new_boxed_number(1.0)));
    assert!(!is_boxed_string(&Value::string("x")));
    assert!(!is_boxed_string(&realm.object_create(Some(&realm.intrinsics.string_prototype))));
}

#[test]
fn test_probes_absorb_every_subject() {
    let realm = Realm::new();
    // No subject may panic a probe-based guard.
    let awkward = vec![
        Value::Undefined,
        Value::Null,
        Value::number(f64::NAN),
        Value::string(""),
        Value::bigint(0),
        realm.new_function("f"),
        realm.object_create(None),
    ];
    for v in &awkward {
        let _ = is_map(v);
        let _ = is_weak_ref(v);
        let _ = is_typed_array(v);
        let _ = is_boxed_number(v);
    }
}
