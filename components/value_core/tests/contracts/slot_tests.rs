//! Contract tests for internal-slot semantics
//!
//! Internal slots exist only on genuinely constructed instances; the
//! prototype accessors must reject everything else.

use value_core::proto::{
    DataViewProto, DateProto, MapProto, NumberProto, ObjectProto, SetProto, StringProto,
    TypedArrayProto, WeakMapProto, WeakRefProto, WeakSetProto,
};
use value_core::{Realm, Symbols, TypedArrayKind, Value};

#[test]
fn test_prototype_only_fakes_fail_every_probe() {
    let realm = Realm::new();

    let fake_map = realm.object_create(Some(&realm.intrinsics.map_prototype));
    let fake_set = realm.object_create(Some(&realm.intrinsics.set_prototype));
    let fake_weak_map = realm.object_create(Some(&realm.intrinsics.weak_map_prototype));
    let fake_weak_set = realm.object_create(Some(&realm.intrinsics.weak_set_prototype));
    let fake_view = realm.object_create(Some(&realm.intrinsics.data_view_prototype));

    let key = realm.new_plain_object();
    assert!(MapProto::size(&fake_map).is_err());
    assert!(SetProto::size(&fake_set).is_err());
    assert!(WeakMapProto::has(&fake_weak_map, &key).is_err());
    assert!(WeakSetProto::has(&fake_weak_set, &key).is_err());
    assert!(DataViewProto::byte_length(&fake_view).is_err());
}

#[test]
fn test_genuine_instances_pass_probes() {
    let realm = Realm::new();
    let key = realm.new_plain_object();

    assert_eq!(MapProto::size(&realm.new_map(vec![])).unwrap(), 0);
    assert_eq!(SetProto::size(&realm.new_set(vec![])).unwrap(), 0);
    assert!(!WeakMapProto::has(&realm.new_weak_map(), &key).unwrap());
    assert!(!WeakSetProto::has(&realm.new_weak_set(), &key).unwrap());

    let buf = realm.new_array_buffer(8).unwrap();
    let view = realm.new_data_view(&buf, 2, Some(4)).unwrap();
    assert_eq!(DataViewProto::byte_length(&view).unwrap(), 4);
    assert_eq!(DataViewProto::byte_offset(&view).unwrap(), 2);
}

#[test]
fn test_weak_ref_deref_follows_target_lifetime() {
    let realm = Realm::new();
    let target = realm.new_plain_object();
    let weak_ref = realm.new_weak_ref(&target).unwrap();

    assert_eq!(
        WeakRefProto::deref(&weak_ref).unwrap().object_identity(),
        target.object_identity()
    );
    drop(target);
    assert_eq!(WeakRefProto::deref(&weak_ref).unwrap(), Value::Undefined);
}

#[test]
fn test_typed_array_accessors() {
    let realm = Realm::new();
    let arr = realm.new_typed_array(TypedArrayKind::Uint8, 4).unwrap();
    assert_eq!(TypedArrayProto::length(&arr).unwrap(), 4);
    assert_eq!(TypedArrayProto::kind(&arr).unwrap(), TypedArrayKind::Uint8);
    assert_eq!(arr.class_of(), "Uint8Array");
    assert!(TypedArrayProto::length(&realm.new_plain_object()).is_err());
}

#[test]
fn test_boxed_wrappers_answer_value_of() {
    let realm = Realm::new();
    assert_eq!(
        StringProto::value_of(&realm.new_boxed_string("abc")).unwrap(),
        "abc"
    );
    assert_eq!(
        NumberProto::value_of(&realm.new_boxed_number(4.5)).unwrap(),
        4.5
    );
    // A boxed string is not a boxed number.
    assert!(NumberProto::value_of(&realm.new_boxed_string("abc")).is_err());
}

#[test]
fn test_date_probe() {
    let realm = Realm::new();
    let date = realm.new_date(1_700_000_000_000.0);
    assert_eq!(DateProto::get_time(&date).unwrap(), 1_700_000_000_000.0);
    let fake = realm.object_create(Some(&realm.intrinsics.date_prototype));
    assert!(DateProto::get_time(&fake).is_err());
}

#[test]
fn test_classification_string_sources() {
    let realm = Realm::new();
    assert_eq!(
        ObjectProto::to_string(&realm.new_array(vec![])),
        "[object Array]"
    );
    assert_eq!(
        ObjectProto::to_string(&realm.new_promise(value_core::PromiseState::Pending)),
        "[object Promise]"
    );

    // A spoofed tag changes the classification string; the guard layer is
    // responsible for seeing through it.
    let impostor = realm.new_plain_object();
    impostor.set_symbol(&Symbols::to_string_tag(), Value::string("Promise"));
    assert_eq!(ObjectProto::to_string(&impostor), "[object Promise]");
}
