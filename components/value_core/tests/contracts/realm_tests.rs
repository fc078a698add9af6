//! Contract tests for realms and intrinsic wiring

use value_core::{Realm, RealmOptions, Symbols, TypedArrayKind, Value};

#[test]
fn test_two_realms_share_no_prototype_identity() {
    let a = Realm::new();
    let b = Realm::new();

    let protos = |r: &Realm| {
        vec![
            r.intrinsics.object_prototype.clone(),
            r.intrinsics.array_prototype.clone(),
            r.intrinsics.map_prototype.clone(),
            r.intrinsics.promise_prototype.clone(),
        ]
    };
    for (pa, pb) in protos(&a).iter().zip(protos(&b).iter()) {
        assert_ne!(pa.object_identity(), pb.object_identity());
    }
}

#[test]
fn test_cross_realm_instances_carry_their_own_prototypes() {
    let a = Realm::new();
    let b = Realm::new();
    let map_b = b.new_map(vec![]);

    assert!(map_b.has_in_prototype_chain(&b.intrinsics.map_prototype));
    assert!(!map_b.has_in_prototype_chain(&a.intrinsics.map_prototype));
    // Class stays recognizable regardless of realm.
    assert_eq!(map_b.class_of(), "Map");
}

#[test]
fn test_subclass_instances_keep_their_slot() {
    let realm = Realm::new();
    let subclass_proto = realm.object_create(Some(&realm.intrinsics.set_prototype));
    let instance = realm.new_set(vec![Value::number(1.0)]);
    instance.set_prototype(Some(subclass_proto.clone()));

    assert!(instance.has_in_prototype_chain(&subclass_proto));
    assert!(instance.has_in_prototype_chain(&realm.intrinsics.set_prototype));
    assert_eq!(instance.class_of(), "Set");
}

#[test]
fn test_reduced_realm_feature_gaps() {
    let realm = Realm::with_options(RealmOptions {
        weak_refs: false,
        float16_arrays: false,
        shared_buffers: false,
    });
    assert!(realm.intrinsics.weak_ref_prototype.is_none());
    assert!(realm.intrinsics.shared_array_buffer_prototype.is_none());
    assert!(realm.new_shared_array_buffer(8).is_err());
    assert!(realm.new_typed_array(TypedArrayKind::Float16, 1).is_err());
}

#[test]
fn test_promise_prototype_is_thenable_shaped() {
    let realm = Realm::new();
    let promise = realm.new_promise(value_core::PromiseState::Pending);
    let then = promise.get("then").expect("then is inherited");
    assert_eq!(then.type_of(), "function");
}

#[test]
fn test_disposable_helpers_install_hooks() {
    let realm = Realm::new();
    let disposable = realm.new_disposable();
    let hook = disposable.get_symbol(&Symbols::dispose()).unwrap();
    assert_eq!(hook.type_of(), "function");
    assert!(disposable.get_symbol(&Symbols::async_dispose()).is_none());
}
