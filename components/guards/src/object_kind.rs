//! Object-shape guards: arrays, array-likes, plain objects, shape checks

use value_core::{InternalSlot, Value};

use crate::numeric::MAX_SAFE_INTEGER;
use crate::primitive::{is_callable, is_object_like};

/// Whether the value is a genuine array.
///
/// The intrinsic array check: reads the internal slot directly, the way a
/// host's `Array.isArray` does, so it holds across realms and through
/// subclassing.
pub fn is_array(value: &Value) -> bool {
    value
        .with_slot(|slot| matches!(slot, InternalSlot::Array(_)))
        .unwrap_or(false)
}

/// A length value acceptable for an array-like: a non-negative safe integer.
fn is_valid_length(length: f64) -> bool {
    length >= 0.0 && length.trunc() == length && length <= MAX_SAFE_INTEGER
}

/// Whether the value is array-like: it carries a usable non-negative
/// integer `length`.
///
/// Strings, arrays, arguments objects and typed arrays qualify, as does any
/// object exposing a suitable `length` property. Functions never do.
pub fn is_array_like(value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        Value::Object(_) => {
            if is_callable(value) {
                return false;
            }
            let length = value
                .with_slot(|slot| match slot {
                    InternalSlot::Array(items) | InternalSlot::Arguments(items) => {
                        Some(items.len() as f64)
                    }
                    InternalSlot::TypedArray(view) => Some(view.length as f64),
                    _ => None,
                })
                .flatten()
                .or_else(|| value.get("length").and_then(|l| l.as_number()));
            matches!(length, Some(len) if is_valid_length(len))
        }
        _ => false,
    }
}

/// Whether the value is an array-like object (excludes strings).
pub fn is_array_like_object(value: &Value) -> bool {
    is_object_like(value) && is_array_like(value)
}

/// Whether the value is a plain object: no internal slot, and a prototype
/// that is either null or itself a bare terminal object.
///
/// `Object.create(null)` descendants and ordinary object literals qualify;
/// class instances, arrays and every slotted built-in do not.
pub fn is_plain_object(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    if obj.borrow().slot.is_some() {
        return false;
    }
    match value.prototype() {
        None => true,
        Some(proto) => match proto.as_object() {
            // The chain must end right here, at a bare object prototype.
            Some(proto_obj) => {
                proto_obj.borrow().slot.is_none() && proto.prototype().is_none()
            }
            None => false,
        },
    }
}

/// Whether the value is a plain object with no own properties.
pub fn is_empty_object(value: &Value) -> bool {
    match value.as_object() {
        Some(obj) if is_plain_object(value) => {
            let borrowed = obj.borrow();
            borrowed.properties.is_empty() && borrowed.symbol_properties.is_empty()
        }
        _ => false,
    }
}

/// Whether `prototype` appears in the value's prototype chain.
///
/// This is the identity-sensitive check the tag and probe detectors exist
/// to avoid: it answers false for otherwise-identical values from another
/// realm. It is still the right tool when the caller holds the intended
/// prototype itself.
pub fn is_instance_of(value: &Value, prototype: &Value) -> bool {
    value.has_in_prototype_chain(prototype)
}

/// Whether every named key is present (own or inherited).
pub fn has_keys(value: &Value, keys: &[&str]) -> bool {
    is_object_like(value) && keys.iter().all(|key| value.get(key).is_some())
}

/// Whether every named key is present and callable.
pub fn has_methods(value: &Value, keys: &[&str]) -> bool {
    is_object_like(value)
        && keys
            .iter()
            .all(|key| matches!(value.get(key), Some(v) if is_callable(&v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use value_core::Realm;

    #[test]
    fn test_is_array() {
        let realm = Realm::new();
        assert!(is_array(&realm.new_array(vec![])));
        assert!(!is_array(&realm.new_plain_object()));
        assert!(!is_array(&realm.object_create(Some(&realm.intrinsics.array_prototype))));
        // Cross-realm arrays still count.
        assert!(is_array(&Realm::new().new_array(vec![Value::number(1.0)])));
    }

    #[test]
    fn test_array_like_shapes() {
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

        let unbounded = realm.new_plain_object();
        unbounded.set("length", Value::number(f64::INFINITY));
        assert!(!is_array_like(&unbounded));

        let fractional = realm.new_plain_object();
        fractional.set("length", Value::number(1.5));
        assert!(!is_array_like(&fractional));
    }

    #[test]
    fn test_array_like_builtins() {
        let realm = Realm::new();
        assert!(is_array_like(&Value::string("abc")));
        assert!(is_array_like(&realm.new_array(vec![])));
        assert!(is_array_like(&realm.new_arguments(vec![Value::Null])));
        assert!(is_array_like(
            &realm.new_typed_array(value_core::TypedArrayKind::Uint8, 4).unwrap()
        ));
        assert!(!is_array_like(&realm.new_function("f")));
        assert!(!is_array_like(&Value::number(3.0)));
    }

    #[test]
    fn test_array_like_object_excludes_strings() {
        let realm = Realm::new();
        assert!(!is_array_like_object(&Value::string("abc")));
        assert!(is_array_like_object(&realm.new_array(vec![])));
    }

    #[test]
    fn test_plain_object() {
        let realm = Realm::new();
        assert!(is_plain_object(&realm.new_plain_object()));
        assert!(is_plain_object(&realm.object_create(None)));
        assert!(!is_plain_object(&realm.new_array(vec![])));

        // A class instance inherits through a constructor prototype whose
        // own chain keeps going, so it is not plain.
        let class_proto = realm.new_plain_object();
        let instance = realm.object_create(Some(&class_proto));
        assert!(!is_plain_object(&instance));
    }

    #[test]
    fn test_empty_object() {
        let realm = Realm::new();
        let obj = realm.new_plain_object();
        assert!(is_empty_object(&obj));
        obj.set("k", Value::Null);
        assert!(!is_empty_object(&obj));
        assert!(!is_empty_object(&realm.new_array(vec![])));
    }

    #[test]
    fn test_instance_of_is_realm_bound() {
        let a = Realm::new();
        let b = Realm::new();
        let map = a.new_map(vec![]);
        assert!(is_instance_of(&map, &a.intrinsics.map_prototype));
        assert!(!is_instance_of(&map, &b.intrinsics.map_prototype));
    }

    #[test]
    fn test_has_keys_and_methods() {
        let realm = Realm::new();
        let obj = realm.new_plain_object();
        obj.set("read", realm.new_function("read"));
        obj.set("size", Value::number(0.0));

        assert!(has_keys(&obj, &["read", "size"]));
        assert!(!has_keys(&obj, &["read", "missing"]));
        assert!(has_methods(&obj, &["read"]));
        assert!(!has_methods(&obj, &["read", "size"]));
        assert!(!has_methods(&Value::Null, &["read"]));
    }
}
