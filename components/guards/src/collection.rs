//! Keyed-collection guards
//!
//! Map, Set and the weak collections have no customizable tag, so they are
//! identified by probing intrinsic prototype accessors: the accessor throws
//! a type violation exactly when the receiver lacks the internal slot,
//! which ordinary object construction cannot fake.

use value_core::proto::{MapProto, SetProto, WeakMapProto, WeakRefProto, WeakSetProto};
use value_core::Value;

use crate::probe::probes;

/// Whether the value is a genuine Map.
pub fn is_map(value: &Value) -> bool {
    probes(value, MapProto::size)
}

/// Whether the value is a genuine Set.
pub fn is_set(value: &Value) -> bool {
    probes(value, SetProto::size)
}

/// Whether the value is a genuine WeakMap.
pub fn is_weak_map(value: &Value) -> bool {
    probes(value, |v| WeakMapProto::has(v, &Value::Undefined))
}

/// Whether the value is a genuine WeakSet.
pub fn is_weak_set(value: &Value) -> bool {
    probes(value, |v| WeakSetProto::has(v, &Value::Undefined))
}

/// Whether the value is a genuine WeakRef.
pub fn is_weak_ref(value: &Value) -> bool {
    probes(value, WeakRefProto::deref)
}

/// Whether the value can be held weakly (used as a WeakMap key, WeakSet
/// member, or WeakRef target).
///
/// Objects and unregistered symbols qualify.
pub fn is_weak_key(value: &Value) -> bool {
    value.weak_key().is_some()
}
