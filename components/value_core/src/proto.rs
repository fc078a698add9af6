//! Intrinsic prototype accessors
//!
//! Each accessor takes its receiver explicitly, the way an uncurried
//! prototype method would, and checks the receiver's internal slot before
//! touching any state. A receiver without the required slot produces a
//! type violation - which is exactly the signal the prototype-probe
//! detection technique converts into a negative classification.
//!
//! Accessors are resolved from this module, never from the candidate
//! object, so a candidate's own shadowing properties cannot influence the
//! outcome.

use num_bigint::BigInt;

use crate::binary::TypedArrayKind;
use crate::error::{ValueError, ValueResult};
use crate::symbol::SymbolValue;
use crate::value::{InternalSlot, Value};

fn slot_violation(what: &str) -> ValueError {
    ValueError::type_violation(format!("receiver is not a {}", what))
}

/// `Object.prototype` operations
pub struct ObjectProto;

impl ObjectProto {
    /// The generic `[object X]` classification of any value
    ///
    /// An own-or-inherited customizable tag property with a string value
    /// wins; everything else falls back to the intrinsic class derived
    /// from the internal slot (or the boxed-wrapper class for primitives).
    pub fn to_string(value: &Value) -> String {
        let tag = crate::symbol::Symbols::to_string_tag();
        if let Some(Value::String(custom)) = value.get_symbol(&tag) {
            return format!("[object {}]", custom);
        }
        format!("[object {}]", value.class_of())
    }
}

/// `Map.prototype` operations
pub struct MapProto;

impl MapProto {
    /// The `size` accessor
    pub fn size(receiver: &Value) -> ValueResult<usize> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::Map(data) => Some(data.size()),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("Map"))
    }

    /// The `has` method
    pub fn has(receiver: &Value, key: &Value) -> ValueResult<bool> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::Map(data) => Some(data.has(key)),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("Map"))
    }

    /// The `get` method
    pub fn get(receiver: &Value, key: &Value) -> ValueResult<Value> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::Map(data) => Some(data.get(key).unwrap_or(Value::Undefined)),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("Map"))
    }

    /// The `set` method
    pub fn set(receiver: &Value, key: Value, value: Value) -> ValueResult<()> {
        receiver
            .with_slot_mut(|slot| match slot {
                InternalSlot::Map(data) => {
                    data.set(key, value);
                    Some(())
                }
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("Map"))
    }
}

/// `Set.prototype` operations
pub struct SetProto;

impl SetProto {
    /// The `size` accessor
    pub fn size(receiver: &Value) -> ValueResult<usize> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::Set(data) => Some(data.size()),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("Set"))
    }

    /// The `has` method
    pub fn has(receiver: &Value, value: &Value) -> ValueResult<bool> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::Set(data) => Some(data.has(value)),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("Set"))
    }

    /// The `add` method
    pub fn add(receiver: &Value, value: Value) -> ValueResult<()> {
        receiver
            .with_slot_mut(|slot| match slot {
                InternalSlot::Set(data) => {
                    data.add(value);
                    Some(())
                }
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("Set"))
    }
}

/// `WeakMap.prototype` operations
pub struct WeakMapProto;

impl WeakMapProto {
    /// The `has` method
    pub fn has(receiver: &Value, key: &Value) -> ValueResult<bool> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::WeakMap(data) => Some(data.has(key)),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("WeakMap"))
    }

    /// The `set` method; invalid keys are a type violation
    pub fn set(receiver: &Value, key: &Value, value: Value) -> ValueResult<()> {
        let inserted = receiver
            .with_slot_mut(|slot| match slot {
                InternalSlot::WeakMap(data) => Some(data.set(key, value)),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("WeakMap"))?;
        if inserted {
            Ok(())
        } else {
            Err(ValueError::type_violation(
                "Invalid value used as weak map key",
            ))
        }
    }
}

/// `WeakSet.prototype` operations
pub struct WeakSetProto;

impl WeakSetProto {
    /// The `has` method
    pub fn has(receiver: &Value, value: &Value) -> ValueResult<bool> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::WeakSet(data) => Some(data.has(value)),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("WeakSet"))
    }

    /// The `add` method; invalid values are a type violation
    pub fn add(receiver: &Value, value: &Value) -> ValueResult<()> {
        let inserted = receiver
            .with_slot_mut(|slot| match slot {
                InternalSlot::WeakSet(data) => Some(data.add(value)),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("WeakSet"))?;
        if inserted {
            Ok(())
        } else {
            Err(ValueError::type_violation(
                "Invalid value used in weak set",
            ))
        }
    }
}

/// `WeakRef.prototype` operations
pub struct WeakRefProto;

impl WeakRefProto {
    /// The `deref` method; returns undefined once the target is collected
    pub fn deref(receiver: &Value) -> ValueResult<Value> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::WeakRef(data) => Some(data.deref().unwrap_or(Value::Undefined)),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("WeakRef"))
    }
}

/// `DataView.prototype` operations
pub struct DataViewProto;

impl DataViewProto {
    /// The `byteLength` accessor
    pub fn byte_length(receiver: &Value) -> ValueResult<usize> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::DataView(data) => Some(data.byte_length),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("DataView"))
    }

    /// The `byteOffset` accessor
    pub fn byte_offset(receiver: &Value) -> ValueResult<usize> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::DataView(data) => Some(data.byte_offset),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("DataView"))
    }
}

/// `%TypedArray%.prototype` operations, shared by every element kind
pub struct TypedArrayProto;

impl TypedArrayProto {
    /// The `length` accessor
    pub fn length(receiver: &Value) -> ValueResult<usize> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::TypedArray(view) => Some(view.length),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("TypedArray"))
    }

    /// The element kind of the view (the `toStringTag` getter's source)
    pub fn kind(receiver: &Value) -> ValueResult<TypedArrayKind> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::TypedArray(view) => Some(view.kind),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("TypedArray"))
    }
}

/// `ArrayBuffer.prototype` operations
pub struct ArrayBufferProto;

impl ArrayBufferProto {
    /// The `byteLength` accessor; shared buffers do not answer it
    pub fn byte_length(receiver: &Value) -> ValueResult<usize> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::ArrayBuffer(data) => Some(data.byte_length()),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("ArrayBuffer"))
    }
}

/// `SharedArrayBuffer.prototype` operations
pub struct SharedArrayBufferProto;

impl SharedArrayBufferProto {
    /// The `byteLength` accessor; non-shared buffers do not answer it
    pub fn byte_length(receiver: &Value) -> ValueResult<usize> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::SharedArrayBuffer(data) => Some(data.byte_length()),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("SharedArrayBuffer"))
    }
}

/// `Date.prototype` operations
pub struct DateProto;

impl DateProto {
    /// The `getTime` method
    pub fn get_time(receiver: &Value) -> ValueResult<f64> {
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::Date(ms) => Some(*ms),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("Date"))
    }
}

/// `String.prototype` operations
pub struct StringProto;

impl StringProto {
    /// The `valueOf` method; accepts string primitives and boxed strings
    pub fn value_of(receiver: &Value) -> ValueResult<String> {
        if let Value::String(s) = receiver {
            return Ok(s.clone());
        }
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::BoxedString(s) => Some(s.clone()),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("String"))
    }
}

/// `Number.prototype` operations
pub struct NumberProto;

impl NumberProto {
    /// The `valueOf` method; accepts number primitives and boxed numbers
    pub fn value_of(receiver: &Value) -> ValueResult<f64> {
        if let Value::Number(n) = receiver {
            return Ok(*n);
        }
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::BoxedNumber(n) => Some(*n),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("Number"))
    }
}

/// `Boolean.prototype` operations
pub struct BooleanProto;

impl BooleanProto {
    /// The `valueOf` method; accepts boolean primitives and boxed booleans
    pub fn value_of(receiver: &Value) -> ValueResult<bool> {
        if let Value::Boolean(b) = receiver {
            return Ok(*b);
        }
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::BoxedBoolean(b) => Some(*b),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("Boolean"))
    }
}

/// `Symbol.prototype` operations
pub struct SymbolProto;

impl SymbolProto {
    /// The `valueOf` method; accepts symbol primitives and boxed symbols
    pub fn value_of(receiver: &Value) -> ValueResult<SymbolValue> {
        if let Value::Symbol(sym) = receiver {
            return Ok(sym.clone());
        }
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::BoxedSymbol(sym) => Some(sym.clone()),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("Symbol"))
    }
}

/// `BigInt.prototype` operations
pub struct BigIntProto;

impl BigIntProto {
    /// The `valueOf` method; accepts bigint primitives and boxed bigints
    pub fn value_of(receiver: &Value) -> ValueResult<BigInt> {
        if let Value::BigInt(n) = receiver {
            return Ok(n.clone());
        }
        receiver
            .with_slot(|slot| match slot {
                InternalSlot::BoxedBigInt(n) => Some(n.clone()),
                _ => None,
            })
            .flatten()
            .ok_or_else(|| slot_violation("BigInt"))
    }
}
