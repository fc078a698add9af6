//! Primitive and basic classification guards
//!
//! The leaves of the catalogue: `typeof`-level tests with no detection
//! machinery behind them.

use value_core::{FunctionFlavor, InternalSlot, Value};

/// Whether the value is `undefined`.
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// Whether the value is `null`.
pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// Whether the value is `null` or `undefined`.
pub fn is_nullish(value: &Value) -> bool {
    matches!(value, Value::Undefined | Value::Null)
}

/// Whether the value is anything other than `undefined`.
pub fn is_defined(value: &Value) -> bool {
    !is_undefined(value)
}

/// Whether the value is a boolean primitive.
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Boolean(_))
}

/// Whether the value is a number primitive.
///
/// NaN and the infinities are numbers; boxed number objects are not.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// Whether the value is a string primitive.
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Whether the value is a symbol primitive.
pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// Whether the value is a bigint primitive.
pub fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

/// Whether the value is a function object.
pub fn is_function(value: &Value) -> bool {
    value.type_of() == "function"
}

/// Whether the value can be called.
///
/// In this model every function object is callable, so this coincides
/// with [`is_function`]; it exists as the named check call sites reach for.
pub fn is_callable(value: &Value) -> bool {
    is_function(value)
}

/// Whether the value can be used with `new`.
///
/// Ordinary functions and class constructors qualify; arrow, async and
/// generator functions do not.
pub fn is_constructor(value: &Value) -> bool {
    value
        .with_slot(|slot| match slot {
            InternalSlot::Function(data) => data.flavor.is_constructable(),
            _ => false,
        })
        .unwrap_or(false)
}

/// Whether the value is a primitive (not a heap object).
pub fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Object(_))
}

/// Whether the value is a non-null object excluding functions.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_)) && value.type_of() == "object"
}

/// Whether the value is any heap object, functions included.
pub fn is_object_like(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// Whether the value can serve as a property key.
///
/// Strings and symbols are property keys; numbers qualify because they
/// coerce to string keys.
pub fn is_property_key(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Symbol(_) | Value::Number(_))
}

/// Whether the value is truthy.
pub fn is_truthy(value: &Value) -> bool {
    value.is_truthy()
}

/// Whether the value is falsy.
pub fn is_falsy(value: &Value) -> bool {
    !value.is_truthy()
}

/// Whether the value is an arrow function.
pub fn is_arrow_function(value: &Value) -> bool {
    value
        .with_slot(|slot| match slot {
            InternalSlot::Function(data) => data.flavor == FunctionFlavor::Arrow,
            _ => false,
        })
        .unwrap_or(false)
}

/// Whether the value is a class constructor.
pub fn is_class(value: &Value) -> bool {
    value
        .with_slot(|slot| match slot {
            InternalSlot::Function(data) => data.flavor == FunctionFlavor::Class,
            _ => false,
        })
        .unwrap_or(false)
}
