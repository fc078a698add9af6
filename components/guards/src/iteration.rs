//! Iteration-protocol guards
//!
//! Iterables, iterators and generators are identified structurally: the
//! protocol is defined by the presence and callability of its methods, not
//! by any internal slot. Generator *objects* additionally carry a class
//! tag, which the detector uses to tell them apart from hand-written
//! iterators.

use value_core::{FunctionFlavor, InternalSlot, Symbols, Value};

use crate::primitive::{is_callable, is_object_like};
use crate::tag::is_tagged;

fn has_callable(value: &Value, key: &str) -> bool {
    matches!(value.get(key), Some(v) if is_callable(&v))
}

fn has_callable_symbol(value: &Value, sym: &value_core::SymbolValue) -> bool {
    matches!(value.get_symbol(sym), Some(v) if is_callable(&v))
}

/// Whether the value can be iterated: a string, or an object with a
/// callable iterator key.
pub fn is_iterable(value: &Value) -> bool {
    match value {
        Value::String(_) => true,
        Value::Object(_) => has_callable_symbol(value, &Symbols::iterator()),
        _ => false,
    }
}

/// Whether the value can be iterated asynchronously.
pub fn is_async_iterable(value: &Value) -> bool {
    is_object_like(value) && has_callable_symbol(value, &Symbols::async_iterator())
}

/// Whether the value is iterator-shaped: an object with a callable `next`.
pub fn is_iterator(value: &Value) -> bool {
    is_object_like(value) && has_callable(value, "next")
}

/// Whether the value is an async-iterator shape: a callable `next` plus
/// either an async iterator key or the async generator class.
pub fn is_async_iterator(value: &Value) -> bool {
    is_iterator(value)
        && (has_callable_symbol(value, &Symbols::async_iterator())
            || is_tagged(value, "AsyncGenerator"))
}

/// Whether the value is both iterable and an iterator (the shape
/// generators and most built-in iterators present).
pub fn is_iterable_iterator(value: &Value) -> bool {
    is_iterator(value) && is_iterable(value)
}

/// Whether the value is an iterator-result shape: an object with a boolean
/// `done`.
pub fn is_iterator_result(value: &Value) -> bool {
    is_object_like(value) && matches!(value.get("done"), Some(Value::Boolean(_)))
}

/// Whether the value is a genuine generator object.
pub fn is_generator(value: &Value) -> bool {
    is_tagged(value, "Generator") && is_iterator(value)
}

/// Whether the value is a genuine async generator object.
pub fn is_async_generator(value: &Value) -> bool {
    is_tagged(value, "AsyncGenerator") && is_iterator(value)
}

fn has_flavor(value: &Value, flavor: FunctionFlavor) -> bool {
    value
        .with_slot(|slot| match slot {
            InternalSlot::Function(data) => data.flavor == flavor,
            _ => false,
        })
        .unwrap_or(false)
}

/// Whether the value is a generator function.
pub fn is_generator_function(value: &Value) -> bool {
    has_flavor(value, FunctionFlavor::Generator)
}

/// Whether the value is an async function.
pub fn is_async_function(value: &Value) -> bool {
    has_flavor(value, FunctionFlavor::Async)
}

/// Whether the value is an async generator function.
pub fn is_async_generator_function(value: &Value) -> bool {
    has_flavor(value, FunctionFlavor::AsyncGenerator)
}
