//! Stream and disposable-resource guards
//!
//! Streams and disposables are pure shape checks: the contract is the
//! presence and callability of the protocol methods.

use value_core::{Symbols, Value};

use crate::object_kind::has_methods;
use crate::primitive::{is_callable, is_object_like};

/// Whether the value is readable-stream shaped: callable `getReader` and
/// `cancel`.
pub fn is_readable_stream(value: &Value) -> bool {
    has_methods(value, &["getReader", "cancel"])
}

/// Whether the value is writable-stream shaped: callable `getWriter`,
/// `close` and `abort`.
pub fn is_writable_stream(value: &Value) -> bool {
    has_methods(value, &["getWriter", "close", "abort"])
}

/// Whether the value is a synchronously disposable resource: an object
/// with a callable dispose hook.
pub fn is_disposable(value: &Value) -> bool {
    is_object_like(value)
        && matches!(value.get_symbol(&Symbols::dispose()), Some(v) if is_callable(&v))
}

/// Whether the value is an asynchronously disposable resource.
pub fn is_async_disposable(value: &Value) -> bool {
    is_object_like(value)
        && matches!(value.get_symbol(&Symbols::async_dispose()), Some(v) if is_callable(&v))
}
