//! Binary-data guards: buffers, typed-array views, data views

use value_core::proto::{ArrayBufferProto, DataViewProto, SharedArrayBufferProto, TypedArrayProto};
use value_core::{TypedArrayKind, Value};

use crate::probe::probes;

/// Whether the value is a genuine ArrayBuffer.
pub fn is_array_buffer(value: &Value) -> bool {
    probes(value, ArrayBufferProto::byte_length)
}

/// Whether the value is a genuine SharedArrayBuffer.
pub fn is_shared_array_buffer(value: &Value) -> bool {
    probes(value, SharedArrayBufferProto::byte_length)
}

/// Whether the value is any buffer (shared or not).
pub fn is_any_array_buffer(value: &Value) -> bool {
    is_array_buffer(value) || is_shared_array_buffer(value)
}

/// Whether the value is a genuine DataView.
pub fn is_data_view(value: &Value) -> bool {
    probes(value, DataViewProto::byte_length)
}

/// Whether the value is any typed-array view.
pub fn is_typed_array(value: &Value) -> bool {
    probes(value, TypedArrayProto::length)
}

/// Whether the value is a typed-array view of the named element kind.
///
/// The discriminator is the constructor name (`"Uint8Array"`, ...); an
/// unknown name is simply a negative answer.
pub fn is_typed_array_of(value: &Value, kind_name: &str) -> bool {
    let Some(expected) = TypedArrayKind::from_name(kind_name) else {
        return false;
    };
    matches!(TypedArrayProto::kind(value), Ok(kind) if kind == expected)
}

fn is_kind(value: &Value, expected: TypedArrayKind) -> bool {
    matches!(TypedArrayProto::kind(value), Ok(kind) if kind == expected)
}

/// Whether the value is an Int8Array.
pub fn is_int8_array(value: &Value) -> bool {
    is_kind(value, TypedArrayKind::Int8)
}

/// Whether the value is a Uint8Array.
pub fn is_uint8_array(value: &Value) -> bool {
    is_kind(value, TypedArrayKind::Uint8)
}

/// Whether the value is a Uint8ClampedArray.
pub fn is_uint8_clamped_array(value: &Value) -> bool {
    is_kind(value, TypedArrayKind::Uint8Clamped)
}

/// Whether the value is an Int16Array.
pub fn is_int16_array(value: &Value) -> bool {
    is_kind(value, TypedArrayKind::Int16)
}

/// Whether the value is a Uint16Array.
pub fn is_uint16_array(value: &Value) -> bool {
    is_kind(value, TypedArrayKind::Uint16)
}

/// Whether the value is an Int32Array.
pub fn is_int32_array(value: &Value) -> bool {
    is_kind(value, TypedArrayKind::Int32)
}

/// Whether the value is a Uint32Array.
pub fn is_uint32_array(value: &Value) -> bool {
    is_kind(value, TypedArrayKind::Uint32)
}

/// Whether the value is a Float16Array.
///
/// Realms without `Float16Array` simply never produce one, so the guard
/// reports false there without special handling.
pub fn is_float16_array(value: &Value) -> bool {
    is_kind(value, TypedArrayKind::Float16)
}

/// Whether the value is a Float32Array.
pub fn is_float32_array(value: &Value) -> bool {
    is_kind(value, TypedArrayKind::Float32)
}

/// Whether the value is a Float64Array.
pub fn is_float64_array(value: &Value) -> bool {
    is_kind(value, TypedArrayKind::Float64)
}

/// Whether the value is a BigInt64Array.
pub fn is_big_int64_array(value: &Value) -> bool {
    is_kind(value, TypedArrayKind::BigInt64)
}

/// Whether the value is a BigUint64Array.
pub fn is_big_uint64_array(value: &Value) -> bool {
    is_kind(value, TypedArrayKind::BigUint64)
}

/// Whether the value is a view over a buffer (typed array or DataView).
pub fn is_array_buffer_view(value: &Value) -> bool {
    is_typed_array(value) || is_data_view(value)
}

/// Whether the value can source binary data (a buffer or a view over one).
pub fn is_buffer_source(value: &Value) -> bool {
    is_array_buffer_view(value) || is_any_array_buffer(value)
}
