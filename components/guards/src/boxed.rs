//! Boxed-primitive guards
//!
//! Wrapper objects around primitives are detected by probing the intrinsic
//! `valueOf` of the corresponding prototype. The accessor also accepts
//! primitive receivers, so each guard first requires an actual object.

use value_core::proto::{BigIntProto, BooleanProto, NumberProto, StringProto, SymbolProto};
use value_core::Value;

use crate::primitive::is_object_like;
use crate::probe::probes;

/// Whether the value is a boxed string object.
pub fn is_boxed_string(value: &Value) -> bool {
    is_object_like(value) && probes(value, StringProto::value_of)
}

/// Whether the value is a boxed number object.
pub fn is_boxed_number(value: &Value) -> bool {
    is_object_like(value) && probes(value, NumberProto::value_of)
}

/// Whether the value is a boxed boolean object.
pub fn is_boxed_boolean(value: &Value) -> bool {
    is_object_like(value) && probes(value, BooleanProto::value_of)
}

/// Whether the value is a boxed symbol object.
pub fn is_boxed_symbol(value: &Value) -> bool {
    is_object_like(value) && probes(value, SymbolProto::value_of)
}

/// Whether the value is a boxed bigint object.
pub fn is_boxed_bigint(value: &Value) -> bool {
    is_object_like(value) && probes(value, BigIntProto::value_of)
}
