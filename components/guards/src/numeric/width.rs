//! Bit-width range predicates
//!
//! Each predicate narrows the integer check by one range comparison. The
//! 64-bit predicates clamp to the safe-integer range for f64 subjects,
//! since wider integers cannot be represented exactly; exact 64-bit range
//! checks for bigint subjects live at the value level.

use super::real;

fn int_in_range(x: f64, min: f64, max: f64) -> bool {
    real::is_integer(x) && x >= min && x <= max
}

/// Whether the number is an integer in the i8 range.
pub fn is_int8(x: f64) -> bool {
    int_in_range(x, i8::MIN as f64, i8::MAX as f64)
}

/// Whether the number is an integer in the u8 range.
pub fn is_uint8(x: f64) -> bool {
    int_in_range(x, 0.0, u8::MAX as f64)
}

/// Whether the number is an integer in the i16 range.
pub fn is_int16(x: f64) -> bool {
    int_in_range(x, i16::MIN as f64, i16::MAX as f64)
}

/// Whether the number is an integer in the u16 range.
pub fn is_uint16(x: f64) -> bool {
    int_in_range(x, 0.0, u16::MAX as f64)
}

/// Whether the number is an integer in the i32 range.
pub fn is_int32(x: f64) -> bool {
    int_in_range(x, i32::MIN as f64, i32::MAX as f64)
}

/// Whether the number is an integer in the u32 range.
pub fn is_uint32(x: f64) -> bool {
    int_in_range(x, 0.0, u32::MAX as f64)
}

/// Whether the number is a 64-bit-representable integer, i.e. a safe
/// integer for f64 subjects.
pub fn is_int64(x: f64) -> bool {
    real::is_safe_integer(x)
}

/// Whether the number is a non-negative 64-bit-representable integer.
pub fn is_uint64(x: f64) -> bool {
    real::is_safe_integer(x) && x >= 0.0
}
