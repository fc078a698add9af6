//! Date guards

use value_core::proto::DateProto;
use value_core::Value;

use crate::probe::probes;

/// Whether the value is a genuine Date.
pub fn is_date(value: &Value) -> bool {
    probes(value, DateProto::get_time)
}

/// Whether the value is a Date holding a real instant (its time value is
/// not NaN).
pub fn is_valid_date(value: &Value) -> bool {
    matches!(DateProto::get_time(value), Ok(ms) if !ms.is_nan())
}
