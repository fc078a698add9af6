//! The prototype-probe failure boundary
//!
//! Detection by probing works by invoking an intrinsic prototype accessor
//! against the candidate and treating an internal-slot violation as the
//! negative answer. The exception is signal, not failure, so it must be
//! absorbed here and never reach the caller.

use value_core::{Value, ValueResult};

/// Invoke an intrinsic prototype accessor against `candidate` and classify
/// by whether it succeeds.
///
/// The accessor must come from the intrinsic prototype surface
/// (`value_core::proto`), never from the candidate itself, so that the
/// candidate's own shadowing properties cannot influence the outcome.
pub(crate) fn probes<T>(candidate: &Value, accessor: impl FnOnce(&Value) -> ValueResult<T>) -> bool {
    accessor(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use value_core::proto::MapProto;
    use value_core::Realm;

    #[test]
    fn test_probe_converts_violation_to_false() {
        let realm = Realm::new();
        assert!(probes(&realm.new_map(vec![]), MapProto::size));
        assert!(!probes(&realm.new_plain_object(), MapProto::size));
        assert!(!probes(&Value::Undefined, MapProto::size));
    }
}
