//! Higher-order guard combinators
//!
//! Small logical glue over user-supplied predicates: conjunction,
//! disjunction, negation, and the element-checked array guard.

use value_core::{InternalSlot, Value};

/// A guard that passes when both component guards pass.
pub fn both(
    a: impl Fn(&Value) -> bool,
    b: impl Fn(&Value) -> bool,
) -> impl Fn(&Value) -> bool {
    move |value| a(value) && b(value)
}

/// A guard that passes when either component guard passes.
pub fn either(
    a: impl Fn(&Value) -> bool,
    b: impl Fn(&Value) -> bool,
) -> impl Fn(&Value) -> bool {
    move |value| a(value) || b(value)
}

/// A guard that passes when the component guard fails.
pub fn negate(a: impl Fn(&Value) -> bool) -> impl Fn(&Value) -> bool {
    move |value| !a(value)
}

/// A guard that passes for genuine arrays whose every element passes the
/// element guard. The empty array passes vacuously.
pub fn array_of(element: impl Fn(&Value) -> bool) -> impl Fn(&Value) -> bool {
    move |value| {
        value
            .with_slot(|slot| match slot {
                InternalSlot::Array(items) => items.iter().all(&element),
                _ => false,
            })
            .unwrap_or(false)
    }
}
