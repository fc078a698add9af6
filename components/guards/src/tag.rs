//! Cross-realm tagged-native detection
//!
//! Classifies a value by its generic `[object X]` string without relying on
//! prototype identity, so values constructed in another realm still
//! classify correctly. A bare string comparison is not enough: any object
//! can claim a tag through the customizable tag property, and rejecting
//! every object that has the tag property anywhere in its chain would
//! reject legitimate subclasses. The detector therefore re-checks where the
//! matching tag came from.
//!
//! The customizable tag key is resolved once through the well-known symbol
//! snapshot ([`Symbols::to_string_tag`]); it is never re-resolved through a
//! tamperable lookup path.

use std::sync::LazyLock;

use value_core::proto::ObjectProto;
use value_core::{Symbols, SymbolValue, Value};

/// The cached customizable-tag key, snapshotted at module load.
static TAG_KEY: LazyLock<SymbolValue> = LazyLock::new(Symbols::to_string_tag);

/// Options for [`tagged`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TagOptions {
    /// Accept a matching tag even when it comes from an inherited
    /// customizable tag property (custom impersonation).
    pub allow_custom: bool,
}

/// Whether a customizable tag property exists anywhere in the chain.
fn has_tag_property(value: &Value) -> bool {
    value.get_symbol(&TAG_KEY).is_some()
}

/// Whether the candidate owns the customizable tag property with exactly
/// the expected string value.
fn owns_expected_tag(value: &Value, tag: &str) -> bool {
    matches!(value.get_own_symbol(&TAG_KEY), Some(Value::String(s)) if s == tag)
}

/// Cross-realm tagged-native detector.
///
/// Returns true when the candidate's generic classification is
/// `[object <tag>]` and the match is trustworthy: either the candidate
/// explicitly self-declares the tag as an own property, or no customizable
/// tag property exists in its chain at all and the match came from the
/// intrinsic fallback. `options.allow_custom` additionally accepts
/// inherited custom tags.
pub fn tagged(value: &Value, tag: &str, options: TagOptions) -> bool {
    // Nullish candidates never reach classification.
    if matches!(value, Value::Undefined | Value::Null) {
        return false;
    }
    if ObjectProto::to_string(value) != format!("[object {}]", tag) {
        return false;
    }
    if options.allow_custom {
        return true;
    }
    owns_expected_tag(value, tag) || !has_tag_property(value)
}

/// [`tagged`] with default options.
pub fn is_tagged(value: &Value, tag: &str) -> bool {
    tagged(value, tag, TagOptions::default())
}

/// Whether the value is a genuine error object.
pub fn is_error(value: &Value) -> bool {
    is_tagged(value, "Error")
}

/// Whether the value is a genuine error object of the given kind.
pub fn is_error_kind(value: &Value, kind: value_core::ErrorKind) -> bool {
    is_error(value)
        && value
            .with_slot(|slot| match slot {
                value_core::InternalSlot::Error(data) => data.kind == kind,
                _ => false,
            })
            .unwrap_or(false)
}

/// Whether the value is a genuine promise.
pub fn is_promise(value: &Value) -> bool {
    is_tagged(value, "Promise")
}

/// Whether the value is a genuine regular expression object.
pub fn is_reg_exp(value: &Value) -> bool {
    is_tagged(value, "RegExp")
}

/// Whether the value is an arguments exotic object.
pub fn is_arguments(value: &Value) -> bool {
    is_tagged(value, "Arguments")
}
