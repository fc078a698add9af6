//! Identifier, reserved-word and symbol-kind guards
//!
//! The reserved-word table and identifier pattern are process-wide
//! read-only state, compiled once at first use.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use value_core::{Symbols, Value};

/// ASCII identifier pattern: leading letter, `_` or `$`, then the same
/// plus digits.
static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("static pattern compiles"));

/// Reserved words, including strict-mode and contextual reservations.
static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
        "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
        "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
        "true", "try", "typeof", "var", "void", "while", "with",
        // strict mode
        "implements", "interface", "let", "package", "private", "protected", "public", "static",
        "yield",
        // contextual
        "await",
    ]
    .into_iter()
    .collect()
});

/// Whether the value is a string naming a reserved word.
pub fn is_reserved_word(value: &Value) -> bool {
    matches!(value, Value::String(s) if RESERVED_WORDS.contains(s.as_str()))
}

/// Whether the value is a string usable as an identifier: it matches the
/// identifier pattern and is not reserved.
pub fn is_identifier(value: &Value) -> bool {
    match value {
        Value::String(s) => IDENTIFIER_RE.is_match(s) && !RESERVED_WORDS.contains(s.as_str()),
        _ => false,
    }
}

/// Whether the value is one of the well-known symbols.
pub fn is_well_known_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(sym) if Symbols::is_well_known(sym))
}

/// Whether the value is a symbol from the shared registry.
pub fn is_registered_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(sym) if Symbols::is_registered(sym))
}

/// Whether the value is a unique symbol: neither well-known nor registered.
pub fn is_unique_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(sym)
        if !Symbols::is_well_known(sym) && !Symbols::is_registered(sym))
}
