//! Symbol primitive type for the value model
//!
//! Symbols are unique, immutable primitive values usable as property keys.
//! This module implements:
//! - unique symbol creation with optional description
//! - a process-wide registry for shared symbols (`Symbols::for_key`)
//! - reverse lookup (`Symbols::key_for`)
//! - the well-known symbol table (iterator, toStringTag, dispose, ...)
//!
//! The well-known table is snapshotted once at first use and is read-only
//! thereafter; guards resolve well-known keys through this snapshot rather
//! than through any mutable lookup path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{LazyLock, Mutex};

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Global registry for shared symbols
static SYMBOL_REGISTRY: LazyLock<Mutex<HashMap<String, SymbolValue>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Well-known symbol storage
static WELL_KNOWN_SYMBOLS: LazyLock<WellKnownSymbols> = LazyLock::new(|| WellKnownSymbols {
    iterator: SymbolValue::well_known("Symbol.iterator"),
    async_iterator: SymbolValue::well_known("Symbol.asyncIterator"),
    to_string_tag: SymbolValue::well_known("Symbol.toStringTag"),
    has_instance: SymbolValue::well_known("Symbol.hasInstance"),
    species: SymbolValue::well_known("Symbol.species"),
    to_primitive: SymbolValue::well_known("Symbol.toPrimitive"),
    dispose: SymbolValue::well_known("Symbol.dispose"),
    async_dispose: SymbolValue::well_known("Symbol.asyncDispose"),
});

/// Storage for well-known symbols
struct WellKnownSymbols {
    iterator: SymbolValue,
    async_iterator: SymbolValue,
    to_string_tag: SymbolValue,
    has_instance: SymbolValue,
    species: SymbolValue,
    to_primitive: SymbolValue,
    dispose: SymbolValue,
    async_dispose: SymbolValue,
}

impl WellKnownSymbols {
    fn all(&self) -> [&SymbolValue; 8] {
        [
            &self.iterator,
            &self.async_iterator,
            &self.to_string_tag,
            &self.has_instance,
            &self.species,
            &self.to_primitive,
            &self.dispose,
            &self.async_dispose,
        ]
    }
}

/// A symbol value
///
/// Each symbol has a unique internal ID and an optional description.
/// Equality and hashing use the ID only.
#[derive(Debug, Clone)]
pub struct SymbolValue {
    /// Unique identifier for this symbol
    id: u64,
    /// Optional description for debugging
    description: Option<String>,
}

impl SymbolValue {
    fn new(description: Option<String>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::SeqCst);
        SymbolValue { id, description }
    }

    fn well_known(description: &str) -> Self {
        SymbolValue::new(Some(description.to_string()))
    }

    /// Get the unique ID of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the description of this symbol
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl std::fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(desc) if !desc.is_empty() => write!(f, "Symbol({})", desc),
            _ => write!(f, "Symbol()"),
        }
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SymbolValue {}

impl std::hash::Hash for SymbolValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Symbol factory and registry operations
///
/// Provides unique symbol creation, the shared-symbol registry, and access
/// to the well-known symbols.
pub struct Symbols;

impl Symbols {
    /// Create a new unique symbol with optional description
    ///
    /// Each call creates a symbol with a fresh ID, even for equal
    /// descriptions.
    pub fn unique(description: Option<String>) -> SymbolValue {
        SymbolValue::new(description)
    }

    /// Get or create a symbol in the global registry
    ///
    /// Looks up an existing registered symbol under `key`; creates and
    /// registers one if absent.
    pub fn for_key(key: &str) -> SymbolValue {
        let mut registry = SYMBOL_REGISTRY.lock().unwrap();

        if let Some(sym) = registry.get(key) {
            sym.clone()
        } else {
            let sym = SymbolValue::new(Some(key.to_string()));
            registry.insert(key.to_string(), sym.clone());
            sym
        }
    }

    /// Get the registry key for a registered symbol
    ///
    /// Returns `None` for symbols not created via [`Symbols::for_key`].
    pub fn key_for(symbol: &SymbolValue) -> Option<String> {
        let registry = SYMBOL_REGISTRY.lock().unwrap();

        for (key, sym) in registry.iter() {
            if sym.id() == symbol.id() {
                return Some(key.clone());
            }
        }
        None
    }

    /// Whether the symbol lives in the shared registry
    pub fn is_registered(symbol: &SymbolValue) -> bool {
        let registry = SYMBOL_REGISTRY.lock().unwrap();
        registry.values().any(|sym| sym.id() == symbol.id())
    }

    /// Whether the symbol is one of the well-known symbols
    pub fn is_well_known(symbol: &SymbolValue) -> bool {
        WELL_KNOWN_SYMBOLS
            .all()
            .iter()
            .any(|sym| sym.id() == symbol.id())
    }

    // Well-known symbols

    /// The well-known symbol keying the default iterator method
    pub fn iterator() -> SymbolValue {
        WELL_KNOWN_SYMBOLS.iterator.clone()
    }

    /// The well-known symbol keying the async iterator method
    pub fn async_iterator() -> SymbolValue {
        WELL_KNOWN_SYMBOLS.async_iterator.clone()
    }

    /// The well-known symbol keying the customizable class tag
    pub fn to_string_tag() -> SymbolValue {
        WELL_KNOWN_SYMBOLS.to_string_tag.clone()
    }

    /// The well-known symbol keying instanceof customization
    pub fn has_instance() -> SymbolValue {
        WELL_KNOWN_SYMBOLS.has_instance.clone()
    }

    /// The well-known symbol keying derived-constructor selection
    pub fn species() -> SymbolValue {
        WELL_KNOWN_SYMBOLS.species.clone()
    }

    /// The well-known symbol keying primitive conversion
    pub fn to_primitive() -> SymbolValue {
        WELL_KNOWN_SYMBOLS.to_primitive.clone()
    }

    /// The well-known symbol keying synchronous resource disposal
    pub fn dispose() -> SymbolValue {
        WELL_KNOWN_SYMBOLS.dispose.clone()
    }

    /// The well-known symbol keying asynchronous resource disposal
    pub fn async_dispose() -> SymbolValue {
        WELL_KNOWN_SYMBOLS.async_dispose.clone()
    }
}
