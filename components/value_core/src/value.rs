//! Dynamic value representation
//!
//! This module provides the `Value` enum for all values of the host object
//! model. Primitives are stored inline; every heap object is a single
//! `ObjectData` carrying a prototype reference, string- and symbol-keyed
//! properties, and an optional engine-private [`InternalSlot`].
//!
//! The one-representation design is deliberate: class membership is a
//! property of the internal slot, not of the Rust-level variant, so the
//! model can express the adversarial shapes the guard catalogue has to
//! handle — an object whose prototype is `Map.prototype` but which carries
//! no Map slot, or a plain object that fakes its class tag through the
//! customizable tag property.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::{Rc, Weak};

use num_bigint::BigInt;
use num_traits::Zero;

use crate::binary::{DataViewData, TypedArrayData};
use crate::symbol::{SymbolValue, Symbols};

/// Shared handle to an object's internal state
pub type ObjectRef = Rc<RefCell<ObjectData>>;

/// Upper bound on prototype-chain walks.
///
/// Chains longer than this are treated as absent lookups so that a
/// maliciously cyclic chain cannot hang a guard.
const PROTO_CHAIN_LIMIT: usize = 128;

/// A value of the host object model
#[derive(Debug, Clone)]
pub enum Value {
    /// undefined
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// Arbitrary-precision integer
    BigInt(BigInt),
    /// String value
    String(String),
    /// Symbol value
    Symbol(SymbolValue),
    /// Heap object
    Object(ObjectRef),
}

/// Internal state of a heap object
#[derive(Debug, Clone)]
pub struct ObjectData {
    /// String-keyed properties
    pub properties: HashMap<String, Value>,
    /// Symbol-keyed properties
    pub symbol_properties: HashMap<u64, Value>,
    /// Optional prototype reference
    pub prototype: Option<Value>,
    /// Engine-private slot; present only on genuinely constructed instances
    pub slot: Option<InternalSlot>,
}

impl ObjectData {
    /// Create plain object state with the given prototype and no slot
    pub fn plain(prototype: Option<Value>) -> Self {
        ObjectData {
            properties: HashMap::new(),
            symbol_properties: HashMap::new(),
            prototype,
            slot: None,
        }
    }

    /// Create slotted object state with the given prototype
    pub fn with_slot(prototype: Option<Value>, slot: InternalSlot) -> Self {
        ObjectData {
            properties: HashMap::new(),
            symbol_properties: HashMap::new(),
            prototype,
            slot: Some(slot),
        }
    }

    /// The intrinsic class of this object, derived from its slot
    pub fn class_of(&self) -> &'static str {
        match &self.slot {
            None => "Object",
            Some(slot) => slot.class_name(),
        }
    }
}

/// Engine-private state attached only to genuinely constructed instances
///
/// The prototype-probe detection technique exploits exactly this: intrinsic
/// prototype accessors require the slot and fail on objects that merely
/// inherit from the right prototype.
#[derive(Debug, Clone)]
pub enum InternalSlot {
    /// Array exotic object
    Array(Vec<Value>),
    /// Arguments exotic object
    Arguments(Vec<Value>),
    /// Map collection
    Map(MapData),
    /// Set collection
    Set(SetData),
    /// WeakMap collection
    WeakMap(WeakMapData),
    /// WeakSet collection
    WeakSet(WeakSetData),
    /// WeakRef wrapper
    WeakRef(WeakRefSlot),
    /// ArrayBuffer
    ArrayBuffer(crate::binary::BufferData),
    /// SharedArrayBuffer
    SharedArrayBuffer(crate::binary::BufferData),
    /// Typed-array view with element kind
    TypedArray(TypedArrayData),
    /// DataView
    DataView(DataViewData),
    /// Date (epoch milliseconds)
    Date(f64),
    /// RegExp
    RegExp(RegExpData),
    /// Error object
    Error(ErrorData),
    /// Promise
    Promise(PromiseState),
    /// Function object
    Function(FunctionData),
    /// Generator object
    Generator(GeneratorState),
    /// Async generator object
    AsyncGenerator(GeneratorState),
    /// Boxed string wrapper
    BoxedString(String),
    /// Boxed number wrapper
    BoxedNumber(f64),
    /// Boxed boolean wrapper
    BoxedBoolean(bool),
    /// Boxed symbol wrapper
    BoxedSymbol(SymbolValue),
    /// Boxed bigint wrapper
    BoxedBigInt(BigInt),
    /// Readable byte/value stream
    ReadableStream(StreamState),
    /// Writable byte/value stream
    WritableStream(StreamState),
}

impl InternalSlot {
    /// The intrinsic class tag for this slot
    pub fn class_name(&self) -> &'static str {
        match self {
            InternalSlot::Array(_) => "Array",
            InternalSlot::Arguments(_) => "Arguments",
            InternalSlot::Map(_) => "Map",
            InternalSlot::Set(_) => "Set",
            InternalSlot::WeakMap(_) => "WeakMap",
            InternalSlot::WeakSet(_) => "WeakSet",
            InternalSlot::WeakRef(_) => "WeakRef",
            InternalSlot::ArrayBuffer(_) => "ArrayBuffer",
            InternalSlot::SharedArrayBuffer(_) => "SharedArrayBuffer",
            InternalSlot::TypedArray(view) => view.kind.name(),
            InternalSlot::DataView(_) => "DataView",
            InternalSlot::Date(_) => "Date",
            InternalSlot::RegExp(_) => "RegExp",
            InternalSlot::Error(_) => "Error",
            InternalSlot::Promise(_) => "Promise",
            InternalSlot::Function(_) => "Function",
            InternalSlot::Generator(_) => "Generator",
            InternalSlot::AsyncGenerator(_) => "AsyncGenerator",
            InternalSlot::BoxedString(_) => "String",
            InternalSlot::BoxedNumber(_) => "Number",
            InternalSlot::BoxedBoolean(_) => "Boolean",
            InternalSlot::BoxedSymbol(_) => "Symbol",
            InternalSlot::BoxedBigInt(_) => "BigInt",
            InternalSlot::ReadableStream(_) => "ReadableStream",
            InternalSlot::WritableStream(_) => "WritableStream",
        }
    }
}

/// Function flavor recorded on function objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionFlavor {
    /// Ordinary function
    Normal,
    /// Arrow function (not constructable)
    Arrow,
    /// Generator function
    Generator,
    /// Async function
    Async,
    /// Async generator function
    AsyncGenerator,
    /// Class constructor
    Class,
}

impl FunctionFlavor {
    /// Whether functions of this flavor can be used as constructors
    pub fn is_constructable(&self) -> bool {
        matches!(self, FunctionFlavor::Normal | FunctionFlavor::Class)
    }
}

/// Internal state of a function object
#[derive(Debug, Clone)]
pub struct FunctionData {
    /// Function name
    pub name: String,
    /// Function flavor
    pub flavor: FunctionFlavor,
}

/// Error kind recorded on error objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Generic error
    Error,
    /// Type error
    TypeError,
    /// Range error
    RangeError,
    /// Syntax error
    SyntaxError,
    /// Reference error
    ReferenceError,
    /// Eval error
    EvalError,
    /// URI error
    UriError,
}

impl ErrorKind {
    /// The constructor name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::UriError => "URIError",
        }
    }
}

/// Internal state of an error object
#[derive(Debug, Clone)]
pub struct ErrorData {
    /// Error kind
    pub kind: ErrorKind,
    /// Error message
    pub message: String,
}

/// Internal state of a RegExp object
#[derive(Debug, Clone)]
pub struct RegExpData {
    /// Pattern source text
    pub source: String,
    /// Flag characters
    pub flags: String,
}

/// Settlement state of a promise
#[derive(Debug, Clone)]
pub enum PromiseState {
    /// Not yet settled
    Pending,
    /// Settled with a value
    Fulfilled(Box<Value>),
    /// Settled with a rejection reason
    Rejected(Box<Value>),
}

/// Internal state of a generator object
#[derive(Debug, Clone, Default)]
pub struct GeneratorState {
    /// Whether the generator has run to completion
    pub done: bool,
}

/// Internal state of a stream object
#[derive(Debug, Clone, Default)]
pub struct StreamState {
    /// Whether the stream is locked to a reader/writer
    pub locked: bool,
}

/// Map slot data - SameValueZero keys, insertion order preserved
#[derive(Debug, Clone, Default)]
pub struct MapData {
    /// Map entries in insertion order
    pub entries: Vec<(Value, Value)>,
}

impl MapData {
    /// Number of entries
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Insert or update an entry
    pub fn set(&mut self, key: Value, value: Value) {
        if let Some(index) = self
            .entries
            .iter()
            .position(|(k, _)| k.same_value_zero(&key))
        {
            self.entries[index].1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up an entry
    pub fn get(&self, key: &Value) -> Option<Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.same_value_zero(key))
            .map(|(_, v)| v.clone())
    }

    /// Whether a key is present
    pub fn has(&self, key: &Value) -> bool {
        self.entries.iter().any(|(k, _)| k.same_value_zero(key))
    }
}

/// Set slot data - SameValueZero values, insertion order preserved
#[derive(Debug, Clone, Default)]
pub struct SetData {
    /// Set values in insertion order
    pub values: Vec<Value>,
}

impl SetData {
    /// Number of values
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Insert a value if absent
    pub fn add(&mut self, value: Value) {
        if !self.has(&value) {
            self.values.push(value);
        }
    }

    /// Whether a value is present
    pub fn has(&self, value: &Value) -> bool {
        self.values.iter().any(|v| v.same_value_zero(value))
    }
}

/// Identity of a value that can be held weakly
///
/// Objects are identified by their heap address, unregistered symbols by
/// their symbol ID. Registered symbols and all other primitives cannot be
/// weak keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeakKey {
    /// Heap object identity
    Object(usize),
    /// Unregistered symbol identity
    Symbol(u64),
}

/// WeakMap slot data keyed by weak identity
#[derive(Debug, Clone, Default)]
pub struct WeakMapData {
    /// Entries keyed by weak identity
    pub entries: HashMap<WeakKey, Value>,
}

impl WeakMapData {
    /// Whether a key is present
    pub fn has(&self, key: &Value) -> bool {
        key.weak_key().is_some_and(|k| self.entries.contains_key(&k))
    }

    /// Insert an entry; returns false for keys that cannot be held weakly
    pub fn set(&mut self, key: &Value, value: Value) -> bool {
        match key.weak_key() {
            Some(k) => {
                self.entries.insert(k, value);
                true
            }
            None => false,
        }
    }

    /// Look up an entry
    pub fn get(&self, key: &Value) -> Option<Value> {
        key.weak_key().and_then(|k| self.entries.get(&k).cloned())
    }
}

/// WeakSet slot data keyed by weak identity
#[derive(Debug, Clone, Default)]
pub struct WeakSetData {
    /// Members by weak identity
    pub values: HashSet<WeakKey>,
}

impl WeakSetData {
    /// Whether a value is present
    pub fn has(&self, value: &Value) -> bool {
        value.weak_key().is_some_and(|k| self.values.contains(&k))
    }

    /// Insert a value; returns false for values that cannot be held weakly
    pub fn add(&mut self, value: &Value) -> bool {
        match value.weak_key() {
            Some(k) => {
                self.values.insert(k);
                true
            }
            None => false,
        }
    }
}

/// WeakRef slot: weak handle to a target object
#[derive(Debug, Clone)]
pub struct WeakRefSlot {
    /// Weak reference to the target's internal state
    pub target: Weak<RefCell<ObjectData>>,
}

impl WeakRefSlot {
    /// Dereference the target, or `None` once it has been collected
    pub fn deref(&self) -> Option<Value> {
        self.target.upgrade().map(Value::Object)
    }
}

impl Value {
    /// Create undefined value
    pub fn undefined() -> Self {
        Value::Undefined
    }

    /// Create null value
    pub fn null() -> Self {
        Value::Null
    }

    /// Create boolean value
    pub fn boolean(v: bool) -> Self {
        Value::Boolean(v)
    }

    /// Create number value
    pub fn number(v: f64) -> Self {
        Value::Number(v)
    }

    /// Create bigint value
    pub fn bigint(v: impl Into<BigInt>) -> Self {
        Value::BigInt(v.into())
    }

    /// Create string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create symbol value
    pub fn symbol(sym: SymbolValue) -> Self {
        Value::Symbol(sym)
    }

    /// Wrap object state into a value
    pub fn from_object(data: ObjectData) -> Self {
        Value::Object(Rc::new(RefCell::new(data)))
    }

    /// Get as boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as bigint
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(n) => Some(n),
            _ => None,
        }
    }

    /// Get as string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as symbol
    pub fn as_symbol(&self) -> Option<&SymbolValue> {
        match self {
            Value::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// Get the object handle, if this is a heap object
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// The `typeof` classification of this value
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // historical quirk
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Object(obj) => match &obj.borrow().slot {
                Some(InternalSlot::Function(_)) => "function",
                _ => "object",
            },
        }
    }

    /// The intrinsic class of this value
    ///
    /// Primitives report their boxed-wrapper class; heap objects report the
    /// class derived from their internal slot.
    pub fn class_of(&self) -> &'static str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::BigInt(_) => "BigInt",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Object(obj) => obj.borrow().class_of(),
        }
    }

    /// Whether this value is truthy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::BigInt(n) => !n.is_zero(),
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            Value::Object(_) => true,
        }
    }

    /// Run `f` against the object's internal slot, if any
    pub fn with_slot<R>(&self, f: impl FnOnce(&InternalSlot) -> R) -> Option<R> {
        match self {
            Value::Object(obj) => obj.borrow().slot.as_ref().map(f),
            _ => None,
        }
    }

    /// Mutable variant of [`Value::with_slot`]
    pub fn with_slot_mut<R>(&self, f: impl FnOnce(&mut InternalSlot) -> R) -> Option<R> {
        match self {
            Value::Object(obj) => obj.borrow_mut().slot.as_mut().map(f),
            _ => None,
        }
    }

    /// Get an own string-keyed property
    pub fn get_own(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(obj) => obj.borrow().properties.get(key).cloned(),
            _ => None,
        }
    }

    /// Get a string-keyed property, walking the prototype chain
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut current = self.clone();
        for _ in 0..PROTO_CHAIN_LIMIT {
            let obj = current.as_object()?.clone();
            let borrowed = obj.borrow();
            if let Some(found) = borrowed.properties.get(key) {
                return Some(found.clone());
            }
            let next = borrowed.prototype.clone()?;
            drop(borrowed);
            current = next;
        }
        None
    }

    /// Set an own string-keyed property
    pub fn set(&self, key: &str, value: Value) {
        if let Value::Object(obj) = self {
            obj.borrow_mut().properties.insert(key.to_string(), value);
        }
    }

    /// Whether an own string-keyed property exists
    pub fn has_own(&self, key: &str) -> bool {
        match self {
            Value::Object(obj) => obj.borrow().properties.contains_key(key),
            _ => false,
        }
    }

    /// Get an own symbol-keyed property
    pub fn get_own_symbol(&self, sym: &SymbolValue) -> Option<Value> {
        match self {
            Value::Object(obj) => obj.borrow().symbol_properties.get(&sym.id()).cloned(),
            _ => None,
        }
    }

    /// Get a symbol-keyed property, walking the prototype chain
    pub fn get_symbol(&self, sym: &SymbolValue) -> Option<Value> {
        let mut current = self.clone();
        for _ in 0..PROTO_CHAIN_LIMIT {
            let obj = current.as_object()?.clone();
            let borrowed = obj.borrow();
            if let Some(found) = borrowed.symbol_properties.get(&sym.id()) {
                return Some(found.clone());
            }
            let next = borrowed.prototype.clone()?;
            drop(borrowed);
            current = next;
        }
        None
    }

    /// Set an own symbol-keyed property
    pub fn set_symbol(&self, sym: &SymbolValue, value: Value) {
        if let Value::Object(obj) = self {
            obj.borrow_mut().symbol_properties.insert(sym.id(), value);
        }
    }

    /// Whether an own symbol-keyed property exists
    pub fn has_own_symbol(&self, sym: &SymbolValue) -> bool {
        match self {
            Value::Object(obj) => obj.borrow().symbol_properties.contains_key(&sym.id()),
            _ => false,
        }
    }

    /// Get the prototype of this object
    pub fn prototype(&self) -> Option<Value> {
        match self {
            Value::Object(obj) => obj.borrow().prototype.clone(),
            _ => None,
        }
    }

    /// Replace the prototype of this object
    pub fn set_prototype(&self, proto: Option<Value>) {
        if let Value::Object(obj) = self {
            obj.borrow_mut().prototype = proto;
        }
    }

    /// Whether `proto` appears in this value's prototype chain
    pub fn has_in_prototype_chain(&self, proto: &Value) -> bool {
        let target = match proto.as_object() {
            Some(obj) => Rc::as_ptr(obj),
            None => return false,
        };
        let mut current = self.prototype();
        for _ in 0..PROTO_CHAIN_LIMIT {
            match current {
                Some(p) => {
                    if let Some(obj) = p.as_object() {
                        if Rc::as_ptr(obj) == target {
                            return true;
                        }
                    }
                    current = p.prototype();
                }
                None => return false,
            }
        }
        false
    }

    /// Heap identity of this value, or `None` for primitives
    pub fn object_identity(&self) -> Option<usize> {
        match self {
            Value::Object(obj) => Some(Rc::as_ptr(obj) as usize),
            _ => None,
        }
    }

    /// Weak identity of this value, or `None` if it cannot be held weakly
    ///
    /// Objects and unregistered symbols qualify; registered symbols and
    /// other primitives do not.
    pub fn weak_key(&self) -> Option<WeakKey> {
        match self {
            Value::Object(obj) => Some(WeakKey::Object(Rc::as_ptr(obj) as usize)),
            Value::Symbol(sym) if !Symbols::is_registered(sym) => Some(WeakKey::Symbol(sym.id())),
            _ => None,
        }
    }

    /// SameValueZero comparison
    ///
    /// Treats NaN equal to NaN and -0 equal to +0; reference types compare
    /// by identity. This is the algorithm Map and Set keys use.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => {
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b // already treats -0 == +0
                }
            }
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a.id() == b.id(),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    write!(f, "{}", if *n > 0.0 { "Infinity" } else { "-Infinity" })
                } else if *n == n.trunc() && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::Object(obj) => write!(f, "[object {}]", obj.borrow().class_of()),
        }
    }
}


impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a.id() == b.id(),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
