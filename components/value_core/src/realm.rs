//! Realms: isolated intrinsic sets and genuine constructors
//!
//! A realm owns one full set of intrinsic prototype objects and produces
//! correctly-slotted instances. Two realms have distinct prototype
//! identities, which is what makes identity-based class checks break
//! across realms while slot- and tag-based checks keep working.
//!
//! A realm can be configured without some newer built-ins (`WeakRef`,
//! `Float16Array`, `SharedArrayBuffer`) to model older environments.

use std::rc::Rc;

use num_bigint::BigInt;

use crate::binary::{BufferData, DataViewData, TypedArrayData, TypedArrayKind};
use crate::error::{ValueError, ValueResult};
use crate::symbol::{SymbolValue, Symbols};
use crate::value::{
    ErrorData, ErrorKind, FunctionData, FunctionFlavor, GeneratorState, InternalSlot, MapData,
    ObjectData, PromiseState, RegExpData, SetData, StreamState, Value, WeakRefSlot,
};

/// Feature switches for a realm
#[derive(Debug, Clone, Copy)]
pub struct RealmOptions {
    /// Whether the realm provides `WeakRef`
    pub weak_refs: bool,
    /// Whether the realm provides `Float16Array`
    pub float16_arrays: bool,
    /// Whether the realm provides `SharedArrayBuffer`
    pub shared_buffers: bool,
}

impl Default for RealmOptions {
    fn default() -> Self {
        RealmOptions {
            weak_refs: true,
            float16_arrays: true,
            shared_buffers: true,
        }
    }
}

/// The intrinsic prototype objects of one realm
#[derive(Debug, Clone)]
pub struct Intrinsics {
    /// `Object.prototype`
    pub object_prototype: Value,
    /// `Function.prototype`
    pub function_prototype: Value,
    /// `Array.prototype`
    pub array_prototype: Value,
    /// `%IteratorPrototype%`
    pub iterator_prototype: Value,
    /// `%GeneratorPrototype%`
    pub generator_prototype: Value,
    /// `%AsyncGeneratorPrototype%`
    pub async_generator_prototype: Value,
    /// `Map.prototype`
    pub map_prototype: Value,
    /// `Set.prototype`
    pub set_prototype: Value,
    /// `WeakMap.prototype`
    pub weak_map_prototype: Value,
    /// `WeakSet.prototype`
    pub weak_set_prototype: Value,
    /// `WeakRef.prototype`, absent when the realm lacks `WeakRef`
    pub weak_ref_prototype: Option<Value>,
    /// `ArrayBuffer.prototype`
    pub array_buffer_prototype: Value,
    /// `SharedArrayBuffer.prototype`, absent when the realm lacks it
    pub shared_array_buffer_prototype: Option<Value>,
    /// `%TypedArray%.prototype`
    pub typed_array_prototype: Value,
    /// `DataView.prototype`
    pub data_view_prototype: Value,
    /// `Date.prototype`
    pub date_prototype: Value,
    /// `RegExp.prototype`
    pub regexp_prototype: Value,
    /// `Error.prototype`
    pub error_prototype: Value,
    /// `Promise.prototype`
    pub promise_prototype: Value,
    /// `ReadableStream.prototype`
    pub readable_stream_prototype: Value,
    /// `WritableStream.prototype`
    pub writable_stream_prototype: Value,
    /// `String.prototype`
    pub string_prototype: Value,
    /// `Number.prototype`
    pub number_prototype: Value,
    /// `Boolean.prototype`
    pub boolean_prototype: Value,
    /// `Symbol.prototype`
    pub symbol_prototype: Value,
    /// `BigInt.prototype`
    pub bigint_prototype: Value,
}

/// One isolated global environment
#[derive(Debug, Clone)]
pub struct Realm {
    options: RealmOptions,
    /// The realm's intrinsic prototypes
    pub intrinsics: Intrinsics,
}

impl Default for Realm {
    fn default() -> Self {
        Realm::new()
    }
}

impl Realm {
    /// Create a realm with every built-in available
    pub fn new() -> Self {
        Realm::with_options(RealmOptions::default())
    }

    /// Create a realm with the given feature switches
    pub fn with_options(options: RealmOptions) -> Self {
        let object_prototype = Value::from_object(ObjectData::plain(None));
        let function_prototype =
            Value::from_object(ObjectData::plain(Some(object_prototype.clone())));

        let mk_proto = || Value::from_object(ObjectData::plain(Some(object_prototype.clone())));
        let mk_fn = |name: &str| {
            Value::from_object(ObjectData::with_slot(
                Some(function_prototype.clone()),
                InternalSlot::Function(FunctionData {
                    name: name.to_string(),
                    flavor: FunctionFlavor::Normal,
                }),
            ))
        };

        let iterator_prototype = mk_proto();
        iterator_prototype.set_symbol(&Symbols::iterator(), mk_fn("[Symbol.iterator]"));

        let generator_prototype =
            Value::from_object(ObjectData::plain(Some(iterator_prototype.clone())));
        generator_prototype.set("next", mk_fn("next"));
        generator_prototype.set("return", mk_fn("return"));
        generator_prototype.set("throw", mk_fn("throw"));

        let async_generator_prototype = mk_proto();
        async_generator_prototype.set_symbol(&Symbols::async_iterator(), mk_fn("[Symbol.asyncIterator]"));
        async_generator_prototype.set("next", mk_fn("next"));
        async_generator_prototype.set("return", mk_fn("return"));
        async_generator_prototype.set("throw", mk_fn("throw"));

        let array_prototype = mk_proto();
        array_prototype.set("values", mk_fn("values"));
        array_prototype.set_symbol(&Symbols::iterator(), mk_fn("values"));

        let map_prototype = mk_proto();
        map_prototype.set("entries", mk_fn("entries"));
        map_prototype.set_symbol(&Symbols::iterator(), mk_fn("entries"));

        let set_prototype = mk_proto();
        set_prototype.set("values", mk_fn("values"));
        set_prototype.set_symbol(&Symbols::iterator(), mk_fn("values"));

        let weak_map_prototype = mk_proto();
        let weak_set_prototype = mk_proto();
        let weak_ref_prototype = options.weak_refs.then(mk_proto);

        let array_buffer_prototype = mk_proto();
        let shared_array_buffer_prototype = options.shared_buffers.then(mk_proto);

        let typed_array_prototype = mk_proto();
        typed_array_prototype.set("values", mk_fn("values"));
        typed_array_prototype.set_symbol(&Symbols::iterator(), mk_fn("values"));

        let data_view_prototype = mk_proto();
        let date_prototype = mk_proto();
        let regexp_prototype = mk_proto();
        let error_prototype = mk_proto();

        let promise_prototype = mk_proto();
        promise_prototype.set("then", mk_fn("then"));
        promise_prototype.set("catch", mk_fn("catch"));
        promise_prototype.set("finally", mk_fn("finally"));

        let readable_stream_prototype = mk_proto();
        readable_stream_prototype.set("getReader", mk_fn("getReader"));
        readable_stream_prototype.set("cancel", mk_fn("cancel"));

        let writable_stream_prototype = mk_proto();
        writable_stream_prototype.set("getWriter", mk_fn("getWriter"));
        writable_stream_prototype.set("close", mk_fn("close"));
        writable_stream_prototype.set("abort", mk_fn("abort"));

        let string_prototype = mk_proto();
        string_prototype.set_symbol(&Symbols::iterator(), mk_fn("[Symbol.iterator]"));
        let number_prototype = mk_proto();
        let boolean_prototype = mk_proto();
        let symbol_prototype = mk_proto();
        let bigint_prototype = mk_proto();

        Realm {
            options,
            intrinsics: Intrinsics {
                object_prototype,
                function_prototype,
                array_prototype,
                iterator_prototype,
                generator_prototype,
                async_generator_prototype,
                map_prototype,
                set_prototype,
                weak_map_prototype,
                weak_set_prototype,
                weak_ref_prototype,
                array_buffer_prototype,
                shared_array_buffer_prototype,
                typed_array_prototype,
                data_view_prototype,
                date_prototype,
                regexp_prototype,
                error_prototype,
                promise_prototype,
                readable_stream_prototype,
                writable_stream_prototype,
                string_prototype,
                number_prototype,
                boolean_prototype,
                symbol_prototype,
                bigint_prototype,
            },
        }
    }

    /// The feature switches this realm was built with
    pub fn options(&self) -> RealmOptions {
        self.options
    }

    fn slotted(&self, proto: &Value, slot: InternalSlot) -> Value {
        Value::from_object(ObjectData::with_slot(Some(proto.clone()), slot))
    }

    /// Create a plain object inheriting from `Object.prototype`
    pub fn new_plain_object(&self) -> Value {
        Value::from_object(ObjectData::plain(Some(
            self.intrinsics.object_prototype.clone(),
        )))
    }

    /// Create an object with an arbitrary prototype and **no** internal slot
    ///
    /// This is the prototype-only construction path: the result inherits
    /// from `proto` but is not a genuine instance of anything.
    pub fn object_create(&self, proto: Option<&Value>) -> Value {
        Value::from_object(ObjectData::plain(proto.cloned()))
    }

    /// Create a genuine array
    pub fn new_array(&self, elements: Vec<Value>) -> Value {
        self.slotted(
            &self.intrinsics.array_prototype,
            InternalSlot::Array(elements),
        )
    }

    /// Create an arguments exotic object
    pub fn new_arguments(&self, args: Vec<Value>) -> Value {
        self.slotted(
            &self.intrinsics.object_prototype,
            InternalSlot::Arguments(args),
        )
    }

    /// Create a function object of the given flavor
    pub fn new_function_with_flavor(&self, name: &str, flavor: FunctionFlavor) -> Value {
        self.slotted(
            &self.intrinsics.function_prototype,
            InternalSlot::Function(FunctionData {
                name: name.to_string(),
                flavor,
            }),
        )
    }

    /// Create an ordinary function
    pub fn new_function(&self, name: &str) -> Value {
        self.new_function_with_flavor(name, FunctionFlavor::Normal)
    }

    /// Create an arrow function
    pub fn new_arrow_function(&self, name: &str) -> Value {
        self.new_function_with_flavor(name, FunctionFlavor::Arrow)
    }

    /// Create a generator function
    pub fn new_generator_function(&self, name: &str) -> Value {
        self.new_function_with_flavor(name, FunctionFlavor::Generator)
    }

    /// Create an async function
    pub fn new_async_function(&self, name: &str) -> Value {
        self.new_function_with_flavor(name, FunctionFlavor::Async)
    }

    /// Create an async generator function
    pub fn new_async_generator_function(&self, name: &str) -> Value {
        self.new_function_with_flavor(name, FunctionFlavor::AsyncGenerator)
    }

    /// Create a class constructor
    pub fn new_class_constructor(&self, name: &str) -> Value {
        self.new_function_with_flavor(name, FunctionFlavor::Class)
    }

    /// Create a genuine Map with the given entries
    pub fn new_map(&self, entries: Vec<(Value, Value)>) -> Value {
        let mut data = MapData::default();
        for (k, v) in entries {
            data.set(k, v);
        }
        self.slotted(
            &self.intrinsics.map_prototype,
            InternalSlot::Map(data),
        )
    }

    /// Create a genuine Set with the given values
    pub fn new_set(&self, values: Vec<Value>) -> Value {
        let mut data = SetData::default();
        for v in values {
            data.add(v);
        }
        self.slotted(
            &self.intrinsics.set_prototype,
            InternalSlot::Set(data),
        )
    }

    /// Create a genuine WeakMap
    pub fn new_weak_map(&self) -> Value {
        self.slotted(
            &self.intrinsics.weak_map_prototype,
            InternalSlot::WeakMap(Default::default()),
        )
    }

    /// Create a genuine WeakSet
    pub fn new_weak_set(&self) -> Value {
        self.slotted(
            &self.intrinsics.weak_set_prototype,
            InternalSlot::WeakSet(Default::default()),
        )
    }

    /// Create a genuine WeakRef over an object target
    ///
    /// Fails when the realm lacks `WeakRef` or the target is not an object.
    pub fn new_weak_ref(&self, target: &Value) -> ValueResult<Value> {
        let proto = self
            .intrinsics
            .weak_ref_prototype
            .clone()
            .ok_or_else(|| ValueError::unsupported("WeakRef is not defined"))?;
        let rc = target
            .as_object()
            .ok_or_else(|| ValueError::type_violation("WeakRef target must be an object"))?;
        Ok(self.slotted(
            &proto,
            InternalSlot::WeakRef(WeakRefSlot {
                target: Rc::downgrade(rc),
            }),
        ))
    }

    /// Create a genuine ArrayBuffer
    pub fn new_array_buffer(&self, byte_length: usize) -> ValueResult<Value> {
        Ok(self.slotted(
            &self.intrinsics.array_buffer_prototype,
            InternalSlot::ArrayBuffer(BufferData::new(byte_length)?),
        ))
    }

    /// Create a genuine SharedArrayBuffer
    ///
    /// Fails when the realm lacks shared buffers.
    pub fn new_shared_array_buffer(&self, byte_length: usize) -> ValueResult<Value> {
        let proto = self
            .intrinsics
            .shared_array_buffer_prototype
            .clone()
            .ok_or_else(|| ValueError::unsupported("SharedArrayBuffer is not defined"))?;
        Ok(self.slotted(
            &proto,
            InternalSlot::SharedArrayBuffer(BufferData::new(byte_length)?),
        ))
    }

    /// Create a genuine typed array over a fresh buffer
    ///
    /// Fails for `Float16` when the realm lacks `Float16Array`.
    pub fn new_typed_array(&self, kind: TypedArrayKind, length: usize) -> ValueResult<Value> {
        if kind == TypedArrayKind::Float16 && !self.options.float16_arrays {
            return Err(ValueError::unsupported("Float16Array is not defined"));
        }
        Ok(self.slotted(
            &self.intrinsics.typed_array_prototype,
            InternalSlot::TypedArray(TypedArrayData::new(kind, length)?),
        ))
    }

    /// Create a genuine DataView over an existing buffer value
    pub fn new_data_view(
        &self,
        buffer: &Value,
        byte_offset: usize,
        byte_length: Option<usize>,
    ) -> ValueResult<Value> {
        let data = buffer
            .with_slot(|slot| match slot {
                InternalSlot::ArrayBuffer(buf) | InternalSlot::SharedArrayBuffer(buf) => {
                    Some(buf.clone())
                }
                _ => None,
            })
            .flatten()
            .ok_or_else(|| {
                ValueError::type_violation("First argument to DataView constructor must be an ArrayBuffer")
            })?;
        Ok(self.slotted(
            &self.intrinsics.data_view_prototype,
            InternalSlot::DataView(DataViewData::new(data, byte_offset, byte_length)?),
        ))
    }

    /// Create a genuine Date from epoch milliseconds
    pub fn new_date(&self, epoch_ms: f64) -> Value {
        self.slotted(
            &self.intrinsics.date_prototype,
            InternalSlot::Date(epoch_ms),
        )
    }

    /// Create a genuine RegExp
    pub fn new_regexp(&self, source: &str, flags: &str) -> Value {
        self.slotted(
            &self.intrinsics.regexp_prototype,
            InternalSlot::RegExp(RegExpData {
                source: source.to_string(),
                flags: flags.to_string(),
            }),
        )
    }

    /// Create a genuine error object
    pub fn new_error(&self, kind: ErrorKind, message: &str) -> Value {
        let err = self.slotted(
            &self.intrinsics.error_prototype,
            InternalSlot::Error(ErrorData {
                kind,
                message: message.to_string(),
            }),
        );
        err.set("message", Value::string(message));
        err.set("name", Value::string(kind.name()));
        err
    }

    /// Create a genuine promise in the given state
    pub fn new_promise(&self, state: PromiseState) -> Value {
        self.slotted(
            &self.intrinsics.promise_prototype,
            InternalSlot::Promise(state),
        )
    }

    /// Create a genuine generator object
    pub fn new_generator(&self) -> Value {
        self.slotted(
            &self.intrinsics.generator_prototype,
            InternalSlot::Generator(GeneratorState::default()),
        )
    }

    /// Create a genuine async generator object
    pub fn new_async_generator(&self) -> Value {
        self.slotted(
            &self.intrinsics.async_generator_prototype,
            InternalSlot::AsyncGenerator(GeneratorState::default()),
        )
    }

    /// Create a boxed string wrapper
    pub fn new_boxed_string(&self, value: &str) -> Value {
        self.slotted(
            &self.intrinsics.string_prototype,
            InternalSlot::BoxedString(value.to_string()),
        )
    }

    /// Create a boxed number wrapper
    pub fn new_boxed_number(&self, value: f64) -> Value {
        self.slotted(
            &self.intrinsics.number_prototype,
            InternalSlot::BoxedNumber(value),
        )
    }

    /// Create a boxed boolean wrapper
    pub fn new_boxed_boolean(&self, value: bool) -> Value {
        self.slotted(
            &self.intrinsics.boolean_prototype,
            InternalSlot::BoxedBoolean(value),
        )
    }

    /// Create a boxed symbol wrapper
    pub fn new_boxed_symbol(&self, value: SymbolValue) -> Value {
        self.slotted(
            &self.intrinsics.symbol_prototype,
            InternalSlot::BoxedSymbol(value),
        )
    }

    /// Create a boxed bigint wrapper
    pub fn new_boxed_bigint(&self, value: BigInt) -> Value {
        self.slotted(
            &self.intrinsics.bigint_prototype,
            InternalSlot::BoxedBigInt(value),
        )
    }

    /// Create a genuine readable stream
    pub fn new_readable_stream(&self) -> Value {
        self.slotted(
            &self.intrinsics.readable_stream_prototype,
            InternalSlot::ReadableStream(StreamState::default()),
        )
    }

    /// Create a genuine writable stream
    pub fn new_writable_stream(&self) -> Value {
        self.slotted(
            &self.intrinsics.writable_stream_prototype,
            InternalSlot::WritableStream(StreamState::default()),
        )
    }

    /// Create an iterator-shaped object over the iterator prototype
    ///
    /// The result has a callable own `next` and inherits the default
    /// `Symbol.iterator` from `%IteratorPrototype%`.
    pub fn new_list_iterator(&self) -> Value {
        let iter = self.object_create(Some(&self.intrinsics.iterator_prototype));
        iter.set("next", self.new_function("next"));
        iter
    }

    /// Create a synchronously disposable resource object
    pub fn new_disposable(&self) -> Value {
        let obj = self.new_plain_object();
        obj.set_symbol(&Symbols::dispose(), self.new_function("[Symbol.dispose]"));
        obj
    }

    /// Create an asynchronously disposable resource object
    pub fn new_async_disposable(&self) -> Value {
        let obj = self.new_plain_object();
        obj.set_symbol(
            &Symbols::async_dispose(),
            self.new_function("[Symbol.asyncDispose]"),
        );
        obj
    }
}
