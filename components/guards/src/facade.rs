//! Aggregation facade
//!
//! Every guard under one namespace type, renamed with the uniform `is_`
//! prefix stripped: `is_string` becomes [`Is::string`]. Pure delegation,
//! no behavior of its own.

use value_core::{ErrorKind, Value};

use crate::{
    binary, boxed, collection, date, ident, iteration, numeric, object_kind, primitive, stream,
    tag,
};

/// The guard namespace.
///
/// ```
/// use guards::Is;
/// use value_core::Value;
///
/// assert!(Is::string(&Value::string("hi")));
/// assert!(Is::positive(&Value::number(1.0)));
/// ```
pub struct Is;

impl Is {
    // Primitives and basics

    /// See [`primitive::is_undefined`].
    pub fn undefined(value: &Value) -> bool {
        primitive::is_undefined(value)
    }

    /// See [`primitive::is_null`].
    pub fn null(value: &Value) -> bool {
        primitive::is_null(value)
    }

    /// See [`primitive::is_nullish`].
    pub fn nullish(value: &Value) -> bool {
        primitive::is_nullish(value)
    }

    /// See [`primitive::is_defined`].
    pub fn defined(value: &Value) -> bool {
        primitive::is_defined(value)
    }

    /// See [`primitive::is_boolean`].
    pub fn boolean(value: &Value) -> bool {
        primitive::is_boolean(value)
    }

    /// See [`primitive::is_number`].
    pub fn number(value: &Value) -> bool {
        primitive::is_number(value)
    }

    /// See [`primitive::is_string`].
    pub fn string(value: &Value) -> bool {
        primitive::is_string(value)
    }

    /// See [`primitive::is_symbol`].
    pub fn symbol(value: &Value) -> bool {
        primitive::is_symbol(value)
    }

    /// See [`primitive::is_bigint`].
    pub fn bigint(value: &Value) -> bool {
        primitive::is_bigint(value)
    }

    /// See [`primitive::is_function`].
    pub fn function(value: &Value) -> bool {
        primitive::is_function(value)
    }

    /// See [`primitive::is_callable`].
    pub fn callable(value: &Value) -> bool {
        primitive::is_callable(value)
    }

    /// See [`primitive::is_constructor`].
    pub fn constructor(value: &Value) -> bool {
        primitive::is_constructor(value)
    }

    /// See [`primitive::is_arrow_function`].
    pub fn arrow_function(value: &Value) -> bool {
        primitive::is_arrow_function(value)
    }

    /// See [`primitive::is_class`].
    pub fn class(value: &Value) -> bool {
        primitive::is_class(value)
    }

    /// See [`primitive::is_primitive`].
    pub fn primitive(value: &Value) -> bool {
        primitive::is_primitive(value)
    }

    /// See [`primitive::is_object`].
    pub fn object(value: &Value) -> bool {
        primitive::is_object(value)
    }

    /// See [`primitive::is_object_like`].
    pub fn object_like(value: &Value) -> bool {
        primitive::is_object_like(value)
    }

    /// See [`primitive::is_property_key`].
    pub fn property_key(value: &Value) -> bool {
        primitive::is_property_key(value)
    }

    /// See [`primitive::is_truthy`].
    pub fn truthy(value: &Value) -> bool {
        primitive::is_truthy(value)
    }

    /// See [`primitive::is_falsy`].
    pub fn falsy(value: &Value) -> bool {
        primitive::is_falsy(value)
    }

    // Tag-detected natives

    /// See [`tag::is_tagged`].
    pub fn tagged(value: &Value, tag: &str) -> bool {
        tag::is_tagged(value, tag)
    }

    /// See [`tag::is_error`].
    pub fn error(value: &Value) -> bool {
        tag::is_error(value)
    }

    /// See [`tag::is_error_kind`].
    pub fn error_kind(value: &Value, kind: ErrorKind) -> bool {
        tag::is_error_kind(value, kind)
    }

    /// See [`tag::is_promise`].
    pub fn promise(value: &Value) -> bool {
        tag::is_promise(value)
    }

    /// See [`tag::is_reg_exp`].
    pub fn reg_exp(value: &Value) -> bool {
        tag::is_reg_exp(value)
    }

    /// See [`tag::is_arguments`].
    pub fn arguments(value: &Value) -> bool {
        tag::is_arguments(value)
    }

    /// See [`date::is_date`].
    pub fn date(value: &Value) -> bool {
        date::is_date(value)
    }

    /// See [`date::is_valid_date`].
    pub fn valid_date(value: &Value) -> bool {
        date::is_valid_date(value)
    }

    /// See [`collection::is_map`].
    pub fn map(value: &Value) -> bool {
        collection::is_map(value)
    }

    /// See [`collection::is_set`].
    pub fn set(value: &Value) -> bool {
        collection::is_set(value)
    }

    /// See [`collection::is_weak_map`].
    pub fn weak_map(value: &Value) -> bool {
        collection::is_weak_map(value)
    }

    /// See [`collection::is_weak_set`].
    pub fn weak_set(value: &Value) -> bool {
        collection::is_weak_set(value)
    }

    /// See [`collection::is_weak_ref`].
    pub fn weak_ref(value: &Value) -> bool {
        collection::is_weak_ref(value)
    }

    /// See [`collection::is_weak_key`].
    pub fn weak_key(value: &Value) -> bool {
        collection::is_weak_key(value)
    }

    // Boxed primitives

    /// See [`boxed::is_boxed_string`].
    pub fn boxed_string(value: &Value) -> bool {
        boxed::is_boxed_string(value)
    }

    /// See [`boxed::is_boxed_number`].
    pub fn boxed_number(value: &Value) -> bool {
        boxed::is_boxed_number(value)
    }

    /// See [`boxed::is_boxed_boolean`].
    pub fn boxed_boolean(value: &Value) -> bool {
        boxed::is_boxed_boolean(value)
    }

    /// See [`boxed::is_boxed_symbol`].
    pub fn boxed_symbol(value: &Value) -> bool {
        boxed::is_boxed_symbol(value)
    }

    /// See [`boxed::is_boxed_bigint`].
    pub fn boxed_bigint(value: &Value) -> bool {
        boxed::is_boxed_bigint(value)
    }

    // Binary data

    /// See [`binary::is_array_buffer`].
    pub fn array_buffer(value: &Value) -> bool {
        binary::is_array_buffer(value)
    }

    /// See [`binary::is_shared_array_buffer`].
    pub fn shared_array_buffer(value: &Value) -> bool {
        binary::is_shared_array_buffer(value)
    }

    /// See [`binary::is_any_array_buffer`].
    pub fn any_array_buffer(value: &Value) -> bool {
        binary::is_any_array_buffer(value)
    }

    /// See [`binary::is_data_view`].
    pub fn data_view(value: &Value) -> bool {
        binary::is_data_view(value)
    }

    /// See [`binary::is_typed_array`].
    pub fn typed_array(value: &Value) -> bool {
        binary::is_typed_array(value)
    }

    /// See [`binary::is_typed_array_of`].
    pub fn typed_array_of(value: &Value, kind_name: &str) -> bool {
        binary::is_typed_array_of(value, kind_name)
    }

    /// See [`binary::is_int8_array`].
    pub fn int8_array(value: &Value) -> bool {
        binary::is_int8_array(value)
    }

    /// See [`binary::is_uint8_array`].
    pub fn uint8_array(value: &Value) -> bool {
        binary::is_uint8_array(value)
    }

    /// See [`binary::is_uint8_clamped_array`].
    pub fn uint8_clamped_array(value: &Value) -> bool {
        binary::is_uint8_clamped_array(value)
    }

    /// See [`binary::is_int16_array`].
    pub fn int16_array(value: &Value) -> bool {
        binary::is_int16_array(value)
    }

    /// See [`binary::is_uint16_array`].
    pub fn uint16_array(value: &Value) -> bool {
        binary::is_uint16_array(value)
    }

    /// See [`binary::is_int32_array`].
    pub fn int32_array(value: &Value) -> bool {
        binary::is_int32_array(value)
    }

    /// See [`binary::is_uint32_array`].
    pub fn uint32_array(value: &Value) -> bool {
        binary::is_uint32_array(value)
    }

    /// See [`binary::is_float16_array`].
    pub fn float16_array(value: &Value) -> bool {
        binary::is_float16_array(value)
    }

    /// See [`binary::is_float32_array`].
    pub fn float32_array(value: &Value) -> bool {
        binary::is_float32_array(value)
    }

    /// See [`binary::is_float64_array`].
    pub fn float64_array(value: &Value) -> bool {
        binary::is_float64_array(value)
    }

    /// See [`binary::is_big_int64_array`].
    pub fn big_int64_array(value: &Value) -> bool {
        binary::is_big_int64_array(value)
    }

    /// See [`binary::is_big_uint64_array`].
    pub fn big_uint64_array(value: &Value) -> bool {
        binary::is_big_uint64_array(value)
    }

    /// See [`binary::is_array_buffer_view`].
    pub fn array_buffer_view(value: &Value) -> bool {
        binary::is_array_buffer_view(value)
    }

    /// See [`binary::is_buffer_source`].
    pub fn buffer_source(value: &Value) -> bool {
        binary::is_buffer_source(value)
    }

    // Arrays and object shapes

    /// See [`object_kind::is_array`].
    pub fn array(value: &Value) -> bool {
        object_kind::is_array(value)
    }

    /// See [`object_kind::is_array_like`].
    pub fn array_like(value: &Value) -> bool {
        object_kind::is_array_like(value)
    }

    /// See [`object_kind::is_array_like_object`].
    pub fn array_like_object(value: &Value) -> bool {
        object_kind::is_array_like_object(value)
    }

    /// See [`object_kind::is_plain_object`].
    pub fn plain_object(value: &Value) -> bool {
        object_kind::is_plain_object(value)
    }

    /// See [`object_kind::is_empty_object`].
    pub fn empty_object(value: &Value) -> bool {
        object_kind::is_empty_object(value)
    }

    /// See [`object_kind::is_instance_of`].
    pub fn instance_of(value: &Value, prototype: &Value) -> bool {
        object_kind::is_instance_of(value, prototype)
    }

    /// See [`object_kind::has_keys`].
    pub fn has_keys(value: &Value, keys: &[&str]) -> bool {
        object_kind::has_keys(value, keys)
    }

    /// See [`object_kind::has_methods`].
    pub fn has_methods(value: &Value, keys: &[&str]) -> bool {
        object_kind::has_methods(value, keys)
    }

    // Iteration

    /// See [`iteration::is_iterable`].
    pub fn iterable(value: &Value) -> bool {
        iteration::is_iterable(value)
    }

    /// See [`iteration::is_async_iterable`].
    pub fn async_iterable(value: &Value) -> bool {
        iteration::is_async_iterable(value)
    }

    /// See [`iteration::is_iterator`].
    pub fn iterator(value: &Value) -> bool {
        iteration::is_iterator(value)
    }

    /// See [`iteration::is_async_iterator`].
    pub fn async_iterator(value: &Value) -> bool {
        iteration::is_async_iterator(value)
    }

    /// See [`iteration::is_iterable_iterator`].
    pub fn iterable_iterator(value: &Value) -> bool {
        iteration::is_iterable_iterator(value)
    }

    /// See [`iteration::is_iterator_result`].
    pub fn iterator_result(value: &Value) -> bool {
        iteration::is_iterator_result(value)
    }

    /// See [`iteration::is_generator`].
    pub fn generator(value: &Value) -> bool {
        iteration::is_generator(value)
    }

    /// See [`iteration::is_async_generator`].
    pub fn async_generator(value: &Value) -> bool {
        iteration::is_async_generator(value)
    }

    /// See [`iteration::is_generator_function`].
    pub fn generator_function(value: &Value) -> bool {
        iteration::is_generator_function(value)
    }

    /// See [`iteration::is_async_function`].
    pub fn async_function(value: &Value) -> bool {
        iteration::is_async_function(value)
    }

    /// See [`iteration::is_async_generator_function`].
    pub fn async_generator_function(value: &Value) -> bool {
        iteration::is_async_generator_function(value)
    }

    // Streams and resources

    /// See [`stream::is_readable_stream`].
    pub fn readable_stream(value: &Value) -> bool {
        stream::is_readable_stream(value)
    }

    /// See [`stream::is_writable_stream`].
    pub fn writable_stream(value: &Value) -> bool {
        stream::is_writable_stream(value)
    }

    /// See [`stream::is_disposable`].
    pub fn disposable(value: &Value) -> bool {
        stream::is_disposable(value)
    }

    /// See [`stream::is_async_disposable`].
    pub fn async_disposable(value: &Value) -> bool {
        stream::is_async_disposable(value)
    }

    // Symbols and identifiers

    /// See [`ident::is_identifier`].
    pub fn identifier(value: &Value) -> bool {
        ident::is_identifier(value)
    }

    /// See [`ident::is_reserved_word`].
    pub fn reserved_word(value: &Value) -> bool {
        ident::is_reserved_word(value)
    }

    /// See [`ident::is_well_known_symbol`].
    pub fn well_known_symbol(value: &Value) -> bool {
        ident::is_well_known_symbol(value)
    }

    /// See [`ident::is_registered_symbol`].
    pub fn registered_symbol(value: &Value) -> bool {
        ident::is_registered_symbol(value)
    }

    /// See [`ident::is_unique_symbol`].
    pub fn unique_symbol(value: &Value) -> bool {
        ident::is_unique_symbol(value)
    }

    // Numerics

    /// See [`numeric::is_nan`].
    pub fn nan(value: &Value) -> bool {
        numeric::is_nan(value)
    }

    /// See [`numeric::is_finite`].
    pub fn finite(value: &Value) -> bool {
        numeric::is_finite(value)
    }

    /// See [`numeric::is_infinity`].
    pub fn infinity(value: &Value) -> bool {
        numeric::is_infinity(value)
    }

    /// See [`numeric::is_integer`].
    pub fn integer(value: &Value) -> bool {
        numeric::is_integer(value)
    }

    /// See [`numeric::is_safe_integer`].
    pub fn safe_integer(value: &Value) -> bool {
        numeric::is_safe_integer(value)
    }

    /// See [`numeric::is_zero`].
    pub fn zero(value: &Value) -> bool {
        numeric::is_zero(value)
    }

    /// See [`numeric::is_non_zero`].
    pub fn non_zero(value: &Value) -> bool {
        numeric::is_non_zero(value)
    }

    /// See [`numeric::is_positive_zero`].
    pub fn positive_zero(value: &Value) -> bool {
        numeric::is_positive_zero(value)
    }

    /// See [`numeric::is_negative_zero`].
    pub fn negative_zero(value: &Value) -> bool {
        numeric::is_negative_zero(value)
    }

    /// See [`numeric::is_positive`].
    pub fn positive(value: &Value) -> bool {
        numeric::is_positive(value)
    }

    /// See [`numeric::is_negative`].
    pub fn negative(value: &Value) -> bool {
        numeric::is_negative(value)
    }

    /// See [`numeric::is_even`].
    pub fn even(value: &Value) -> bool {
        numeric::is_even(value)
    }

    /// See [`numeric::is_odd`].
    pub fn odd(value: &Value) -> bool {
        numeric::is_odd(value)
    }

    /// See [`numeric::is_float`].
    pub fn float(value: &Value) -> bool {
        numeric::is_float(value)
    }

    /// See [`numeric::is_float16`].
    pub fn float16(value: &Value) -> bool {
        numeric::is_float16(value)
    }

    /// See [`numeric::is_float32`].
    pub fn float32(value: &Value) -> bool {
        numeric::is_float32(value)
    }

    /// See [`numeric::is_float64`].
    pub fn float64(value: &Value) -> bool {
        numeric::is_float64(value)
    }

    /// See [`numeric::is_int8`].
    pub fn int8(value: &Value) -> bool {
        numeric::is_int8(value)
    }

    /// See [`numeric::is_uint8`].
    pub fn uint8(value: &Value) -> bool {
        numeric::is_uint8(value)
    }

    /// See [`numeric::is_int16`].
    pub fn int16(value: &Value) -> bool {
        numeric::is_int16(value)
    }

    /// See [`numeric::is_uint16`].
    pub fn uint16(value: &Value) -> bool {
        numeric::is_uint16(value)
    }

    /// See [`numeric::is_int32`].
    pub fn int32(value: &Value) -> bool {
        numeric::is_int32(value)
    }

    /// See [`numeric::is_uint32`].
    pub fn uint32(value: &Value) -> bool {
        numeric::is_uint32(value)
    }

    /// See [`numeric::is_int64`].
    pub fn int64(value: &Value) -> bool {
        numeric::is_int64(value)
    }

    /// See [`numeric::is_uint64`].
    pub fn uint64(value: &Value) -> bool {
        numeric::is_uint64(value)
    }

    /// See [`numeric::in_range`].
    pub fn in_range(value: &Value, range: &numeric::Range) -> bool {
        numeric::in_range(value, range)
    }

    /// See [`numeric::is_positive_integer`].
    pub fn positive_integer(value: &Value) -> bool {
        numeric::is_positive_integer(value)
    }

    /// See [`numeric::is_negative_integer`].
    pub fn negative_integer(value: &Value) -> bool {
        numeric::is_negative_integer(value)
    }

    /// See [`numeric::is_non_zero_integer`].
    pub fn non_zero_integer(value: &Value) -> bool {
        numeric::is_non_zero_integer(value)
    }

    /// See [`numeric::is_positive_finite`].
    pub fn positive_finite(value: &Value) -> bool {
        numeric::is_positive_finite(value)
    }

    /// See [`numeric::is_negative_finite`].
    pub fn negative_finite(value: &Value) -> bool {
        numeric::is_negative_finite(value)
    }

    /// See [`numeric::is_non_zero_finite`].
    pub fn non_zero_finite(value: &Value) -> bool {
        numeric::is_non_zero_finite(value)
    }

    /// See [`numeric::is_positive_finite_integer`].
    pub fn positive_finite_integer(value: &Value) -> bool {
        numeric::is_positive_finite_integer(value)
    }

    /// See [`numeric::is_negative_finite_integer`].
    pub fn negative_finite_integer(value: &Value) -> bool {
        numeric::is_negative_finite_integer(value)
    }

    /// See [`numeric::is_positive_non_zero_integer`].
    pub fn positive_non_zero_integer(value: &Value) -> bool {
        numeric::is_positive_non_zero_integer(value)
    }

    /// See [`numeric::is_negative_non_zero_integer`].
    pub fn negative_non_zero_integer(value: &Value) -> bool {
        numeric::is_negative_non_zero_integer(value)
    }

    /// See [`numeric::is_positive_non_zero_finite`].
    pub fn positive_non_zero_finite(value: &Value) -> bool {
        numeric::is_positive_non_zero_finite(value)
    }

    /// See [`numeric::is_negative_non_zero_finite`].
    pub fn negative_non_zero_finite(value: &Value) -> bool {
        numeric::is_negative_non_zero_finite(value)
    }

    /// See [`numeric::is_positive_non_zero_finite_integer`].
    pub fn positive_non_zero_finite_integer(value: &Value) -> bool {
        numeric::is_positive_non_zero_finite_integer(value)
    }

    /// See [`numeric::is_negative_non_zero_finite_integer`].
    pub fn negative_non_zero_finite_integer(value: &Value) -> bool {
        numeric::is_negative_non_zero_finite_integer(value)
    }
}
