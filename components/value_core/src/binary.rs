//! Binary-data internal slots: buffers, typed-array views, data views
//!
//! These carry just enough state for the view accessors (lengths, offsets,
//! element kinds) that internal-slot probes rely on.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ValueError, ValueResult};

/// Maximum buffer size accepted by the constructors (2GB - 1)
const MAX_BUFFER_LENGTH: usize = 2_147_483_647;

/// Backing storage for ArrayBuffer and SharedArrayBuffer slots
#[derive(Debug, Clone)]
pub struct BufferData {
    data: Rc<RefCell<Vec<u8>>>,
}

impl BufferData {
    /// Create a zero-filled buffer with the given byte length
    pub fn new(byte_length: usize) -> ValueResult<Self> {
        if byte_length > MAX_BUFFER_LENGTH {
            return Err(ValueError::range_error("Invalid array buffer length"));
        }
        Ok(BufferData {
            data: Rc::new(RefCell::new(vec![0u8; byte_length])),
        })
    }

    /// Get the byte length of the buffer
    pub fn byte_length(&self) -> usize {
        self.data.borrow().len()
    }

    /// Read one byte at the given offset
    pub fn get_u8(&self, offset: usize) -> ValueResult<u8> {
        self.data
            .borrow()
            .get(offset)
            .copied()
            .ok_or_else(|| ValueError::range_error("Offset is outside the bounds of the buffer"))
    }

    /// Write one byte at the given offset
    pub fn set_u8(&self, offset: usize, value: u8) -> ValueResult<()> {
        let mut data = self.data.borrow_mut();
        match data.get_mut(offset) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ValueError::range_error(
                "Offset is outside the bounds of the buffer",
            )),
        }
    }

    /// Whether two buffer handles share the same storage
    pub fn same_storage(&self, other: &BufferData) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

/// Typed-array element kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedArrayKind {
    /// 8-bit signed integer
    Int8,
    /// 8-bit unsigned integer
    Uint8,
    /// 8-bit unsigned integer (clamped)
    Uint8Clamped,
    /// 16-bit signed integer
    Int16,
    /// 16-bit unsigned integer
    Uint16,
    /// 32-bit signed integer
    Int32,
    /// 32-bit unsigned integer
    Uint32,
    /// 16-bit floating point
    Float16,
    /// 32-bit floating point
    Float32,
    /// 64-bit floating point
    Float64,
    /// 64-bit signed big integer
    BigInt64,
    /// 64-bit unsigned big integer
    BigUint64,
}

impl TypedArrayKind {
    /// Get the byte size of each element for this kind
    pub fn bytes_per_element(&self) -> usize {
        match self {
            TypedArrayKind::Int8 | TypedArrayKind::Uint8 | TypedArrayKind::Uint8Clamped => 1,
            TypedArrayKind::Int16 | TypedArrayKind::Uint16 | TypedArrayKind::Float16 => 2,
            TypedArrayKind::Int32 | TypedArrayKind::Uint32 | TypedArrayKind::Float32 => 4,
            TypedArrayKind::Float64 | TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64 => 8,
        }
    }

    /// Get the constructor name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            TypedArrayKind::Int8 => "Int8Array",
            TypedArrayKind::Uint8 => "Uint8Array",
            TypedArrayKind::Uint8Clamped => "Uint8ClampedArray",
            TypedArrayKind::Int16 => "Int16Array",
            TypedArrayKind::Uint16 => "Uint16Array",
            TypedArrayKind::Int32 => "Int32Array",
            TypedArrayKind::Uint32 => "Uint32Array",
            TypedArrayKind::Float16 => "Float16Array",
            TypedArrayKind::Float32 => "Float32Array",
            TypedArrayKind::Float64 => "Float64Array",
            TypedArrayKind::BigInt64 => "BigInt64Array",
            TypedArrayKind::BigUint64 => "BigUint64Array",
        }
    }

    /// Look up a kind by its constructor name
    pub fn from_name(name: &str) -> Option<TypedArrayKind> {
        Some(match name {
            "Int8Array" => TypedArrayKind::Int8,
            "Uint8Array" => TypedArrayKind::Uint8,
            "Uint8ClampedArray" => TypedArrayKind::Uint8Clamped,
            "Int16Array" => TypedArrayKind::Int16,
            "Uint16Array" => TypedArrayKind::Uint16,
            "Int32Array" => TypedArrayKind::Int32,
            "Uint32Array" => TypedArrayKind::Uint32,
            "Float16Array" => TypedArrayKind::Float16,
            "Float32Array" => TypedArrayKind::Float32,
            "Float64Array" => TypedArrayKind::Float64,
            "BigInt64Array" => TypedArrayKind::BigInt64,
            "BigUint64Array" => TypedArrayKind::BigUint64,
            _ => return None,
        })
    }

    /// Whether elements of this kind are big integers rather than numbers
    pub fn is_big_int_kind(&self) -> bool {
        matches!(self, TypedArrayKind::BigInt64 | TypedArrayKind::BigUint64)
    }
}

/// Internal state of a typed-array view
#[derive(Debug, Clone)]
pub struct TypedArrayData {
    /// Element kind of the view
    pub kind: TypedArrayKind,
    /// Underlying buffer
    pub buffer: BufferData,
    /// Byte offset of the view into the buffer
    pub byte_offset: usize,
    /// Element count of the view
    pub length: usize,
}

impl TypedArrayData {
    /// Create a view over a fresh buffer with `length` elements
    pub fn new(kind: TypedArrayKind, length: usize) -> ValueResult<Self> {
        let buffer = BufferData::new(length * kind.bytes_per_element())?;
        Ok(TypedArrayData {
            kind,
            buffer,
            byte_offset: 0,
            length,
        })
    }

    /// Create a view over an existing buffer
    pub fn from_buffer(
        kind: TypedArrayKind,
        buffer: BufferData,
        byte_offset: usize,
        length: Option<usize>,
    ) -> ValueResult<Self> {
        let elem = kind.bytes_per_element();
        if byte_offset % elem != 0 {
            return Err(ValueError::range_error(
                "start offset is not a multiple of the element size",
            ));
        }
        let available = buffer.byte_length().saturating_sub(byte_offset);
        let length = match length {
            Some(len) => {
                if len * elem > available {
                    return Err(ValueError::range_error("Invalid typed array length"));
                }
                len
            }
            None => {
                if available % elem != 0 {
                    return Err(ValueError::range_error(
                        "byte length is not a multiple of the element size",
                    ));
                }
                available / elem
            }
        };
        Ok(TypedArrayData {
            kind,
            buffer,
            byte_offset,
            length,
        })
    }

    /// Byte length of the view
    pub fn byte_length(&self) -> usize {
        self.length * self.kind.bytes_per_element()
    }
}

/// Internal state of a DataView
#[derive(Debug, Clone)]
pub struct DataViewData {
    /// Underlying buffer
    pub buffer: BufferData,
    /// Byte offset of the view into the buffer
    pub byte_offset: usize,
    /// Byte length of the view
    pub byte_length: usize,
}

impl DataViewData {
    /// Create a view over an existing buffer
    pub fn new(buffer: BufferData, byte_offset: usize, byte_length: Option<usize>) -> ValueResult<Self> {
        let available = buffer.byte_length();
        if byte_offset > available {
            return Err(ValueError::range_error(
                "Start offset is outside the bounds of the buffer",
            ));
        }
        let byte_length = match byte_length {
            Some(len) => {
                if byte_offset + len > available {
                    return Err(ValueError::range_error("Invalid DataView length"));
                }
                len
            }
            None => available - byte_offset,
        };
        Ok(DataViewData {
            buffer,
            byte_offset,
            byte_length,
        })
    }
}
