//! Embeddable dynamic value model
//!
//! This crate provides the host object model the guard catalogue inspects:
//! value representation, symbols, realms with intrinsic prototypes, and the
//! internal-slot machinery that distinguishes genuine built-in instances
//! from look-alikes.
//!
//! # Overview
//!
//! - [`Value`] - tagged representation of host values
//! - [`ObjectData`] / [`InternalSlot`] - heap objects with engine-private state
//! - [`Realm`] - one isolated set of intrinsics and genuine constructors
//! - [`Symbols`] - unique/registered/well-known symbol management
//! - [`proto`] - uncurried intrinsic prototype accessors
//! - [`ValueError`] - error type for value-model operations
//!
//! # Examples
//!
//! ```
//! use value_core::{Realm, Value, proto::MapProto};
//!
//! let realm = Realm::new();
//! let map = realm.new_map(vec![(Value::string("k"), Value::number(1.0))]);
//! assert_eq!(MapProto::size(&map).unwrap(), 1);
//!
//! // Prototype-only construction carries no internal slot:
//! let fake = realm.object_create(Some(&realm.intrinsics.map_prototype));
//! assert!(MapProto::size(&fake).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod binary;
mod error;
pub mod proto;
mod realm;
mod symbol;
mod value;

pub use binary::{BufferData, DataViewData, TypedArrayData, TypedArrayKind};
pub use error::{ValueError, ValueResult};
pub use realm::{Intrinsics, Realm, RealmOptions};
pub use symbol::{SymbolValue, Symbols};
pub use value::{
    ErrorData, ErrorKind, FunctionData, FunctionFlavor, GeneratorState, InternalSlot, MapData,
    ObjectData, ObjectRef, PromiseState, RegExpData, SetData, StreamState, Value, WeakKey,
    WeakMapData, WeakRefSlot, WeakSetData,
};
