//! Runtime type-guard catalogue
//!
//! This crate provides ~150 predicate functions over [`value_core::Value`]:
//! primitives, built-in object kinds (collections, iterables, boxed
//! primitives, binary-data views, streams, disposables), and numeric
//! subtype classifications (integer ranges, sign, finiteness, float
//! precision), plus a type-level branding system for the numeric family.
//!
//! Two detection idioms carry the catalogue:
//! - the cross-realm tagged-native detector ([`tag`]), which classifies by
//!   the generic `[object X]` string and sees through tag spoofing, and
//! - the prototype probe ([`collection`], [`boxed`], [`binary`]), which
//!   invokes an intrinsic prototype accessor and reads an internal-slot
//!   violation as a negative answer.
//!
//! Every guard is total: it accepts any value, never panics, and reports
//! problems with the *subject* as `false`. Only malformed *configuration*
//! (range bounds) surfaces an error.
//!
//! # Example
//!
//! ```
//! use guards::{is_map, is_positive_non_zero_finite_integer, Is};
//! use value_core::{Realm, Value};
//!
//! let realm = Realm::new();
//! assert!(is_map(&realm.new_map(vec![])));
//!
//! // Prototype-only fakes are not Maps:
//! let fake = realm.object_create(Some(&realm.intrinsics.map_prototype));
//! assert!(!is_map(&fake));
//!
//! assert!(is_positive_non_zero_finite_integer(&Value::number(7.0)));
//! assert!(Is::string(&Value::string("hi")));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binary;
pub mod boxed;
pub mod collection;
pub mod combinator;
pub mod date;
mod facade;
pub mod ident;
pub mod iteration;
pub mod numeric;
pub mod object_kind;
pub mod primitive;
mod probe;
pub mod stream;
pub mod tag;

pub use facade::Is;

pub use binary::*;
pub use boxed::*;
pub use collection::*;
pub use combinator::*;
pub use date::*;
pub use ident::*;
pub use iteration::*;
pub use numeric::*;
pub use object_kind::*;
pub use primitive::*;
pub use stream::*;
pub use tag::*;
