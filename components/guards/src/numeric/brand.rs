//! Branded numbers: capability markers composed at the type level
//!
//! Each numeric property (sign, zeroness, finiteness, domain) is a
//! zero-sized marker on its own axis. A branded number carries one marker
//! per axis as a phantom type parameter, so marker combinations compose by
//! instantiation and contradictory combinations (both positive and
//! negative, both zero and non-zero) cannot be written at all - the axis
//! has a single slot.
//!
//! Markers are erased at runtime: a branded number is just the f64.
//! Construction is the only gate, and it runs the runtime predicate for
//! every axis.

use std::marker::PhantomData;

use value_core::Value;

use super::{float, real, width};

mod sealed {
    pub trait Sealed {}
}

/// Sign axis capability.
pub trait SignCap: sealed::Sealed {
    /// The runtime predicate this marker guarantees.
    fn holds(x: f64) -> bool;
}

/// Zeroness axis capability.
pub trait ZeroCap: sealed::Sealed {
    /// The runtime predicate this marker guarantees.
    fn holds(x: f64) -> bool;
}

/// Finiteness axis capability.
pub trait FinitenessCap: sealed::Sealed {
    /// The runtime predicate this marker guarantees.
    fn holds(x: f64) -> bool;
}

/// Domain axis capability (integer-ness, bit width, float precision).
pub trait DomainCap: sealed::Sealed {
    /// The runtime predicate this marker guarantees.
    fn holds(x: f64) -> bool;
}

macro_rules! marker {
    ($(#[$doc:meta])* $name:ident, $axis:ident, $check:expr) => {
        $(#[$doc])*
        pub enum $name {}
        impl sealed::Sealed for $name {}
        impl $axis for $name {
            #[allow(clippy::redundant_closure_call)]
            fn holds(x: f64) -> bool {
                ($check)(x)
            }
        }
    };
}

marker!(
    /// No sign constraint.
    AnySign, SignCap, |_x: f64| true
);
marker!(
    /// Sign bit clear: positive numbers, `+0` and `+∞`.
    Positive, SignCap, real::is_positive
);
marker!(
    /// Sign bit set: negative numbers, `-0` and `-∞`.
    Negative, SignCap, real::is_negative
);

marker!(
    /// No zeroness constraint.
    AnyZero, ZeroCap, |_x: f64| true
);
marker!(
    /// Exactly zero (either sign).
    Zero, ZeroCap, real::is_zero
);
marker!(
    /// Anything but zero.
    NonZero, ZeroCap, real::is_non_zero
);

marker!(
    /// No finiteness constraint.
    AnyFiniteness, FinitenessCap, |_x: f64| true
);
marker!(
    /// Finite numbers only.
    Finite, FinitenessCap, real::is_finite
);
marker!(
    /// The infinities only.
    Infinite, FinitenessCap, real::is_infinity
);

marker!(
    /// No domain constraint.
    AnyReal, DomainCap, |_x: f64| true
);
marker!(
    /// Integers.
    Integer, DomainCap, real::is_integer
);
marker!(
    /// Safe integers.
    SafeInt, DomainCap, real::is_safe_integer
);
marker!(
    /// Integers in the i8 range.
    I8, DomainCap, width::is_int8
);
marker!(
    /// Integers in the u8 range.
    U8, DomainCap, width::is_uint8
);
marker!(
    /// Integers in the i16 range.
    I16, DomainCap, width::is_int16
);
marker!(
    /// Integers in the u16 range.
    U16, DomainCap, width::is_uint16
);
marker!(
    /// Integers in the i32 range.
    I32, DomainCap, width::is_int32
);
marker!(
    /// Integers in the u32 range.
    U32, DomainCap, width::is_uint32
);
marker!(
    /// Half-precision representable values.
    F16, DomainCap, float::is_float16
);
marker!(
    /// Single-precision representable values.
    F32, DomainCap, float::is_float32
);

/// A number branded with one marker per axis.
///
/// The wrapper adds no runtime state beyond the f64; the markers are
/// phantom. A `Real` can only be obtained through [`Real::new`] (or
/// [`Real::from_value`]), which checks every axis's predicate, so holding
/// one is proof the underlying number satisfied all of them at
/// construction time.
pub struct Real<S = AnySign, Z = AnyZero, F = AnyFiniteness, D = AnyReal>
where
    S: SignCap,
    Z: ZeroCap,
    F: FinitenessCap,
    D: DomainCap,
{
    value: f64,
    _caps: PhantomData<(S, Z, F, D)>,
}

impl<S, Z, F, D> Real<S, Z, F, D>
where
    S: SignCap,
    Z: ZeroCap,
    F: FinitenessCap,
    D: DomainCap,
{
    /// Brand a number, checking every axis. NaN is never brandable.
    pub fn new(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }
        if S::holds(value) && Z::holds(value) && F::holds(value) && D::holds(value) {
            Some(Real {
                value,
                _caps: PhantomData,
            })
        } else {
            None
        }
    }

    /// Brand the numeric payload of a value, if it has one.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_number().and_then(Self::new)
    }

    /// The underlying number.
    pub fn get(self) -> f64 {
        self.value
    }

    /// Forget every constraint.
    pub fn widen(self) -> Real {
        Real {
            value: self.value,
            _caps: PhantomData,
        }
    }
}

impl<S, Z, F, D> Clone for Real<S, Z, F, D>
where
    S: SignCap,
    Z: ZeroCap,
    F: FinitenessCap,
    D: DomainCap,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, Z, F, D> Copy for Real<S, Z, F, D>
where
    S: SignCap,
    Z: ZeroCap,
    F: FinitenessCap,
    D: DomainCap,
{
}

impl<S, Z, F, D> std::fmt::Debug for Real<S, Z, F, D>
where
    S: SignCap,
    Z: ZeroCap,
    F: FinitenessCap,
    D: DomainCap,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Real").field(&self.value).finish()
    }
}

impl<S, Z, F, D> From<Real<S, Z, F, D>> for f64
where
    S: SignCap,
    Z: ZeroCap,
    F: FinitenessCap,
    D: DomainCap,
{
    fn from(real: Real<S, Z, F, D>) -> f64 {
        real.value
    }
}

/// A positive number.
pub type PositiveNumber = Real<Positive>;
/// A negative number.
pub type NegativeNumber = Real<Negative>;
/// A non-zero number.
pub type NonZeroNumber = Real<AnySign, NonZero>;
/// A finite number.
pub type FiniteNumber = Real<AnySign, AnyZero, Finite>;
/// An integer.
pub type IntegerNumber = Real<AnySign, AnyZero, Finite, Integer>;
/// A safe integer.
pub type SafeIntegerNumber = Real<AnySign, AnyZero, Finite, SafeInt>;
/// An i8-range integer.
pub type Int8 = Real<AnySign, AnyZero, Finite, I8>;
/// A u8-range integer.
pub type Uint8 = Real<Positive, AnyZero, Finite, U8>;
/// An i16-range integer.
pub type Int16 = Real<AnySign, AnyZero, Finite, I16>;
/// A u16-range integer.
pub type Uint16 = Real<Positive, AnyZero, Finite, U16>;
/// An i32-range integer.
pub type Int32 = Real<AnySign, AnyZero, Finite, I32>;
/// A u32-range integer.
pub type Uint32 = Real<Positive, AnyZero, Finite, U32>;
/// A half-precision representable number.
pub type Float16 = Real<AnySign, AnyZero, Finite, F16>;
/// A single-precision representable number.
pub type Float32 = Real<AnySign, AnyZero, Finite, F32>;
/// A positive finite number.
pub type PositiveFiniteNumber = Real<Positive, AnyZero, Finite>;
/// A negative finite number.
pub type NegativeFiniteNumber = Real<Negative, AnyZero, Finite>;
/// A positive non-zero finite integer.
pub type PositiveNonZeroFiniteInteger = Real<Positive, NonZero, Finite, Integer>;
/// A negative non-zero finite integer.
pub type NegativeNonZeroFiniteInteger = Real<Negative, NonZero, Finite, Integer>;
