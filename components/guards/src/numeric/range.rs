//! Configurable range checks
//!
//! Malformed range *configuration* is a programmer error surfaced
//! immediately; a subject outside the range (or not a number at all) is an
//! ordinary negative answer.

use thiserror::Error;
use value_core::Value;

/// Which bounds are excluded from the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundMode {
    /// Both bounds included
    #[default]
    Inclusive,
    /// Both bounds excluded
    Exclusive,
    /// Minimum excluded, maximum included
    MinExclusive,
    /// Minimum included, maximum excluded
    MaxExclusive,
}

/// Invalid range configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeSpecError {
    /// A bound was NaN or infinite
    #[error("range bound must be finite, got {0}")]
    NonFiniteBound(f64),
    /// The minimum exceeded the maximum
    #[error("range minimum {min} exceeds maximum {max}")]
    InvertedBounds {
        /// The offending minimum
        min: f64,
        /// The offending maximum
        max: f64,
    },
}

/// A validated numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
    mode: BoundMode,
}

impl Range {
    /// Build a range, validating the configuration.
    pub fn new(min: f64, max: f64, mode: BoundMode) -> Result<Self, RangeSpecError> {
        if !min.is_finite() {
            return Err(RangeSpecError::NonFiniteBound(min));
        }
        if !max.is_finite() {
            return Err(RangeSpecError::NonFiniteBound(max));
        }
        if min > max {
            return Err(RangeSpecError::InvertedBounds { min, max });
        }
        Ok(Range { min, max, mode })
    }

    /// Build an inclusive range.
    pub fn inclusive(min: f64, max: f64) -> Result<Self, RangeSpecError> {
        Range::new(min, max, BoundMode::Inclusive)
    }

    /// Whether a number falls inside the range. NaN never does.
    pub fn contains(&self, x: f64) -> bool {
        if x.is_nan() {
            return false;
        }
        let above = match self.mode {
            BoundMode::Inclusive | BoundMode::MaxExclusive => x >= self.min,
            BoundMode::Exclusive | BoundMode::MinExclusive => x > self.min,
        };
        let below = match self.mode {
            BoundMode::Inclusive | BoundMode::MinExclusive => x <= self.max,
            BoundMode::Exclusive | BoundMode::MaxExclusive => x < self.max,
        };
        above && below
    }
}

/// Whether the value is a number inside the range.
pub fn in_range(value: &Value, range: &Range) -> bool {
    matches!(value, Value::Number(n) if range.contains(*n))
}
