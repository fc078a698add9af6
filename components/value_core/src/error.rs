//! Error type for value-model operations.

use std::fmt;

/// Error raised by value-model operations.
///
/// Carries a message prefixed with the violation category, mirroring the
/// error text a host engine would produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueError {
    /// The error message
    pub message: String,
}

impl ValueError {
    /// Create a new generic error
    pub fn new(message: impl Into<String>) -> Self {
        ValueError {
            message: message.into(),
        }
    }

    /// Create an internal-slot type violation
    ///
    /// Raised by intrinsic prototype accessors when the receiver does not
    /// carry the internal slot the accessor requires.
    pub fn type_violation(message: impl Into<String>) -> Self {
        ValueError::new(format!("TypeError: {}", message.into()))
    }

    /// Create a range violation
    pub fn range_error(message: impl Into<String>) -> Self {
        ValueError::new(format!("RangeError: {}", message.into()))
    }

    /// Create an unsupported-feature error
    ///
    /// Raised by realm constructors for built-ins the realm was configured
    /// without (e.g. `WeakRef` in an older-environment realm).
    pub fn unsupported(message: impl Into<String>) -> Self {
        ValueError::new(format!("ReferenceError: {}", message.into()))
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValueError {}

/// Result type for value-model operations
pub type ValueResult<T> = Result<T, ValueError>;
