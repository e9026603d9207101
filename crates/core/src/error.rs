//! Error types for quantity arithmetic and conversion.
//!
//! Every fallible operation in the crate returns [`QuantityResult`]. Errors are
//! plain data (serializable, comparable) so callers can inspect or forward them
//! without string matching.
//!
//! ```
//! use measura_core::{Length, QuantityError};
//!
//! let err = Length::meters(3.0).try_div(0.0).unwrap_err();
//! assert_eq!(err.error_code(), "DIVISION_BY_ZERO");
//! assert!(matches!(err, QuantityError::DivisionByZero { .. }));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the crate
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Failure raised by a guarded quantity operation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QuantityError {
    /// A divisor was exactly zero (scalar, base-unit quantity, or absolute zero)
    #[error("Division by zero in {operation}")]
    DivisionByZero { operation: String },

    /// Two kinds share a dimension but the source unit has no meaning in the target kind
    #[error("Unsupported conversion from {from_kind} to {to_kind}: unit '{symbol}' has no {to_kind} counterpart")]
    UnsupportedConversion {
        from_kind: String,
        to_kind: String,
        symbol: String,
    },

    /// An input is outside the domain of a derivation formula
    #[error("Invalid argument '{name}' = {value}: {reason}")]
    InvalidArgument {
        name: String,
        value: f64,
        reason: String,
    },
}

impl QuantityError {
    /// Create a `DivisionByZero` error
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        let operation = operation.into();
        tracing::debug!(%operation, "rejected zero divisor");
        QuantityError::DivisionByZero { operation }
    }

    /// Create an `UnsupportedConversion` error
    pub fn unsupported_conversion(
        from_kind: impl Into<String>,
        to_kind: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        let (from_kind, to_kind, symbol) = (from_kind.into(), to_kind.into(), symbol.into());
        tracing::debug!(%from_kind, %to_kind, %symbol, "rejected cross-kind conversion");
        QuantityError::UnsupportedConversion {
            from_kind,
            to_kind,
            symbol,
        }
    }

    /// Create an `InvalidArgument` error
    pub fn invalid_argument(name: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        let (name, reason) = (name.into(), reason.into());
        tracing::debug!(%name, value, %reason, "rejected argument");
        QuantityError::InvalidArgument {
            name,
            value,
            reason,
        }
    }

    /// Short, stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QuantityError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            QuantityError::UnsupportedConversion { .. } => "UNSUPPORTED_CONVERSION",
            QuantityError::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }
}
