//! Calculator errors.
//!
//! Both kinds are terminal for the call: the calculator never retries and
//! never returns a partial result. `Display` is the bare message so callers
//! can show it to the user unchanged.

use thiserror::Error;

pub const INVALID_POSITION_TYPE: &str = "Invalid position type. Must be 'long' or 'short'.";
pub const NON_FINITE_INPUT: &str = "Prices and quantities must be finite numbers.";
pub const SAME_PRICE: &str = "New price and desired average price cannot be the same.";
pub const NOT_FAVORABLE: &str = "New price not favorable for adjustment based on position type.";
pub const OUT_OF_RANGE: &str = "Adjustment quantity is out of range.";

/// Errors returned by the adjustment calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdjustError {
    /// Malformed or out-of-domain input.
    #[error("{0}")]
    InvalidArgument(String),
    /// Mathematically undefined or policy-disallowed request.
    #[error("{0}")]
    InvalidOperation(String),
}

impl AdjustError {
    pub(crate) fn invalid_argument(message: &str) -> Self {
        Self::InvalidArgument(message.to_string())
    }

    pub(crate) fn invalid_operation(message: &str) -> Self {
        Self::InvalidOperation(message.to_string())
    }

    /// Stable kind name for structured output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::InvalidOperation(_) => "InvalidOperation",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) | Self::InvalidOperation(msg) => msg,
        }
    }
}
