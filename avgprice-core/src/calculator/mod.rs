//! The adjustment calculator.
//!
//! Two contracts live side by side and are never merged:
//! - [`guarded`]: takes a position side, rejects unfavorable trades, floors
//!   the result to whole units.
//! - [`unguarded`]: four raw numbers, no directional check, exact result.
//!
//! Callers pick one explicitly, either by calling the module function or by
//! building an [`AdjustmentRequest`] tagged with a [`CalculatorMode`].

pub mod guarded;
pub mod unguarded;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{Adjustment, Holding, Quantity};
use crate::error::{AdjustError, NON_FINITE_INPUT};

/// Which calculator contract to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorMode {
    /// Position-typed, favorability-guarded, floored to whole units.
    Guarded,
    /// Four-argument, unrounded.
    Unguarded,
}

impl CalculatorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guarded => "guarded",
            Self::Unguarded => "unguarded",
        }
    }
}

impl fmt::Display for CalculatorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for CalculatorMode {
    type Err = AdjustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guarded" => Ok(Self::Guarded),
            "unguarded" => Ok(Self::Unguarded),
            other => Err(AdjustError::InvalidArgument(format!(
                "Invalid calculator mode '{other}'. Must be 'guarded' or 'unguarded'."
            ))),
        }
    }
}

/// A single calculation request, tagged by the calculator it targets.
///
/// `position_type` stays free text so an unrecognized value is reported by
/// the calculator itself, with its own message, rather than by the
/// deserializer. Any other key, including a `position_type` on an unguarded
/// request, is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase", deny_unknown_fields)]
pub enum AdjustmentRequest {
    Guarded {
        position_type: String,
        initial_price: f64,
        initial_quantity: f64,
        new_price: f64,
        desired_average_price: f64,
    },
    Unguarded {
        initial_price: f64,
        initial_quantity: f64,
        new_price: f64,
        desired_average_price: f64,
    },
}

impl AdjustmentRequest {
    pub fn mode(&self) -> CalculatorMode {
        match self {
            Self::Guarded { .. } => CalculatorMode::Guarded,
            Self::Unguarded { .. } => CalculatorMode::Unguarded,
        }
    }

    /// The holding the request starts from.
    pub fn holding(&self) -> Holding {
        match *self {
            Self::Guarded {
                initial_price,
                initial_quantity,
                ..
            }
            | Self::Unguarded {
                initial_price,
                initial_quantity,
                ..
            } => Holding::new(initial_price, initial_quantity),
        }
    }

    pub fn new_price(&self) -> f64 {
        match *self {
            Self::Guarded { new_price, .. } | Self::Unguarded { new_price, .. } => new_price,
        }
    }

    /// Run the calculator this request is tagged with.
    pub fn evaluate(&self) -> Result<Adjustment, AdjustError> {
        let quantity = match self {
            Self::Guarded {
                position_type,
                initial_price,
                initial_quantity,
                new_price,
                desired_average_price,
            } => Quantity::Whole(guarded::compute(
                position_type,
                *initial_price,
                *initial_quantity,
                *new_price,
                *desired_average_price,
            )?),
            Self::Unguarded {
                initial_price,
                initial_quantity,
                new_price,
                desired_average_price,
            } => Quantity::Fractional(unguarded::compute(
                *initial_price,
                *initial_quantity,
                *new_price,
                *desired_average_price,
            )?),
        };
        Ok(Adjustment {
            mode: self.mode(),
            quantity,
        })
    }
}

fn ensure_finite(values: &[f64]) -> Result<(), AdjustError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(AdjustError::invalid_argument(NON_FINITE_INPUT))
    }
}
