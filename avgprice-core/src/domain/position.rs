use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AdjustError, INVALID_POSITION_TYPE};

/// Direction of a held position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionSide {
    /// Profits from price increases.
    Long,
    /// Profits from price decreases.
    Short,
}

impl PositionSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }

    /// Whether trading at `new_price` moves in this side's favor relative to
    /// `initial_price`. Equal prices are favorable for both sides.
    pub fn is_favorable(&self, initial_price: f64, new_price: f64) -> bool {
        match self {
            Self::Long => new_price >= initial_price,
            Self::Short => new_price <= initial_price,
        }
    }
}

impl FromStr for PositionSide {
    type Err = AdjustError;

    /// Accepts exactly `"long"` or `"short"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            _ => Err(AdjustError::invalid_argument(INVALID_POSITION_TYPE)),
        }
    }
}

impl fmt::Display for PositionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// An existing holding: units held at a known average price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub average_price: f64,
    pub quantity: f64,
}

impl Holding {
    pub fn new(average_price: f64, quantity: f64) -> Self {
        Self {
            average_price,
            quantity,
        }
    }

    /// Weighted average price after trading `trade_quantity` units (signed,
    /// positive = buy) at `trade_price`.
    ///
    /// Returns `None` when the trade leaves the position flat, since a flat
    /// position has no average.
    pub fn projected_average(&self, trade_price: f64, trade_quantity: f64) -> Option<f64> {
        let total = self.quantity + trade_quantity;
        if total == 0.0 {
            return None;
        }
        Some((self.average_price * self.quantity + trade_price * trade_quantity) / total)
    }
}
