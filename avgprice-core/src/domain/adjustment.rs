//! Adjustment results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calculator::CalculatorMode;

/// Buy or sell, read off the sign of an adjustment quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl TradeAction {
    pub fn from_quantity(quantity: f64) -> Self {
        if quantity > 0.0 {
            Self::Buy
        } else if quantity < 0.0 {
            Self::Sell
        } else {
            Self::Hold
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Hold => "hold",
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Signed adjustment quantity. The guarded calculator floors to whole units;
/// the unguarded one returns the exact real value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Whole(i64),
    Fractional(f64),
}

impl Quantity {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Whole(q) => q as f64,
            Self::Fractional(q) => q,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole(q) => write!(f, "{q}"),
            Self::Fractional(q) => write!(f, "{q}"),
        }
    }
}

/// Outcome of a successful calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub mode: CalculatorMode,
    pub quantity: Quantity,
}

impl Adjustment {
    pub fn action(&self) -> TradeAction {
        TradeAction::from_quantity(self.quantity.as_f64())
    }

    pub fn as_f64(&self) -> f64 {
        self.quantity.as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_follows_sign() {
        assert_eq!(TradeAction::from_quantity(3.0), TradeAction::Buy);
        assert_eq!(TradeAction::from_quantity(-0.5), TradeAction::Sell);
        assert_eq!(TradeAction::from_quantity(0.0), TradeAction::Hold);
    }

    #[test]
    fn whole_quantity_displays_without_fraction() {
        assert_eq!(Quantity::Whole(-17).to_string(), "-17");
        assert_eq!(Quantity::Fractional(2.5).to_string(), "2.5");
    }

    #[test]
    fn adjustment_reports_action() {
        let adj = Adjustment {
            mode: CalculatorMode::Guarded,
            quantity: Quantity::Whole(-17),
        };
        assert_eq!(adj.action(), TradeAction::Sell);
        assert_eq!(adj.as_f64(), -17.0);
    }
}
