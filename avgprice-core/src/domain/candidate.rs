use serde::{Deserialize, Serialize};

/// A prospective trade: the price it would execute at and the average price
/// the holding should end up with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeCandidate {
    pub new_price: f64,
    pub desired_average_price: f64,
}

impl TradeCandidate {
    pub fn new(new_price: f64, desired_average_price: f64) -> Self {
        Self {
            new_price,
            desired_average_price,
        }
    }

    /// `new_price - desired_average_price`, the divisor of both formulas.
    pub fn spread(&self) -> f64 {
        self.new_price - self.desired_average_price
    }
}
