//! Unguarded four-argument calculator.
//!
//! No side and no directional check. The only precondition is a non-zero
//! divisor. The result is the exact real quantity, positive = buy.

use tracing::{debug, trace};

use crate::error::{AdjustError, OUT_OF_RANGE, SAME_PRICE};

use super::ensure_finite;

/// `((P_a * Q_b) - (P_b * Q_b)) / (P_n - P_a)`, evaluated in that form.
pub fn compute(
    initial_price: f64,
    initial_quantity: f64,
    new_price: f64,
    desired_average_price: f64,
) -> Result<f64, AdjustError> {
    ensure_finite(&[initial_price, initial_quantity, new_price, desired_average_price])?;

    if new_price == desired_average_price {
        debug!(new_price, "new price equals desired average");
        return Err(AdjustError::invalid_operation(SAME_PRICE));
    }

    let quantity = ((desired_average_price * initial_quantity)
        - (initial_price * initial_quantity))
        / (new_price - desired_average_price);

    if !quantity.is_finite() {
        return Err(AdjustError::invalid_operation(OUT_OF_RANGE));
    }

    trace!(quantity, "unguarded adjustment");
    Ok(quantity)
}
