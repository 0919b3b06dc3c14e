//! Guarded, position-typed calculator.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. position type is `long` or `short`
//! 2. every number is finite
//! 3. new price differs from the desired average (zero divisor otherwise)
//! 4. the new price is favorable for the side
//!
//! The quantity is floored to whole units. Positive means buy more,
//! negative means sell.

use tracing::{debug, trace};

use crate::domain::{Holding, PositionSide, TradeCandidate};
use crate::error::{AdjustError, NOT_FAVORABLE, OUT_OF_RANGE, SAME_PRICE};

use super::ensure_finite;

/// Units to trade at `new_price` to move the average to
/// `desired_average_price`, with the side given as text.
pub fn compute(
    position_type: &str,
    initial_price: f64,
    initial_quantity: f64,
    new_price: f64,
    desired_average_price: f64,
) -> Result<i64, AdjustError> {
    let side = position_type.parse::<PositionSide>().map_err(|err| {
        debug!(position_type, "rejected position type");
        err
    })?;
    compute_for(
        side,
        Holding::new(initial_price, initial_quantity),
        TradeCandidate::new(new_price, desired_average_price),
    )
}

/// Typed entry point for callers that already hold a [`PositionSide`].
pub fn compute_for(
    side: PositionSide,
    holding: Holding,
    candidate: TradeCandidate,
) -> Result<i64, AdjustError> {
    ensure_finite(&[
        holding.average_price,
        holding.quantity,
        candidate.new_price,
        candidate.desired_average_price,
    ])?;

    if candidate.new_price == candidate.desired_average_price {
        debug!(new_price = candidate.new_price, "new price equals desired average");
        return Err(AdjustError::invalid_operation(SAME_PRICE));
    }

    if !side.is_favorable(holding.average_price, candidate.new_price) {
        debug!(
            %side,
            initial_price = holding.average_price,
            new_price = candidate.new_price,
            "new price not favorable"
        );
        return Err(AdjustError::invalid_operation(NOT_FAVORABLE));
    }

    let numerator = (candidate.desired_average_price - holding.average_price) * holding.quantity;
    let denominator = candidate.spread();
    let floored = (numerator / denominator).floor();

    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if !(floored >= i64::MIN as f64 && floored < i64::MAX as f64) {
        return Err(AdjustError::invalid_operation(OUT_OF_RANGE));
    }

    trace!(%side, numerator, denominator, quantity = floored, "guarded adjustment");
    Ok(floored as i64)
}
