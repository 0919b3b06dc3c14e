//! avgprice core — weighted-average position adjustment.
//!
//! Given a holding's average price and quantity and a candidate trade price,
//! computes how many units to buy (positive) or sell (negative) so the
//! holding's average price lands on a target value.
//!
//! - Domain values (holding, trade candidate, adjustment, position side)
//! - Guarded calculator: position-typed, favorability check, whole units
//! - Unguarded calculator: four raw numbers, exact result
//! - Scenario files and batch evaluation
//!
//! Every calculation is a pure function of its inputs.

pub mod calculator;
pub mod domain;
pub mod error;
pub mod scenario;

pub use calculator::{guarded, unguarded, AdjustmentRequest, CalculatorMode};
pub use domain::{Adjustment, Holding, PositionSide, Quantity, TradeAction, TradeCandidate};
pub use error::AdjustError;
pub use scenario::{OutcomeRecord, Scenario, ScenarioError, ScenarioFile, ScenarioOutcome};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: every public value type can cross threads, so
    /// callers may share requests and results without coordination.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<PositionSide>();
        require_sync::<PositionSide>();
        require_send::<Holding>();
        require_sync::<Holding>();
        require_send::<TradeCandidate>();
        require_sync::<TradeCandidate>();
        require_send::<Adjustment>();
        require_sync::<Adjustment>();
        require_send::<AdjustmentRequest>();
        require_sync::<AdjustmentRequest>();
        require_send::<AdjustError>();
        require_sync::<AdjustError>();
        require_send::<ScenarioFile>();
        require_sync::<ScenarioFile>();
        require_send::<ScenarioOutcome>();
        require_sync::<ScenarioOutcome>();
    }

    /// Both calculators are plain functions over `f64`; there is no receiver
    /// that could carry state between calls.
    #[test]
    fn calculators_are_stateless_functions() {
        let g: fn(&str, f64, f64, f64, f64) -> Result<i64, AdjustError> = guarded::compute;
        let u: fn(f64, f64, f64, f64) -> Result<f64, AdjustError> = unguarded::compute;

        assert_eq!(g("long", 100.0, 50.0, 120.0, 110.0), g("long", 100.0, 50.0, 120.0, 110.0));
        assert_eq!(u(100.0, 50.0, 120.0, 110.0), u(100.0, 50.0, 120.0, 110.0));
    }
}
