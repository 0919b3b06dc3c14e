//! Value types for position adjustment.
//!
//! Nothing here is persisted; every value lives for a single calculation.

pub mod adjustment;
pub mod candidate;
pub mod position;

pub use adjustment::{Adjustment, Quantity, TradeAction};
pub use candidate::TradeCandidate;
pub use position::{Holding, PositionSide};
