//! Valuation Model.
//!
//! Turns one query listing into a point price estimate, a confidence band,
//! and bid thresholds. The estimate is a deterministic, auditable formula:
//!
//! 1. Era baseline: modern vehicles start from one constant, classics from
//!    another.
//! 2. Mileage adjustment: a non-increasing credit that decays with miles,
//!    floored at zero.
//! 3. Condition multiplier applied to (baseline + adjustment).
//! 4. Confidence band and bid thresholds as fixed fractions of the estimate.
//!
//! Every constant lives in [`ValuationParams`] so recalibration never touches
//! the algorithm.

pub mod model;
pub mod types;

pub use model::{ConditionMultipliers, ValuationModel, ValuationParams};
pub use types::{ConfidenceInterval, Valuation};
