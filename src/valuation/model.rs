//! Valuation model implementation.

use serde::{Deserialize, Serialize};

use super::types::{ConfidenceInterval, Valuation};
use crate::error::Result;
use crate::records::{AuctionRecord, Condition, ListingInput};

/// Multiplicative condition factors, strictly decreasing from Excellent to
/// Poor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConditionMultipliers {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
    pub poor: f64,
}

impl ConditionMultipliers {
    /// Factor for one condition grade.
    pub fn factor(&self, condition: Condition) -> f64 {
        match condition {
            Condition::Excellent => self.excellent,
            Condition::Good => self.good,
            Condition::Fair => self.fair,
            Condition::Poor => self.poor,
        }
    }
}

impl Default for ConditionMultipliers {
    fn default() -> Self {
        Self {
            excellent: 1.2,
            good: 1.0,
            fair: 0.8,
            poor: 0.65,
        }
    }
}

/// Valuation model configuration.
///
/// Defaults reproduce the calibration of the original prediction pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationParams {
    /// Model years strictly above this use the modern baseline
    pub modern_year_cutoff: i32,
    /// Baseline price for modern vehicles
    pub modern_baseline: f64,
    /// Baseline price for classic vehicles (also the cold-start global
    /// default when no history exists)
    pub classic_baseline: f64,
    /// Mileage credit at zero miles
    pub mileage_credit: f64,
    /// Credit lost per 1,000 miles driven
    pub decrement_per_thousand_miles: f64,
    /// Condition multipliers
    pub condition_multipliers: ConditionMultipliers,
    /// Half-width of the confidence band as a fraction of the estimate
    pub confidence_fraction: f64,
    /// Minimum winning bid as a fraction of the estimate (< 1)
    pub min_bid_factor: f64,
    /// Maximum rational bid as a fraction of the estimate (> 1)
    pub max_bid_factor: f64,
}

impl Default for ValuationParams {
    fn default() -> Self {
        Self {
            modern_year_cutoff: 2015,
            modern_baseline: 80_000.0,
            classic_baseline: 45_000.0,
            mileage_credit: 20_000.0,
            decrement_per_thousand_miles: 100.0,
            condition_multipliers: ConditionMultipliers::default(),
            confidence_fraction: 0.15,
            min_bid_factor: 0.92,
            max_bid_factor: 1.08,
        }
    }
}

/// Deterministic price model.
pub struct ValuationModel {
    params: ValuationParams,
}

impl ValuationModel {
    /// Create a model with default parameters.
    pub fn new() -> Self {
        Self {
            params: ValuationParams::default(),
        }
    }

    /// Create a model with custom parameters.
    pub fn with_params(params: ValuationParams) -> Self {
        Self { params }
    }

    /// The active parameter set.
    pub fn params(&self) -> &ValuationParams {
        &self.params
    }

    /// Predict the final price for a listing.
    ///
    /// Pure and reproducible: the same listing and parameters always yield
    /// the same valuation. An empty `history` never fails; the configured
    /// baselines are the cold-start defaults.
    pub fn predict(&self, listing: &ListingInput, history: &[AuctionRecord]) -> Result<Valuation> {
        listing.validate()?;

        let baseline = if listing.year > self.params.modern_year_cutoff {
            self.params.modern_baseline
        } else {
            self.params.classic_baseline
        };

        let driven_thousands = listing.mileage as f64 / 1_000.0;
        let mileage_adjustment = (self.params.mileage_credit
            - driven_thousands * self.params.decrement_per_thousand_miles)
            .max(0.0);

        let multiplier = self.params.condition_multipliers.factor(listing.condition);
        let expected = ((baseline + mileage_adjustment) * multiplier).round();

        let expected_final_price = expected as u64;
        let confidence = (expected * self.params.confidence_fraction).round() as u64;

        let valuation = Valuation {
            expected_final_price,
            minimum_winning_bid: (expected * self.params.min_bid_factor).round() as u64,
            maximum_rational_bid: (expected * self.params.max_bid_factor).round() as u64,
            confidence_interval: ConfidenceInterval {
                lower: expected_final_price.saturating_sub(confidence),
                upper: expected_final_price + confidence,
            },
        };

        tracing::debug!(
            year = listing.year,
            mileage = listing.mileage,
            condition = %listing.condition,
            history = history.len(),
            expected = valuation.expected_final_price,
            "valuation computed"
        );

        Ok(valuation)
    }
}

impl Default for ValuationModel {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
