//! Similarity scoring and ranking.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::records::{AuctionRecord, Condition, ListingInput};
use crate::valuation::{ValuationModel, ValuationParams};

/// A historical record matched to the query, with its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparableMatch {
    /// Owned copy of the matched record
    pub record: AuctionRecord,
    /// Similarity in [0, 1], 1 = identical on all scored features
    pub similarity: f64,
}

/// Ranker configuration.
///
/// Feature weights sum to 1 so a record identical on every feature scores
/// exactly 1.0. Spans normalize raw deltas into [0, 1] distances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Weight of the make+model exact-match feature (highest by default)
    pub make_model_weight: f64,
    /// Weight of the model-year distance
    pub year_weight: f64,
    /// Weight of the mileage distance
    pub mileage_weight: f64,
    /// Weight of the condition-rank distance
    pub condition_weight: f64,
    /// Year delta treated as maximally distant
    pub max_year_span: f64,
    /// Mileage delta treated as maximally distant
    pub max_mileage_span: f64,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            make_model_weight: 0.40,
            year_weight: 0.25,
            mileage_weight: 0.20,
            condition_weight: 0.15,
            max_year_span: 20.0,
            max_mileage_span: 100_000.0,
        }
    }
}

/// Ranks historical records by similarity to a query listing.
pub struct Ranker {
    config: RankerConfig,
    model: ValuationModel,
}

impl Ranker {
    /// Create a ranker with default config and valuation parameters.
    pub fn new() -> Self {
        Self {
            config: RankerConfig::default(),
            model: ValuationModel::new(),
        }
    }

    /// Create a ranker with custom config and valuation parameters.
    ///
    /// The valuation parameters drive the price-delta tie-break, so callers
    /// composing a full report pass the same set they predict with.
    pub fn with_config(config: RankerConfig, params: ValuationParams) -> Self {
        Self {
            config,
            model: ValuationModel::with_params(params),
        }
    }

    /// Rank `history` against `listing`, returning at most `limit` matches.
    ///
    /// Ordering: similarity descending; ties by smaller absolute difference
    /// between the record's sale price and the listing's expected price;
    /// remaining ties by most recent sale month. Empty history returns an
    /// empty vec, not an error.
    pub fn rank(
        &self,
        listing: &ListingInput,
        history: &[AuctionRecord],
        limit: usize,
    ) -> Result<Vec<ComparableMatch>> {
        listing.validate()?;

        if history.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        // One valuation drives every price-delta tie-break.
        let expected = self.model.predict(listing, history)?.expected_final_price as f64;

        let mut scored: Vec<(ComparableMatch, f64)> = history
            .iter()
            .map(|record| {
                let similarity = self.similarity(listing, record);
                let price_delta = (record.actual_price - expected).abs();
                (
                    ComparableMatch {
                        record: record.clone(),
                        similarity,
                    },
                    price_delta,
                )
            })
            .collect();

        scored.sort_by(|(a, a_delta), (b, b_delta)| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a_delta
                        .partial_cmp(b_delta)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| b.record.sale_month.cmp(&a.record.sale_month))
        });

        scored.truncate(limit);

        tracing::debug!(
            candidates = history.len(),
            returned = scored.len(),
            "comparables ranked"
        );

        Ok(scored.into_iter().map(|(m, _)| m).collect())
    }

    /// Weighted similarity in [0, 1].
    fn similarity(&self, listing: &ListingInput, record: &AuctionRecord) -> f64 {
        let make_model_distance = if listing.make.eq_ignore_ascii_case(&record.make)
            && listing.model.eq_ignore_ascii_case(&record.model)
        {
            0.0
        } else {
            1.0
        };

        let year_distance =
            ((listing.year - record.year).abs() as f64 / self.config.max_year_span).min(1.0);

        let mileage_distance =
            ((listing.mileage - record.mileage).abs() as f64 / self.config.max_mileage_span)
                .min(1.0);

        let rank_gap = listing.condition.rank().abs_diff(record.condition.rank());
        let condition_distance = rank_gap as f64 / Condition::RANK_GAPS as f64;

        let weighted = self.config.make_model_weight * make_model_distance
            + self.config.year_weight * year_distance
            + self.config.mileage_weight * mileage_distance
            + self.config.condition_weight * condition_distance;

        (1.0 - weighted).clamp(0.0, 1.0)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
