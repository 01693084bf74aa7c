//! Report Assembler.
//!
//! Composes the three engines into one serializable [`AnalysisReport`] for
//! the presentation collaborator. Pure composition: the only failure mode is
//! a propagated input-validation error.

use serde::{Deserialize, Serialize};

use crate::comparables::{ComparableMatch, Ranker, RankerConfig};
use crate::error::Result;
use crate::market::{summarize, MarketSummary};
use crate::records::{AuctionRecord, ListingInput};
use crate::valuation::{Valuation, ValuationModel, ValuationParams};

/// Comparables returned by default when the caller does not override the
/// limit.
pub const DEFAULT_COMPARABLE_LIMIT: usize = 3;

/// Everything the presentation layer needs for one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Price prediction for the query listing
    pub valuation: Valuation,
    /// Ranked comparable prior sales
    pub comparables: Vec<ComparableMatch>,
    /// Aggregate market statistics over the full history
    pub summary: MarketSummary,
}

/// Composes valuation, comparables, and market summary into a report.
pub struct AnalysisEngine {
    model: ValuationModel,
    ranker: Ranker,
    comparable_limit: usize,
}

impl AnalysisEngine {
    /// Create an engine with default parameters.
    pub fn new() -> Self {
        Self {
            model: ValuationModel::new(),
            ranker: Ranker::new(),
            comparable_limit: DEFAULT_COMPARABLE_LIMIT,
        }
    }

    /// Create an engine with custom parameters.
    ///
    /// The same valuation parameters feed both the model and the ranker's
    /// price-delta tie-break, so the two never disagree on the expected
    /// price.
    pub fn with_params(params: ValuationParams, ranker_config: RankerConfig) -> Self {
        Self {
            model: ValuationModel::with_params(params.clone()),
            ranker: Ranker::with_config(ranker_config, params),
            comparable_limit: DEFAULT_COMPARABLE_LIMIT,
        }
    }

    /// Override the comparables limit.
    pub fn with_comparable_limit(mut self, limit: usize) -> Self {
        self.comparable_limit = limit;
        self
    }

    /// Build the full report for one listing.
    pub fn build_report(
        &self,
        listing: &ListingInput,
        history: &[AuctionRecord],
    ) -> Result<AnalysisReport> {
        let valuation = self.model.predict(listing, history)?;
        let comparables = self.ranker.rank(listing, history, self.comparable_limit)?;
        let summary = summarize(history);

        Ok(AnalysisReport {
            valuation,
            comparables,
            summary,
        })
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
