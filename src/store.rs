//! Record-store collaborator boundary.
//!
//! The engines never fetch data themselves; a [`RecordStore`] hands them the
//! historical records and the query listing. This module also carries the
//! parsers for the three JSON documents the external ingestion pipeline
//! produces (raw listing, comparables, prediction). Malformed documents fail
//! here, at the boundary, and never reach the core engines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::records::{AuctionRecord, Category, Condition, ListingInput};
use crate::valuation::Valuation;

/// Supplies historical records and the query listing. The core never writes
/// back.
pub trait RecordStore {
    /// Historical closed-auction records, in ingestion (chronological) order.
    fn history(&self) -> &[AuctionRecord];

    /// The listing under valuation.
    fn query_listing(&self) -> &ListingInput;
}

/// Simple owned store for tests and embedding callers.
pub struct InMemoryStore {
    history: Vec<AuctionRecord>,
    listing: ListingInput,
}

impl InMemoryStore {
    pub fn new(history: Vec<AuctionRecord>, listing: ListingInput) -> Self {
        Self { history, listing }
    }
}

impl RecordStore for InMemoryStore {
    fn history(&self) -> &[AuctionRecord] {
        &self.history
    }

    fn query_listing(&self) -> &ListingInput {
        &self.listing
    }
}

/// One entry of a raw listing's bid history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidEntry {
    /// Bid amount
    pub amount: f64,
    /// When the bid was placed, if the scrape captured it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Raw scraped listing document (`parsed_data.json` shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDocument {
    pub title: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub mileage: i64,
    pub condition: Condition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub seller_rating: u8,
    /// Highest bid at scrape time
    pub current_bid: f64,
    /// Observed bids so far
    #[serde(default)]
    pub bid_history: Vec<BidEntry>,
    /// Scheduled close, ISO-8601
    pub time_to_close: DateTime<Utc>,
}

impl ListingDocument {
    /// Convert into a query listing.
    ///
    /// The raw scrape has no market category, so the caller assigns one.
    pub fn into_listing(self, category: Category) -> ListingInput {
        let days_remaining = (self.time_to_close - Utc::now()).num_days().max(0) as u32;
        ListingInput {
            title: self.title,
            year: self.year,
            make: self.make,
            model: self.model,
            mileage: self.mileage,
            condition: self.condition,
            category,
            seller_rating: self.seller_rating,
            time_to_close_days: days_remaining,
            description: self.description,
        }
    }
}

/// Parse a raw listing document.
pub fn parse_listing_document(json: &str) -> Result<ListingDocument> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a comparables document: an array of auction records.
pub fn parse_comparables_document(json: &str) -> Result<Vec<AuctionRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a prediction document. The shape is exactly [`Valuation`], so
/// engine output and externally produced predictions are interchangeable.
pub fn parse_prediction_document(json: &str) -> Result<Valuation> {
    Ok(serde_json::from_str(json)?)
}

// ============================================================================
// Tests
// ============================================================================
