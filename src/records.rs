//! Shared domain types.
//!
//! `AuctionRecord` is the immutable historical fact produced by the external
//! ingestion pipeline; `ListingInput` is the transient query a caller builds
//! per prediction request. Both carry the camelCase field names of the
//! exchanged JSON documents.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Earliest model year accepted by input validation.
pub const MIN_YEAR: i32 = 1900;

/// Vehicle condition grade.
///
/// Deserializes from both the lowercase form used by the query pipeline and
/// the capitalized form found in the comparables document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[serde(alias = "Excellent")]
    Excellent,
    #[serde(alias = "Good")]
    Good,
    #[serde(alias = "Fair")]
    Fair,
    #[serde(alias = "Poor")]
    Poor,
}

impl Condition {
    /// Ordinal rank, 0 = Excellent through 3 = Poor.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Excellent => 0,
            Self::Good => 1,
            Self::Fair => 2,
            Self::Poor => 3,
        }
    }

    /// Number of gaps between the best and worst rank.
    pub const RANK_GAPS: u8 = 3;
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
            Self::Poor => write!(f, "Poor"),
        }
    }
}

/// Vehicle market category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sports,
    Classic,
    Luxury,
    Exotic,
    Muscle,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sports => write!(f, "Sports"),
            Self::Classic => write!(f, "Classic"),
            Self::Luxury => write!(f, "Luxury"),
            Self::Exotic => write!(f, "Exotic"),
            Self::Muscle => write!(f, "Muscle"),
        }
    }
}

/// A closed historical auction outcome.
///
/// Created by ingestion, immutable thereafter. The engines only ever borrow
/// these; derived outputs own their own copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionRecord {
    /// Unique record id
    pub id: u64,
    /// Auction title
    pub title: String,
    /// Model year
    pub year: i32,
    /// Manufacturer
    pub make: String,
    /// Model name
    pub model: String,
    /// Odometer miles
    pub mileage: i64,
    /// Condition grade
    pub condition: Condition,
    /// Market category
    pub category: Category,
    /// Seller rating, 0-100
    pub seller_rating: u8,
    /// Price predicted before close, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_price: Option<f64>,
    /// Final sale price
    pub actual_price: f64,
    /// Calendar month bucket of the sale, ISO "YYYY-MM"
    pub sale_month: String,
    /// Auction duration in days
    pub time_to_close_days: u32,
}

/// The query listing under valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingInput {
    /// Auction title
    pub title: String,
    /// Model year
    pub year: i32,
    /// Manufacturer
    pub make: String,
    /// Model name
    pub model: String,
    /// Odometer miles
    pub mileage: i64,
    /// Condition grade
    pub condition: Condition,
    /// Market category
    pub category: Category,
    /// Seller rating, 0-100
    pub seller_rating: u8,
    /// Expected days until the auction closes
    pub time_to_close_days: u32,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ListingInput {
    /// Validate the fields the engines compute from.
    ///
    /// Runs before any computation; the engines are total once this passes.
    pub fn validate(&self) -> Result<()> {
        let max_year = Utc::now().year() + 1;
        if self.year < MIN_YEAR || self.year > max_year {
            return Err(Error::InvalidInput(format!(
                "year {} outside {}..={}",
                self.year, MIN_YEAR, max_year
            )));
        }
        if self.mileage < 0 {
            return Err(Error::InvalidInput(format!(
                "mileage {} is negative",
                self.mileage
            )));
        }
        if self.seller_rating > 100 {
            return Err(Error::InvalidInput(format!(
                "seller rating {} exceeds 100",
                self.seller_rating
            )));
        }
        Ok(())
    }
}
