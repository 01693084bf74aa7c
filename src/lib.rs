//! Auction Valuation Library
//!
//! Deterministic valuation, comparables ranking, and market aggregation for
//! collectible-vehicle auction analysis.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        auction-valuation                        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌───────────────┐  ┌────────────────┐  ┌───────────────────┐  │
//! │  │  Valuation    │  │  Comparables   │  │  Aggregation      │  │
//! │  │  Model        │  │  Ranker        │  │  Engine           │  │
//! │  └───────┬───────┘  └───────┬────────┘  └─────────┬─────────┘  │
//! │          └──────────────────┼─────────────────────┘            │
//! │                     ┌───────┴────────┐                         │
//! │                     │    Report      │                         │
//! │                     │    Assembler   │                         │
//! │                     └────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A [`store::RecordStore`] collaborator supplies the historical records and
//! the query listing; the [`report::AnalysisEngine`] composes the three
//! engines into one serializable [`report::AnalysisReport`] for whatever
//! renders it.
//!
//! # Key Concepts
//!
//! - **Baseline**: the era-dependent starting price before adjustments;
//!   modern and classic vehicles start from different documented constants.
//! - **Similarity**: a [0, 1] score combining weighted, normalized feature
//!   distances; mismatches degrade it but never hard-exclude a record.
//! - **Market summary**: fully derived aggregates (accuracy, median, trends,
//!   category distribution, MAE/RMSE/R²), recomputable at any time and
//!   memoizable on a content fingerprint.
//!
//! Every operation is a pure function of its inputs: no shared mutable
//! state, no I/O, safe to run concurrently without coordination. The only
//! error the engines raise is input validation on the query listing; every
//! degenerate input (empty history, missing predictions, zero variance) is a
//! documented valid result.
//!
//! # Usage
//!
//! ```ignore
//! use auction_valuation::{AnalysisEngine, ListingInput};
//!
//! let engine = AnalysisEngine::new();
//! let report = engine.build_report(&listing, store.history())?;
//!
//! println!("Expected price: {}", report.valuation.expected_final_price);
//! ```

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod comparables;
pub mod error;
pub mod market;
pub mod records;
pub mod report;
pub mod store;
pub mod valuation;

pub use comparables::{ComparableMatch, Ranker, RankerConfig};
pub use error::{Error, Result};
pub use market::{summarize, MarketSummary, SummaryCache};
pub use records::{AuctionRecord, Category, Condition, ListingInput};
pub use report::{AnalysisEngine, AnalysisReport};
pub use valuation::{Valuation, ValuationModel, ValuationParams};
