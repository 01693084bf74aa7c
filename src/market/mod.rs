//! Aggregation Engine.
//!
//! Rolls a historical record collection up into the summary statistics and
//! time series used for trend reporting: prediction-accuracy stats, median
//! and range of sale prices, monthly price trends, category distribution,
//! and model error metrics (MAE / RMSE / R²).
//!
//! [`summarize`] is total: an empty collection yields a zeroed summary, never
//! an error. [`SummaryCache`] memoizes the result on a content fingerprint of
//! the collection.

pub mod cache;
pub mod summary;

pub use cache::SummaryCache;
pub use summary::{summarize, MarketSummary, ModelMetrics, PriceRange, TrendPoint};
