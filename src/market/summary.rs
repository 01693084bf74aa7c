//! Market summary aggregation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::records::{AuctionRecord, Category};

/// Min/max of observed sale prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Mean sale price for one calendar month bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Month bucket, ISO "YYYY-MM"
    pub period: String,
    /// Mean sale price in that month
    pub avg_price: f64,
}

/// Prediction error metrics over records carrying both prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Mean absolute error
    pub mae: f64,
    /// Root mean squared error
    pub rmse: f64,
    /// Coefficient of determination; 0 when actual-price variance is zero
    pub r2: f64,
}

/// Aggregate market statistics over a record collection.
///
/// Fully derived: recomputable at any time, replaced (never mutated) when
/// the underlying collection changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSummary {
    /// Mean prediction accuracy (%), over records with both prices
    pub avg_accuracy: f64,
    /// Population standard deviation of the per-record accuracy error (%)
    pub accuracy_std_dev: f64,
    /// Number of records aggregated
    pub total_count: usize,
    /// Median sale price
    pub median_price: f64,
    /// Observed sale price range
    pub price_range: PriceRange,
    /// Mean sale price per month, in chronological (insertion) order;
    /// months without records are omitted
    pub price_trends: Vec<TrendPoint>,
    /// Record count per category; absent categories are omitted
    pub category_distribution: HashMap<Category, usize>,
    /// Prediction error metrics
    pub model_metrics: ModelMetrics,
}

impl MarketSummary {
    /// Zeroed summary for an empty collection.
    fn empty() -> Self {
        Self {
            avg_accuracy: 0.0,
            accuracy_std_dev: 0.0,
            total_count: 0,
            median_price: 0.0,
            price_range: PriceRange { min: 0.0, max: 0.0 },
            price_trends: Vec::new(),
            category_distribution: HashMap::new(),
            model_metrics: ModelMetrics {
                mae: 0.0,
                rmse: 0.0,
                r2: 0.0,
            },
        }
    }
}

/// Per-month accumulator for the trend series.
struct MonthBucket {
    period: String,
    price_sum: f64,
    count: usize,
}

/// Summarize a record collection.
///
/// Total function: empty input yields [`MarketSummary::empty`]-shaped
/// output. Grouping is a single pass with keyed accumulators; records
/// missing `predicted_price` are excluded from the accuracy and error
/// metrics but counted everywhere else.
pub fn summarize(history: &[AuctionRecord]) -> MarketSummary {
    if history.is_empty() {
        return MarketSummary::empty();
    }

    let mut prices: Vec<f64> = Vec::with_capacity(history.len());
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    let mut buckets: Vec<MonthBucket> = Vec::new();
    let mut bucket_index: HashMap<String, usize> = HashMap::new();
    let mut category_distribution: HashMap<Category, usize> = HashMap::new();

    // Per-record values where both prices exist.
    let mut pct_errors: Vec<f64> = Vec::new();
    let mut abs_errors: Vec<f64> = Vec::new();
    let mut sq_errors: Vec<f64> = Vec::new();
    let mut scored_actuals: Vec<f64> = Vec::new();

    for record in history {
        prices.push(record.actual_price);
        min = min.min(record.actual_price);
        max = max.max(record.actual_price);

        let idx = *bucket_index
            .entry(record.sale_month.clone())
            .or_insert_with(|| {
                buckets.push(MonthBucket {
                    period: record.sale_month.clone(),
                    price_sum: 0.0,
                    count: 0,
                });
                buckets.len() - 1
            });
        buckets[idx].price_sum += record.actual_price;
        buckets[idx].count += 1;

        *category_distribution.entry(record.category).or_insert(0) += 1;

        if let Some(predicted) = record.predicted_price {
            let abs_error = (record.actual_price - predicted).abs();
            pct_errors.push(abs_error / record.actual_price * 100.0);
            abs_errors.push(abs_error);
            sq_errors.push(abs_error * abs_error);
            scored_actuals.push(record.actual_price);
        }
    }

    let (avg_accuracy, accuracy_std_dev) = if pct_errors.is_empty() {
        (0.0, 0.0)
    } else {
        (
            100.0 - pct_errors.iter().mean(),
            pct_errors.iter().population_std_dev(),
        )
    };

    let model_metrics = if abs_errors.is_empty() {
        ModelMetrics {
            mae: 0.0,
            rmse: 0.0,
            r2: 0.0,
        }
    } else {
        let mae = abs_errors.iter().mean();
        let rmse = sq_errors.iter().mean().sqrt();
        let mean_actual = scored_actuals.iter().mean();
        let ss_res: f64 = sq_errors.iter().sum();
        let ss_tot: f64 = scored_actuals
            .iter()
            .map(|a| (a - mean_actual) * (a - mean_actual))
            .sum();
        let r2 = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };
        ModelMetrics { mae, rmse, r2 }
    };

    let price_trends = buckets
        .into_iter()
        .map(|b| TrendPoint {
            period: b.period,
            avg_price: b.price_sum / b.count as f64,
        })
        .collect();

    let summary = MarketSummary {
        avg_accuracy,
        accuracy_std_dev,
        total_count: history.len(),
        median_price: median(&mut prices),
        price_range: PriceRange { min, max },
        price_trends,
        category_distribution,
        model_metrics,
    };

    tracing::debug!(
        records = summary.total_count,
        months = summary.price_trends.len(),
        "market summary computed"
    );

    summary
}

/// Standard median: average of the two middle values for even counts.
fn median(values: &mut [f64]) -> f64 {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let len = values.len();
    if len % 2 == 0 {
        (values[len / 2 - 1] + values[len / 2]) / 2.0
    } else {
        values[len / 2]
    }
}

// ============================================================================
// Tests
// ============================================================================
