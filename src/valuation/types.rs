//! Valuation output types.
//!
//! `Valuation` serializes to exactly the shape of the externally exchanged
//! prediction document, so an engine-produced valuation and a file-produced
//! one are interchangeable.

use serde::{Deserialize, Serialize};

/// Band expected to contain the true sale price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound, never negative
    pub lower: u64,
    /// Upper bound
    pub upper: u64,
}

/// Price prediction for one listing.
///
/// Invariants, upheld by the model and checked in tests:
/// `minimum_winning_bid <= expected_final_price <= maximum_rational_bid` and
/// `confidence_interval.lower <= expected_final_price <= confidence_interval.upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    /// Expected final sale price
    pub expected_final_price: u64,
    /// Bid level likely to win
    pub minimum_winning_bid: u64,
    /// Bid level beyond which overpaying starts
    pub maximum_rational_bid: u64,
    /// 95% confidence band around the expected price
    pub confidence_interval: ConfidenceInterval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_document_shape() {
        let valuation = Valuation {
            expected_final_price: 92_500,
            minimum_winning_bid: 88_000,
            maximum_rational_bid: 95_000,
            confidence_interval: ConfidenceInterval {
                lower: 85_000,
                upper: 100_000,
            },
        };

        let json = serde_json::to_string(&valuation).unwrap();
        assert!(json.contains("expectedFinalPrice"));
        assert!(json.contains("minimumWinningBid"));
        assert!(json.contains("maximumRationalBid"));
        assert!(json.contains("confidenceInterval"));
    }

    #[test]
    fn test_round_trip_is_identical() {
        let valuation = Valuation {
            expected_final_price: 72_600,
            minimum_winning_bid: 66_792,
            maximum_rational_bid: 78_408,
            confidence_interval: ConfidenceInterval {
                lower: 61_710,
                upper: 83_490,
            },
        };

        let json = serde_json::to_string(&valuation).unwrap();
        let parsed: Valuation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, valuation);
    }
}
