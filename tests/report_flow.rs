//! End-to-end report pipeline tests: parse boundary documents, build the
//! store, run the full analysis, and check the composed report.

use auction_valuation::store::{
    parse_comparables_document, parse_listing_document, InMemoryStore, RecordStore,
};
use auction_valuation::{AnalysisEngine, Category, SummaryCache};

const LISTING_DOC: &str = r#"{
    "title": "1967 Porsche 911S",
    "year": 1967,
    "make": "Porsche",
    "model": "911S",
    "mileage": 45000,
    "condition": "Excellent",
    "description": "Numbers-matching short-wheelbase S",
    "sellerRating": 98,
    "currentBid": 85000,
    "bidHistory": [{ "amount": 78000 }, { "amount": 85000 }],
    "timeToClose": "2030-01-15T18:00:00Z"
}"#;

const COMPS_DOC: &str = r#"[
    {
        "id": 1,
        "title": "1967 Porsche 911S Coupe",
        "year": 1967,
        "make": "Porsche",
        "model": "911S",
        "mileage": 48000,
        "condition": "Excellent",
        "category": "sports",
        "sellerRating": 96,
        "predictedPrice": 71000,
        "actualPrice": 73500,
        "saleMonth": "2024-09",
        "timeToCloseDays": 7
    },
    {
        "id": 2,
        "title": "1966 Porsche 911",
        "year": 1966,
        "make": "Porsche",
        "model": "911",
        "mileage": 61000,
        "condition": "Good",
        "category": "sports",
        "sellerRating": 90,
        "predictedPrice": 58000,
        "actualPrice": 61000,
        "saleMonth": "2024-07",
        "timeToCloseDays": 10
    },
    {
        "id": 3,
        "title": "1971 Ferrari 365 GTB/4",
        "year": 1971,
        "make": "Ferrari",
        "model": "365 GTB/4",
        "mileage": 30000,
        "condition": "Excellent",
        "category": "exotic",
        "sellerRating": 99,
        "actualPrice": 650000,
        "saleMonth": "2024-08",
        "timeToCloseDays": 14
    },
    {
        "id": 4,
        "title": "1968 Porsche 911L",
        "year": 1968,
        "make": "Porsche",
        "model": "911L",
        "mileage": 52000,
        "condition": "Good",
        "category": "sports",
        "sellerRating": 91,
        "predictedPrice": 66000,
        "actualPrice": 64000,
        "saleMonth": "2024-09",
        "timeToCloseDays": 7
    }
]"#;

#[test]
fn full_pipeline_from_documents_to_report() {
    let listing = parse_listing_document(LISTING_DOC)
        .unwrap()
        .into_listing(Category::Sports);
    let history = parse_comparables_document(COMPS_DOC).unwrap();
    let store = InMemoryStore::new(history, listing);

    let engine = AnalysisEngine::new();
    let report = engine
        .build_report(store.query_listing(), store.history())
        .unwrap();

    // Valuation: classic baseline, 45k miles, Excellent.
    assert_eq!(report.valuation.expected_final_price, 72_600);
    assert!(report.valuation.minimum_winning_bid <= report.valuation.expected_final_price);
    assert!(report.valuation.expected_final_price <= report.valuation.maximum_rational_bid);

    // Comparables: the 1967 911S is the closest match; the Ferrari scores
    // lowest but is still eligible.
    assert_eq!(report.comparables.len(), 3);
    assert_eq!(report.comparables[0].record.id, 1);
    for pair in report.comparables.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }

    // Summary: all four records aggregated, two categories, three months.
    assert_eq!(report.summary.total_count, 4);
    assert_eq!(report.summary.category_distribution.len(), 2);
    assert_eq!(report.summary.price_trends.len(), 3);
    assert_eq!(report.summary.category_distribution[&Category::Sports], 3);

    // The Ferrari has no predicted price and must not poison the metrics.
    assert!(report.summary.model_metrics.mae.is_finite());
    assert!(report.summary.avg_accuracy > 0.0);
}

#[test]
fn report_json_round_trips() {
    let listing = parse_listing_document(LISTING_DOC)
        .unwrap()
        .into_listing(Category::Sports);
    let history = parse_comparables_document(COMPS_DOC).unwrap();

    let report = AnalysisEngine::new().build_report(&listing, &history).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let parsed: auction_valuation::AnalysisReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, report);
}

#[test]
fn summary_cache_is_stable_across_repeated_reports() {
    let history = parse_comparables_document(COMPS_DOC).unwrap();
    let mut cache = SummaryCache::new();

    let first = cache.summarize(&history).clone();
    let second = cache.summarize(&history).clone();
    assert_eq!(first, second);
    assert_eq!(first, auction_valuation::summarize(&history));
}
