//! Comparables Ranker.
//!
//! Scores every historical record against the query listing with a weighted
//! combination of normalized feature distances and returns the closest
//! matches. A make/model mismatch lowers the score but never excludes a
//! record, so a thin history still yields results.

pub mod ranker;

pub use ranker::{ComparableMatch, Ranker, RankerConfig};
