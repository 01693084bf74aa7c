//! Error types for the valuation engine.

use thiserror::Error;

/// Result type alias using the engine error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the valuation engine.
///
/// `InvalidInput` is the only kind the core engines raise, and it is always
/// raised before any computation starts. Degenerate conditions (empty
/// history, missing predicted prices, zero variance) are valid results, not
/// errors. `Json` exists solely for the document parsers at the record-store
/// boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or out-of-range listing field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON deserialization error from a boundary document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is an input validation error.
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = Error::InvalidInput("year -5 out of range".into());
        assert_eq!(err.to_string(), "Invalid input: year -5 out of range");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = parse_err.into();
        assert!(!err.is_invalid_input());
    }
}
