//! # Parser Error Types Module
//!
//! This module defines the error types used by the food parser.
//! Only initialization can fail: parsing never raises for unrecognized text,
//! it degrades to "unknown" tokens instead.

/// Custom error types for food parser operations
#[derive(Debug, Clone, PartialEq)]
pub enum ParserError {
    /// Malformed or missing dictionary/correction input, raised at initialization
    Configuration(String),
    /// A token that could not be matched or corrected.
    ///
    /// Never returned from parsing; unresolved text is reported as data in
    /// `ParseResult::unknown_spans`. Kept so callers doing strict validation
    /// can raise it themselves.
    UnresolvedToken(String),
}

impl std::fmt::Display for ParserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParserError::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            ParserError::UnresolvedToken(token) => write!(f, "Unresolved token: {token}"),
        }
    }
}

impl std::error::Error for ParserError {}

impl From<csv::Error> for ParserError {
    fn from(err: csv::Error) -> Self {
        ParserError::Configuration(format!("dictionary table: {err}"))
    }
}

impl From<serde_json::Error> for ParserError {
    fn from(err: serde_json::Error) -> Self {
        ParserError::Configuration(format!("correction table: {err}"))
    }
}

impl From<std::io::Error> for ParserError {
    fn from(err: std::io::Error) -> Self {
        ParserError::Configuration(err.to_string())
    }
}
