// Rust guideline compliant 2026-10-12

//! Error types for the Folio core library.

use thiserror::Error;

/// Result type alias for Folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Folio operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file or environment value is invalid.
    #[error("Invalid config: {0}")]
    Config(String),

    /// Invalid record data.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Record or blob not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record with the same ID already exists.
    #[error("Duplicate ID: {0}")]
    Duplicate(String),

    /// Ambiguous partial ID.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// Date boundary could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Blob upload rejected.
    #[error("Invalid blob: {0}")]
    InvalidBlob(String),
}
