// Rust guideline compliant 2026-10-14

//! Error handling for Folio application services.

use folio_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and envelope responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested record or blob was not found.
    NotFound,
    /// The provided identifier matched multiple records.
    AmbiguousId,
    /// A record with the same identifier already exists.
    Duplicate,
    /// Record or upload validation failed.
    ValidationError,
    /// Configuration is invalid.
    ConfigError,
    /// IO failure while reading or writing site data.
    IoError,
    /// The site has not been initialized.
    SiteNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// No admin session, or the credentials were rejected.
    Unauthorized,
    /// The admin session has expired.
    SessionExpired,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Site directory is missing.
    #[error("Folio site not initialized at {path}. Run 'folio init' first.")]
    SiteNotInitialized {
        /// Path where `.folio` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Sign-in failed or no session is present.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The stored session is past its expiry.
    #[error("Session expired. Run 'folio login' again.")]
    SessionExpired,

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON error outside the document store.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::SiteNotInitialized { .. } => ErrorCode::SiteNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::SessionExpired => ErrorCode::SessionExpired,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Json(_) => ErrorCode::JsonError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::Duplicate(_) => ErrorCode::Duplicate,
                CoreError::InvalidRecord(_) => ErrorCode::ValidationError,
                CoreError::InvalidDate(_) => ErrorCode::ValidationError,
                CoreError::InvalidBlob(_) => ErrorCode::ValidationError,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::SiteNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::AmbiguousId(partial, matches)) => Some(serde_json::json!({
                "partial": partial,
                "matches": matches,
            })),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err = AppError::from(CoreError::NotFound("exp-abcdef".to_string()));
        assert_eq!(err.code(), ErrorCode::NotFound);

        let err = AppError::from(CoreError::InvalidDate("someday".to_string()));
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[test]
    fn test_ambiguous_id_details() {
        let err = AppError::from(CoreError::AmbiguousId(
            "a1".to_string(),
            vec!["exp-a1b2c3".to_string(), "exp-a1ffff".to_string()],
        ));
        let details = err.details().unwrap();
        assert_eq!(details["partial"], "a1");
        assert_eq!(details["matches"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_site_not_initialized_message() {
        let err = AppError::SiteNotInitialized {
            path: PathBuf::from("/tmp/site/.folio"),
        };
        assert!(err.to_string().contains("folio init"));
        assert_eq!(err.code(), ErrorCode::SiteNotInitialized);
        assert!(err.details().is_some());
    }
}
