// Rust guideline compliant 2026-10-19

//! JSON envelopes printed by `--json` commands.
//!
//! Record commands tag their payload with the section they touched so a
//! caller can route the result without inspecting the record ID prefix.

use crate::error::{AppError, ErrorCode};
use folio_core::Section;
use serde::Serialize;

/// Envelope around the result of a command that succeeded.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Always `"ok"`.
    pub status: &'static str,
    /// Section the command acted on, for record commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    /// Command payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Wraps a payload that belongs to no particular section.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self {
            status: "ok",
            section: None,
            result,
        }
    }

    /// Wraps a record payload from `section`.
    #[must_use]
    pub fn for_section(section: Section, result: T) -> Self {
        Self {
            section: Some(section),
            ..Self::new(result)
        }
    }
}

/// Envelope printed to stderr when a command fails with an [`AppError`].
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Always `"error"`.
    pub status: &'static str,
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            status: "error",
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_without_section_omits_field() {
        let envelope = SuccessEnvelope::new(json!({ "signed_out": true }));
        let value = serde_json::to_value(envelope).unwrap();
        assert_eq!(value, json!({ "status": "ok", "result": { "signed_out": true } }));
    }

    #[test]
    fn test_success_for_section_tags_payload() {
        let envelope =
            SuccessEnvelope::for_section(Section::Projects, json!({ "id": "prj-a1b2c3" }));
        let value = serde_json::to_value(envelope).unwrap();
        assert_eq!(value["section"], "projects");
        assert_eq!(value["result"]["id"], "prj-a1b2c3");
    }

    #[test]
    fn test_error_envelope_carries_code_and_message() {
        let error = AppError::InvalidInput("Expected key=value".to_string());
        let value = serde_json::to_value(ErrorEnvelope::from_error(&error)).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], serde_json::to_value(ErrorCode::InvalidInput).unwrap());
        assert_eq!(value["message"], "Invalid input: Expected key=value");
        assert!(value.get("details").is_none());
    }
}
