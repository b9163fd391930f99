//! Error Code Taxonomy
//!
//! This module defines the closed set of error codes that can appear in a
//! client-facing error envelope, together with the default HTTP status and
//! severity associated with each code.
//!
//! # Design
//!
//! The taxonomy is a single authoritative enumeration. Every failure that
//! crosses the HTTP boundary maps to exactly one `ErrorCode`; anything that
//! is not a recognized domain failure falls back to
//! [`ErrorCode::InternalServerError`].
//!
//! # Wire Format
//!
//! Codes serialize as SCREAMING_SNAKE_CASE strings, e.g. `VALIDATION_ERROR`.

use serde::{Deserialize, Serialize};

/// Closed registry of client-facing error codes
///
/// Each entry carries a default HTTP status and a severity level.
/// New failure kinds must be added here rather than invented at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Client input failed validation
    ValidationError,
    /// User creation operation failed
    UserCreationFailed,
    /// Payment processing operation failed
    PaymentProcessingFailed,
    /// Catch-all for unclassified failures
    InternalServerError,
}

/// Severity level attached to a taxonomy entry
///
/// Used by logging and by the monitoring client; `Fatal` events trigger
/// an out-of-band alert in addition to normal reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
    Fatal,
}

impl ErrorCode {
    /// Default HTTP status code for this error code
    ///
    /// # Status Code Mapping
    ///
    /// - `ValidationError` - 400 Bad Request
    /// - `UserCreationFailed` - 500 Internal Server Error
    /// - `PaymentProcessingFailed` - 500 Internal Server Error
    /// - `InternalServerError` - 500 Internal Server Error
    pub fn default_status(&self) -> u16 {
        match self {
            Self::ValidationError => 400,
            Self::UserCreationFailed => 500,
            Self::PaymentProcessingFailed => 500,
            Self::InternalServerError => 500,
        }
    }

    /// Severity associated with this error code
    pub fn severity(&self) -> Severity {
        match self {
            Self::ValidationError => Severity::Warning,
            Self::UserCreationFailed => Severity::Error,
            Self::PaymentProcessingFailed => Severity::Error,
            Self::InternalServerError => Severity::Fatal,
        }
    }

    /// Wire representation of the code, e.g. `VALIDATION_ERROR`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::UserCreationFailed => "USER_CREATION_FAILED",
            Self::PaymentProcessingFailed => "PAYMENT_PROCESSING_FAILED",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::ValidationError.default_status(), 400);
        assert_eq!(ErrorCode::UserCreationFailed.default_status(), 500);
        assert_eq!(ErrorCode::PaymentProcessingFailed.default_status(), 500);
        assert_eq!(ErrorCode::InternalServerError.default_status(), 500);
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(ErrorCode::ValidationError.severity(), Severity::Warning);
        assert_eq!(ErrorCode::UserCreationFailed.severity(), Severity::Error);
        assert_eq!(ErrorCode::InternalServerError.severity(), Severity::Fatal);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&ErrorCode::ValidationError).unwrap();
        assert_eq!(json, "\"VALIDATION_ERROR\"");

        let code: ErrorCode = serde_json::from_str("\"INTERNAL_SERVER_ERROR\"").unwrap();
        assert_eq!(code, ErrorCode::InternalServerError);
    }

    #[test]
    fn test_as_str_matches_serde() {
        for code in [
            ErrorCode::ValidationError,
            ErrorCode::UserCreationFailed,
            ErrorCode::PaymentProcessingFailed,
            ErrorCode::InternalServerError,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }
}
