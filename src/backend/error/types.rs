/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Types
 *
 * - `Domain` - Classified business operation failures
 * - `Database` - Errors from the Postgres pool
 * - `Serialization` - JSON serialization errors
 *
 * # Classification
 *
 * Every backend error maps to exactly one entry of the error code taxonomy.
 * Recognized domain kinds keep their dedicated code and status; everything
 * else collapses into `INTERNAL_SERVER_ERROR` with status 500, and its raw
 * message is logged rather than returned.
 */

use axum::http::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::shared::error::DomainError;
use crate::shared::taxonomy::ErrorCode;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant can be converted to an HTTP response carrying an
/// `ErrorEnvelope` body.
///
/// # Usage
///
/// ```rust
/// # #[cfg(feature = "ssr")] {
/// use xfpay::backend::error::BackendError;
/// use xfpay::shared::error::DomainError;
///
/// // Domain failures convert directly
/// let err: BackendError = DomainError::validation("amount", "Amount must be greater than zero").into();
/// assert_eq!(err.classify().1, 400);
/// # }
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Classified domain failure (from the shared module)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Database error
    ///
    /// Raw sqlx error text never crosses the HTTP boundary; it is logged
    /// at the point of occurrence and classified as internal here.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BackendError {
    /// Classify this error against the taxonomy
    ///
    /// # Returns
    ///
    /// The taxonomy code and the HTTP status code to respond with.
    ///
    /// # Classification Rules
    ///
    /// 1. A recognized domain kind maps to its dedicated code and status
    ///    (validation failures map to `VALIDATION_ERROR` / 400).
    /// 2. Everything else maps to `INTERNAL_SERVER_ERROR` / 500.
    pub fn classify(&self) -> (ErrorCode, u16) {
        let code = match self {
            Self::Domain(err) => err.code(),
            Self::Database(_) => ErrorCode::InternalServerError,
            Self::Serialization(_) => ErrorCode::InternalServerError,
        };
        (code, code.default_status())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        let (_, status) = self.classify();
        StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Client-safe message for this error
    ///
    /// Known domain kinds surface their own message; database and
    /// serialization errors surface the fixed generic message instead of
    /// their internal text.
    pub fn client_message(&self) -> String {
        match self {
            Self::Domain(err) => err.client_message(),
            Self::Database(_) | Self::Serialization(_) => {
                DomainError::internal("").client_message()
            }
        }
    }

    /// Structured details for the envelope, if any
    ///
    /// Only known-safe identifier keys are ever populated. Currently a
    /// validation failure carries the offending field name.
    pub fn details(&self) -> Option<Map<String, Value>> {
        match self {
            Self::Domain(DomainError::Validation { field, .. }) => {
                let mut details = Map::new();
                details.insert("field".to_string(), Value::String(field.clone()));
                Some(details)
            }
            _ => None,
        }
    }
}
