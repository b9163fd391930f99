//! Error Envelope
//!
//! This module defines the uniform error payload returned to clients and
//! the builder that constructs it.
//!
//! # Invariants
//!
//! Every error surfaced across the HTTP boundary is an `ErrorEnvelope`;
//! no raw panic payload, database error text, or stack trace crosses the
//! boundary. An envelope is constructed once at the moment of failure
//! handling and is immutable thereafter.
//!
//! # Wire Format
//!
//! ```json
//! {
//!   "code": "VALIDATION_ERROR",
//!   "message": "Amount must be greater than zero",
//!   "timestamp": "2026-08-07T12:34:56.789Z",
//!   "details": { "field": "amount" }
//! }
//! ```
//!
//! The `details` field is omitted entirely when absent.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::taxonomy::ErrorCode;

/// Uniform error payload returned to clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    /// One of the closed error code taxonomy
    pub code: ErrorCode,
    /// Human-readable message, safe for client display
    pub message: String,
    /// ISO-8601 timestamp generated at construction time
    pub timestamp: String,
    /// Optional structured diagnostic context (known-safe keys only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

impl ErrorEnvelope {
    /// Build an error envelope with a fresh timestamp
    ///
    /// Total and side-effect free aside from reading the clock: always
    /// returns a well-formed envelope. Takes `details` by value so the
    /// caller's map is moved, never mutated in place.
    ///
    /// # Arguments
    ///
    /// * `code` - Taxonomy entry for this failure
    /// * `message` - Client-safe message
    /// * `details` - Optional structured context
    pub fn build(
        code: ErrorCode,
        message: impl Into<String>,
        details: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            details,
        }
    }
}
