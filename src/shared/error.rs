//! Shared Domain Error Types
//!
//! This module defines the closed set of domain failure kinds returned by
//! business operations. These errors are shared between the frontend and
//! backend so both tiers classify failures the same way.
//!
//! # Error Categories
//!
//! - `Validation` - Client input failed a validation rule
//! - `UserCreation` - The user creation operation failed
//! - `PaymentProcessing` - The payment processing operation failed
//! - `Internal` - Unexpected failure; message is internal-only
//!
//! # Usage
//!
//! ```rust
//! use xfpay::shared::error::DomainError;
//!
//! // Create a validation error
//! let error = DomainError::validation("amount", "Amount must be greater than zero");
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

use crate::shared::taxonomy::ErrorCode;

/// Fixed client-facing message for unclassified failures
const GENERIC_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Domain error kinds returned by business operations
///
/// Classification is a pure function over this enumeration: each variant
/// maps to exactly one taxonomy entry via [`DomainError::code`].
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    /// Client input validation failure
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable, client-safe error message
        message: String,
    },

    /// User creation failure
    #[error("User creation failed: {message}")]
    UserCreation {
        /// Client-safe error message
        message: String,
    },

    /// Payment processing failure
    #[error("Payment processing failed: {message}")]
    PaymentProcessing {
        /// Client-safe error message
        message: String,
    },

    /// Unexpected internal failure
    ///
    /// The message here is raw internal text. It is logged but never
    /// surfaced to clients; [`DomainError::client_message`] substitutes
    /// a fixed generic string.
    #[error("Internal error: {message}")]
    Internal {
        /// Internal-only error message
        message: String,
    },
}

impl DomainError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new user creation error
    pub fn user_creation(message: impl Into<String>) -> Self {
        Self::UserCreation {
            message: message.into(),
        }
    }

    /// Create a new payment processing error
    pub fn payment_processing(message: impl Into<String>) -> Self {
        Self::PaymentProcessing {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Taxonomy entry for this failure kind
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::ValidationError,
            Self::UserCreation { .. } => ErrorCode::UserCreationFailed,
            Self::PaymentProcessing { .. } => ErrorCode::PaymentProcessingFailed,
            Self::Internal { .. } => ErrorCode::InternalServerError,
        }
    }

    /// Client-safe message for this failure
    ///
    /// Known domain kinds carry messages written for clients; `Internal`
    /// substitutes a fixed generic string so raw error text never leaks.
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::UserCreation { message } => message.clone(),
            Self::PaymentProcessing { message } => message.clone(),
            Self::Internal { .. } => GENERIC_MESSAGE.to_string(),
        }
    }
}

/// Helper for converting serialization errors
impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("email", "Invalid email format");
        match error {
            DomainError::Validation { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Invalid email format");
            }
            _ => panic!("Expected Validation"),
        }
    }

    #[test]
    fn test_code_mapping() {
        assert_eq!(
            DomainError::validation("f", "m").code(),
            ErrorCode::ValidationError
        );
        assert_eq!(
            DomainError::user_creation("m").code(),
            ErrorCode::UserCreationFailed
        );
        assert_eq!(
            DomainError::payment_processing("m").code(),
            ErrorCode::PaymentProcessingFailed
        );
        assert_eq!(
            DomainError::internal("m").code(),
            ErrorCode::InternalServerError
        );
    }

    #[test]
    fn test_internal_message_never_surfaced() {
        let error = DomainError::internal("connection refused (127.0.0.1:5432)");
        assert!(!error.client_message().contains("127.0.0.1"));
        assert_eq!(error.client_message(), GENERIC_MESSAGE);
    }

    #[test]
    fn test_domain_messages_surfaced_verbatim() {
        let error =
            DomainError::payment_processing("Failed to process payment. Please try again later.");
        assert_eq!(
            error.client_message(),
            "Failed to process payment. Please try again later."
        );
    }

    #[test]
    fn test_error_display() {
        let error = DomainError::validation("amount", "Amount must be greater than zero");
        let display = format!("{}", error);
        assert!(display.contains("Validation error"));
        assert!(display.contains("amount"));
    }

    #[test]
    fn test_from_serde_error() {
        let invalid_json = "{ invalid json }";
        let result: Result<serde_json::Value, _> = serde_json::from_str(invalid_json);
        let serde_error = result.unwrap_err();
        let domain_error: DomainError = serde_error.into();

        match domain_error {
            DomainError::Internal { .. } => {}
            _ => panic!("Expected Internal from serde error"),
        }
    }
}
