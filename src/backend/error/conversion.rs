/**
 * Error Conversion
 *
 * This module provides conversion implementations for backend errors,
 * allowing them to be converted to HTTP responses.
 *
 * # HTTP Response Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers. The error is classified against the
 * taxonomy and converted to an `ErrorEnvelope` JSON body with the mapped
 * status code.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "code": "VALIDATION_ERROR",
 *   "message": "Amount must be greater than zero",
 *   "timestamp": "2026-08-07T12:34:56.789Z",
 *   "details": { "field": "amount" }
 * }
 * ```
 *
 * # Panic Fallback
 *
 * `handle_panic` is the process-wide fallback installed via
 * `CatchPanicLayer`: any panic escaping a handler is converted to the
 * generic envelope so exactly one well-formed response is written per
 * request.
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::backend::error::types::BackendError;
use crate::shared::envelope::ErrorEnvelope;
use crate::shared::taxonomy::ErrorCode;

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// Classifies the error, builds the envelope, and writes it as the
    /// JSON body with the mapped status code.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let envelope = ErrorEnvelope::build(self.classify().0, self.client_message(), self.details());

        envelope_response(status, &envelope)
    }
}

/// Process-wide panic fallback
///
/// Installed through `tower_http::catch_panic::CatchPanicLayer::custom`.
/// The panic payload is logged here (no service layer saw this failure)
/// and never forwarded to the client.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Request handler panicked");

    let envelope = ErrorEnvelope::build(
        ErrorCode::InternalServerError,
        "An unexpected error occurred. Please try again later.",
        None,
    );
    envelope_response(StatusCode::INTERNAL_SERVER_ERROR, &envelope)
}

/// Serialize an envelope into a JSON response
///
/// Falls back to a hand-built body if serialization fails, so this path
/// can never itself produce a malformed response.
fn envelope_response(status: StatusCode, envelope: &ErrorEnvelope) -> Response {
    let body = serde_json::to_string(envelope).unwrap_or_else(|_| {
        format!(
            r#"{{"code":"{}","message":"{}","timestamp":"{}"}}"#,
            envelope.code.as_str(),
            envelope.message,
            envelope.timestamp
        )
    });

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| {
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .body(Body::from("Internal Server Error"))
                .unwrap()
        })
}
