/**
 * Payment Handlers
 *
 * This module implements the HTTP handler for POST /api/payments.
 *
 * # Example Request
 *
 * ```http
 * POST /api/payments HTTP/1.1
 * Content-Type: application/json
 *
 * {
 *   "amount": 2500,
 *   "currency": "USD"
 * }
 * ```
 */

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::payments::service;
use crate::backend::payments::types::{PaymentRequest, PaymentResponse};
use crate::backend::server::state::AppState;

/// Process payment handler
///
/// # Arguments
///
/// * `State(state)` - Application state (payment gateway, operation logger)
/// * `Json(request)` - Payment request containing amount and currency
///
/// # Returns
///
/// JSON response with the processed payment, or an `ErrorEnvelope` via the
/// error boundary
///
/// # Errors
///
/// * `400 VALIDATION_ERROR` - Non-positive amount or malformed currency
/// * `500 PAYMENT_PROCESSING_FAILED` - Gateway declined or unavailable
pub async fn process_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentResponse>, BackendError> {
    tracing::info!(
        "Payment request: {} {}",
        request.amount,
        request.currency
    );

    let response =
        service::process_payment(state.gateway.as_ref(), state.logger.as_ref(), request).await?;

    Ok(Json(response))
}
