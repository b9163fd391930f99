/**
 * Payment Processing Service
 *
 * This module implements the payment processing business operation.
 *
 * # Validation
 *
 * - Amount must be greater than zero
 * - Currency must be a 3-letter ASCII code
 *
 * # Failure Path
 *
 * Gateway failures are logged at error severity with `payment_id` and
 * `amount` context, then returned as a `DomainError` carrying only the
 * fixed client-safe message. The boundary does not log again.
 */

use serde_json::Value;
use uuid::Uuid;

use crate::backend::logging::{context, OperationLogger};
use crate::backend::payments::gateway::PaymentGateway;
use crate::backend::payments::types::{PaymentRequest, PaymentResponse};
use crate::shared::error::DomainError;

/// Client-safe message for a failed payment
const PROCESSING_FAILED_MESSAGE: &str = "Failed to process payment. Please try again later.";

/// Process a payment
///
/// Validates the request, assigns a payment ID, and charges through the
/// gateway. On gateway failure the payment context is logged and a
/// classified `DomainError` is returned.
///
/// # Arguments
///
/// * `gateway` - Downstream payment processor
/// * `logger` - Operation failure logger
/// * `request` - Payment request input
///
/// # Errors
///
/// * `DomainError::Validation` - Non-positive amount or malformed currency
/// * `DomainError::PaymentProcessing` - Gateway declined or unavailable
pub async fn process_payment(
    gateway: &dyn PaymentGateway,
    logger: &dyn OperationLogger,
    request: PaymentRequest,
) -> Result<PaymentResponse, DomainError> {
    if request.amount <= 0 {
        tracing::warn!("Rejected payment with non-positive amount: {}", request.amount);
        return Err(DomainError::validation(
            "amount",
            "Amount must be greater than zero",
        ));
    }

    if request.currency.len() != 3 || !request.currency.chars().all(|c| c.is_ascii_alphabetic()) {
        tracing::warn!("Rejected payment with malformed currency: {}", request.currency);
        return Err(DomainError::validation(
            "currency",
            "Currency must be a 3-letter code",
        ));
    }

    let payment_id = Uuid::new_v4();

    match gateway
        .charge(payment_id, request.amount, &request.currency)
        .await
    {
        Ok(reference) => {
            tracing::info!("Payment processed: {} ({})", payment_id, reference);
            Ok(PaymentResponse {
                payment_id: payment_id.to_string(),
                amount: request.amount,
                currency: request.currency,
                reference,
                status: "processed".to_string(),
            })
        }
        Err(e) => {
            logger.log_failure(
                "Payment processing failed",
                context(&[
                    ("payment_id", Value::String(payment_id.to_string())),
                    ("amount", Value::from(request.amount)),
                    ("error", Value::String(format!("{}", e))),
                ]),
            );
            Err(DomainError::payment_processing(PROCESSING_FAILED_MESSAGE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::payments::gateway::{GatewayError, SimulatedGateway};
    use async_trait::async_trait;
    use serde_json::Map;
    use std::sync::Mutex;

    /// Gateway that fails every charge with internal error text
    struct FailingGateway;

    #[async_trait]
    impl PaymentGateway for FailingGateway {
        async fn charge(
            &self,
            _payment_id: Uuid,
            _amount: i64,
            _currency: &str,
        ) -> Result<String, GatewayError> {
            Err(GatewayError::Unavailable {
                message: "connection reset by processor".to_string(),
            })
        }
    }

    /// Logger that records every failure entry for assertions
    #[derive(Default)]
    struct RecordingLogger {
        entries: Mutex<Vec<(String, Map<String, Value>)>>,
    }

    impl OperationLogger for RecordingLogger {
        fn log_failure(&self, message: &str, context: Map<String, Value>) {
            self.entries
                .lock()
                .unwrap()
                .push((message.to_string(), context));
        }
    }

    fn request(amount: i64, currency: &str) -> PaymentRequest {
        PaymentRequest {
            amount,
            currency: currency.to_string(),
        }
    }

    #[tokio::test]
    async fn test_successful_payment() {
        let gateway = SimulatedGateway::new();
        let logger = RecordingLogger::default();

        let response = process_payment(&gateway, &logger, request(2500, "USD"))
            .await
            .unwrap();

        assert_eq!(response.amount, 2500);
        assert_eq!(response.status, "processed");
        assert!(logger.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_positive_amount_is_validation_error() {
        let gateway = SimulatedGateway::new();
        let logger = RecordingLogger::default();

        let result = process_payment(&gateway, &logger, request(0, "USD")).await;
        match result.unwrap_err() {
            DomainError::Validation { field, .. } => assert_eq!(field, "amount"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_currency_is_validation_error() {
        let gateway = SimulatedGateway::new();
        let logger = RecordingLogger::default();

        let result = process_payment(&gateway, &logger, request(100, "US")).await;
        match result.unwrap_err() {
            DomainError::Validation { field, .. } => assert_eq!(field, "currency"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_gateway_failure_logged_with_context() {
        let gateway = FailingGateway;
        let logger = RecordingLogger::default();

        let result = process_payment(&gateway, &logger, request(2500, "USD")).await;
        let error = result.unwrap_err();

        // Client sees only the generic message
        assert_eq!(error.client_message(), PROCESSING_FAILED_MESSAGE);

        // The failure was logged once, with payment_id and amount context
        let entries = logger.entries.lock().unwrap();
        assert_eq!(entries.len(), 1);
        let (message, ctx) = &entries[0];
        assert_eq!(message, "Payment processing failed");
        assert!(ctx.contains_key("payment_id"));
        assert_eq!(ctx.get("amount").unwrap(), 2500);
    }

    #[tokio::test]
    async fn test_gateway_error_text_never_surfaced() {
        let gateway = FailingGateway;
        let logger = RecordingLogger::default();

        let error = process_payment(&gateway, &logger, request(2500, "USD"))
            .await
            .unwrap_err();
        assert!(!error.client_message().contains("connection reset"));
    }
}
