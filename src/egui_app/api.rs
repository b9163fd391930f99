/**
 * Backend API Client
 *
 * HTTP client functions for the XFPay backend. Failure responses are
 * parsed back into the shared `ErrorEnvelope` so the UI can show the
 * classified code and client-safe message.
 */

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::envelope::ErrorEnvelope;

/// Payment submission payload
#[derive(Serialize, Debug)]
pub struct PaymentRequest {
    /// Amount in minor units
    pub amount: i64,
    /// ISO 4217 currency code
    pub currency: String,
}

/// Processed payment returned by the backend
#[derive(Deserialize, Debug, Clone)]
pub struct PaymentReceipt {
    pub payment_id: String,
    pub amount: i64,
    pub currency: String,
    pub reference: String,
    pub status: String,
}

/// API call failure
///
/// Either a classified envelope from the backend or a transport-level
/// failure before any envelope was received.
#[derive(Debug, Clone)]
pub enum ApiFailure {
    /// Backend responded with an error envelope
    Envelope(ErrorEnvelope),
    /// Network or decoding failure
    Transport(String),
}

impl ApiFailure {
    /// Message suitable for display in the UI
    pub fn message(&self) -> String {
        match self {
            Self::Envelope(envelope) => envelope.message.clone(),
            Self::Transport(message) => message.clone(),
        }
    }
}

/// Submit a payment to the backend
///
/// # Arguments
///
/// * `config` - Client configuration (server URL)
/// * `amount` - Amount in minor units
/// * `currency` - ISO 4217 currency code
///
/// # Returns
///
/// The processed payment, or the classified failure
pub fn submit_payment(
    config: &Config,
    amount: i64,
    currency: String,
) -> Result<PaymentReceipt, ApiFailure> {
    let client = Client::new();
    let url = config.api_url("/api/payments");

    let request = PaymentRequest { amount, currency };

    // Create a runtime for async execution
    let rt = Runtime::new()
        .map_err(|e| ApiFailure::Transport(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiFailure::Transport(format!("Network error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiFailure::Transport(format!("Failed to read response: {}", e)))?;

            // Failure bodies are error envelopes; anything else is a
            // transport-level failure
            return match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => Err(ApiFailure::Envelope(envelope)),
                Err(_) => Err(ApiFailure::Transport(format!("Request failed: {}", status))),
            };
        }

        let receipt: PaymentReceipt = response
            .json()
            .await
            .map_err(|e| ApiFailure::Transport(format!("Failed to parse response: {}", e)))?;

        Ok(receipt)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::taxonomy::ErrorCode;

    #[test]
    fn test_envelope_failure_message() {
        let envelope = ErrorEnvelope::build(
            ErrorCode::PaymentProcessingFailed,
            "Failed to process payment. Please try again later.",
            None,
        );
        let failure = ApiFailure::Envelope(envelope);
        assert_eq!(
            failure.message(),
            "Failed to process payment. Please try again later."
        );
    }

    #[test]
    fn test_transport_failure_message() {
        let failure = ApiFailure::Transport("Network error: connection refused".to_string());
        assert!(failure.message().contains("connection refused"));
    }
}
