/**
 * Payment Gateway
 *
 * This module defines the downstream payment gateway seam. The real
 * processor lives behind the `PaymentGateway` trait; the default
 * implementation simulates approval so the application runs without
 * external credentials.
 */

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by the downstream gateway
///
/// Gateway error text is internal: it is logged with the payment context
/// and never forwarded to clients.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The processor declined the charge
    #[error("charge declined: {reason}")]
    Declined {
        /// Processor-supplied decline reason
        reason: String,
    },

    /// The processor could not be reached or errored
    #[error("gateway unavailable: {message}")]
    Unavailable {
        /// Transport or processor error text
        message: String,
    },
}

/// Downstream payment processor seam
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge the given amount
    ///
    /// # Arguments
    ///
    /// * `payment_id` - Server-assigned payment ID
    /// * `amount` - Amount in minor units
    /// * `currency` - ISO 4217 currency code
    ///
    /// # Returns
    ///
    /// The gateway's charge reference on success
    async fn charge(
        &self,
        payment_id: Uuid,
        amount: i64,
        currency: &str,
    ) -> Result<String, GatewayError>;
}

/// Simulated gateway that approves every charge
///
/// Used as the default when no processor is configured.
#[derive(Debug, Default, Clone)]
pub struct SimulatedGateway;

impl SimulatedGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(
        &self,
        payment_id: Uuid,
        _amount: i64,
        _currency: &str,
    ) -> Result<String, GatewayError> {
        Ok(format!("sim_{}", payment_id.simple()))
    }
}
