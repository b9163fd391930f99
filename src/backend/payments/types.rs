/**
 * Payment Handler Types
 *
 * This module defines the request and response types used by the payment
 * handlers.
 */

use serde::{Deserialize, Serialize};

/// Process payment request
///
/// Amounts are in minor currency units (cents).
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PaymentRequest {
    /// Amount in minor units, must be greater than zero
    pub amount: i64,
    /// ISO 4217 currency code, e.g. "USD"
    pub currency: String,
}

/// Process payment response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaymentResponse {
    /// Server-assigned payment ID (UUID)
    pub payment_id: String,
    /// Amount in minor units
    pub amount: i64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Gateway charge reference
    pub reference: String,
    /// Processing status
    pub status: String,
}
