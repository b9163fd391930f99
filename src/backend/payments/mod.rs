//! Payments Module
//!
//! This module implements the payment processing operation: request
//! validation, the downstream gateway seam, and the HTTP handler.
//!
//! # Module Structure
//!
//! ```text
//! payments/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── gateway.rs  - Downstream payment gateway trait + simulated impl
//! ├── service.rs  - Business operation (validation, failure logging)
//! └── handlers.rs - HTTP handlers
//! ```
//!
//! # Failure Path
//!
//! Gateway failures are logged with `payment_id` and `amount` context at
//! the point of occurrence, then surfaced as a `PAYMENT_PROCESSING_FAILED`
//! envelope carrying a fixed client-safe message. The gateway's own error
//! text never reaches the client.

/// Request and response types
pub mod types;

/// Downstream payment gateway
pub mod gateway;

/// Payment processing business operation
pub mod service;

/// HTTP handlers
pub mod handlers;

// Re-export commonly used items
pub use gateway::{GatewayError, PaymentGateway, SimulatedGateway};
pub use handlers::process_payment;
pub use types::{PaymentRequest, PaymentResponse};
