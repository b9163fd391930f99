/**
 * Operation Failure Logging
 *
 * This module defines the logging capability invoked on the failure path
 * of each business operation. The logger is an explicitly passed trait
 * object carried in `AppState` rather than a process-wide singleton, so
 * handlers and tests can substitute their own sink.
 *
 * # Contract
 *
 * `log_failure` is side-effecting and never panics: a logging failure
 * must not mask or replace the original failure. Context carries
 * identifiers (user id, payment id, amount), not full sensitive payloads.
 */

use std::sync::Arc;

use serde_json::{Map, Value};

/// Logging capability for business operation failures
///
/// Implementations must never panic.
pub trait OperationLogger: Send + Sync {
    /// Record a failure with structured context
    ///
    /// # Arguments
    ///
    /// * `message` - Human-readable failure description
    /// * `context` - Structured context fields (identifiers, not payloads)
    fn log_failure(&self, message: &str, context: Map<String, Value>);
}

/// Shared handle to an operation logger
pub type LoggerHandle = Arc<dyn OperationLogger>;

/// `tracing`-backed operation logger
///
/// Emits one error-severity event per failure with the context serialized
/// as a single structured field.
#[derive(Debug, Default, Clone)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl OperationLogger for TracingLogger {
    fn log_failure(&self, message: &str, context: Map<String, Value>) {
        // Map<String, Value> serialization is infallible, but guard anyway:
        // the logger must never take down the failure path it observes.
        let context = serde_json::to_string(&Value::Object(context))
            .unwrap_or_else(|_| "{}".to_string());
        tracing::error!(target: "xfpay::ops", context = %context, "{}", message);
    }
}

/// Convenience for building context maps at call sites
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "ssr")] {
/// use xfpay::backend::logging::context;
///
/// let ctx = context(&[("payment_id", "p-123".into()), ("amount", 2500.into())]);
/// assert_eq!(ctx.len(), 2);
/// # }
/// ```
pub fn context(fields: &[(&str, Value)]) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = context(&[
            ("payment_id", Value::String("p-1".to_string())),
            ("amount", Value::from(2500)),
        ]);
        assert_eq!(ctx.get("payment_id").unwrap(), "p-1");
        assert_eq!(ctx.get("amount").unwrap(), 2500);
    }

    #[test]
    fn test_tracing_logger_does_not_panic() {
        let logger = TracingLogger::new();
        logger.log_failure("Payment processing failed", Map::new());
        logger.log_failure(
            "Failed to create user",
            context(&[("username", Value::String("alice".to_string()))]),
        );
    }
}
