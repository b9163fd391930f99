/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - Optional database connection pool
 * - The payment gateway collaborator
 * - The operation failure logger
 *
 * The logger is an explicitly passed capability rather than a global
 * singleton: handlers and tests substitute their own implementation by
 * constructing state with a different trait object.
 *
 * # Thread Safety
 *
 * All fields are `Arc`-shared or cheaply cloneable; there is no
 * cross-request shared mutable state beyond the logger's sink.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::logging::{LoggerHandle, OperationLogger, TracingLogger};
use crate::backend::payments::gateway::{PaymentGateway, SimulatedGateway};

/// Application state for the Axum server
///
/// This struct serves as the central state container. It implements
/// `FromRef` for its fields so handlers can extract specific parts of
/// the state without needing the entire `AppState`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database is not configured (e.g., if
    /// `DATABASE_URL` environment variable is not set). Handlers should
    /// check for `None` before using the database.
    pub db_pool: Option<PgPool>,

    /// Downstream payment gateway
    pub gateway: Arc<dyn PaymentGateway>,

    /// Operation failure logger
    pub logger: LoggerHandle,
}

impl AppState {
    /// Create state with the given services
    pub fn new(
        db_pool: Option<PgPool>,
        gateway: Arc<dyn PaymentGateway>,
        logger: Arc<dyn OperationLogger>,
    ) -> Self {
        Self {
            db_pool,
            gateway,
            logger,
        }
    }

    /// Create state with default collaborators and no database
    ///
    /// Uses the simulated gateway and the tracing logger.
    pub fn with_defaults(db_pool: Option<PgPool>) -> Self {
        Self::new(
            db_pool,
            Arc::new(SimulatedGateway::new()),
            Arc::new(TracingLogger::new()),
        )
    }
}

/// Implement FromRef for Option<PgPool>
///
/// This allows Axum handlers to extract the optional database pool
/// directly from `AppState`.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for the operation logger
impl FromRef<AppState> for LoggerHandle {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.logger.clone()
    }
}

/// Implement FromRef for the payment gateway
impl FromRef<AppState> for Arc<dyn PaymentGateway> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.gateway.clone()
    }
}
