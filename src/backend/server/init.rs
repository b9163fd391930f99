/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load optional services (database)
 * 2. Create application state with default collaborators
 * 3. Create and configure the router
 *
 * # Error Handling
 *
 * Initialization is resilient: a missing database does not prevent
 * startup, the server continues without it.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// This function sets up the Axum HTTP server with:
/// - Database connection pool (if configured)
/// - Default payment gateway and operation logger
/// - Route configuration and middleware layers
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing XFPay backend server");

    // Load optional services
    let db_pool = load_database().await;

    // Create app state with default collaborators
    let app_state = AppState::with_defaults(db_pool);

    tracing::info!("Application state initialized");

    // Create router with all routes and layers
    create_router(app_state)
}
