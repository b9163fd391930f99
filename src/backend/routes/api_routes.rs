/**
 * API Route Handlers
 *
 * This module defines route handlers for API endpoints, including:
 * - User endpoints (create)
 * - Payment endpoints (process)
 * - Health check
 *
 * # Routes
 *
 * - `POST /api/users` - Create a user
 * - `POST /api/payments` - Process a payment
 * - `GET /health` - Liveness check
 */

use axum::{response::Json, Router};

use crate::backend::payments::handlers::process_payment;
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::create_user;

/// Configure API routes
///
/// This function adds the following routes to the router:
///
/// - `POST /api/users` - Create a user
/// - `POST /api/payments` - Process a payment
/// - `GET /health` - Liveness check
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // User endpoints
        .route("/api/users", axum::routing::post(create_user))
        // Payment endpoints
        .route("/api/payments", axum::routing::post(process_payment))
        // Health check
        .route("/health", axum::routing::get(health))
}

/// Liveness check handler
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
