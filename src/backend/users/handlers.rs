/**
 * User Handlers
 *
 * This module implements the HTTP handler for POST /api/users.
 *
 * # Request Flow
 *
 * 1. Extract the application state (pool, operation logger)
 * 2. Invoke the user creation service
 * 3. On failure, propagate the `DomainError` through the request error
 *    boundary, which classifies it and writes the envelope response
 *
 * # Example Request
 *
 * ```http
 * POST /api/users HTTP/1.1
 * Content-Type: application/json
 *
 * {
 *   "username": "alice",
 *   "email": "alice@example.com"
 * }
 * ```
 */

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::users::service;
use crate::backend::users::types::{CreateUserRequest, UserResponse};

/// Create user handler
///
/// # Arguments
///
/// * `State(state)` - Application state (database pool, operation logger)
/// * `Json(request)` - Create user request containing username and email
///
/// # Returns
///
/// JSON response with the created user, or an `ErrorEnvelope` via the
/// error boundary
///
/// # Errors
///
/// * `400 VALIDATION_ERROR` - Invalid or duplicate username/email
/// * `500 USER_CREATION_FAILED` - Store unavailable or insert failed
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, BackendError> {
    tracing::info!("Create user request for username: {}", request.username);

    let user = service::create_user(state.db_pool.as_ref(), state.logger.as_ref(), request).await?;

    Ok(Json(UserResponse {
        id: user.id.to_string(),
        username: user.username,
        email: user.email,
        created_at: user.created_at.to_rfc3339(),
    }))
}
