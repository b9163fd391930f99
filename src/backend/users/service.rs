/**
 * User Creation Service
 *
 * This module implements the user creation business operation.
 *
 * # Validation
 *
 * - Username must be 3-30 characters, start with a letter, and contain
 *   only letters, numbers, and underscores
 * - Email must contain '@' (basic validation)
 * - Username and email must be unique
 *
 * # Failure Path
 *
 * Store failures are logged with structured context (username, email) via
 * the operation logger, then returned as a `DomainError` for the boundary
 * to classify. The raw database error text stays in the logs.
 */

use serde_json::Value;
use sqlx::PgPool;

use crate::backend::logging::{context, OperationLogger};
use crate::backend::users::store::{self, User};
use crate::backend::users::types::CreateUserRequest;
use crate::shared::error::DomainError;

/// Client-safe message for a failed user creation
const CREATION_FAILED_MESSAGE: &str = "Failed to create user. Please try again later.";

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    // First character must be a letter
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    // Rest can be alphanumeric or underscore
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Create a user
///
/// Validates the request, then creates the user in the store. On store
/// failure the context is logged at error severity and a classified
/// `DomainError` is returned; the boundary does not log again.
///
/// # Arguments
///
/// * `pool` - Database connection pool, if configured
/// * `logger` - Operation failure logger
/// * `request` - Validated request input
///
/// # Errors
///
/// * `DomainError::Validation` - Invalid username/email, or duplicate
/// * `DomainError::UserCreation` - Store unavailable or insert failed
pub async fn create_user(
    pool: Option<&PgPool>,
    logger: &dyn OperationLogger,
    request: CreateUserRequest,
) -> Result<User, DomainError> {
    if !is_valid_username(&request.username) {
        tracing::warn!("Invalid username format: {}", request.username);
        return Err(DomainError::validation(
            "username",
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(DomainError::validation("email", "Invalid email format"));
    }

    let pool = match pool {
        Some(pool) => pool,
        None => {
            logger.log_failure(
                "Failed to create user",
                context(&[
                    ("username", Value::String(request.username.clone())),
                    ("reason", Value::String("database not configured".to_string())),
                ]),
            );
            return Err(DomainError::user_creation(CREATION_FAILED_MESSAGE));
        }
    };

    // Uniqueness checks
    if let Ok(Some(_)) = store::get_user_by_username(pool, &request.username).await {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(DomainError::validation("username", "Username already taken"));
    }

    if let Ok(Some(_)) = store::get_user_by_email(pool, &request.email).await {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(DomainError::validation("email", "Email already registered"));
    }

    match store::create_user(pool, request.username.clone(), request.email.clone()).await {
        Ok(user) => {
            tracing::info!("User created successfully: {} ({})", user.username, user.email);
            Ok(user)
        }
        Err(e) => {
            logger.log_failure(
                "Failed to create user",
                context(&[
                    ("username", Value::String(request.username)),
                    ("email", Value::String(request.email)),
                    ("error", Value::String(format!("{:?}", e))),
                ]),
            );
            Err(DomainError::user_creation(CREATION_FAILED_MESSAGE))
        }
    }
}
