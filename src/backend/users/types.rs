/**
 * User Handler Types
 *
 * This module defines the request and response types used by the user
 * handlers.
 */

use serde::{Deserialize, Serialize};

/// Create user request
///
/// Contains the username and email for user registration.
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateUserRequest {
    /// User's chosen username (3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User's email address
    pub email: String,
}

/// User response (without internal columns)
///
/// Contains user information that is safe to return to clients.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's username
    pub username: String,
    /// User's email address
    pub email: String,
    /// Creation timestamp (ISO-8601)
    pub created_at: String,
}
