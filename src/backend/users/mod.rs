//! User Module
//!
//! This module implements the user creation operation: request validation,
//! the optional Postgres-backed store, and the HTTP handler.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── store.rs    - Database operations
//! ├── service.rs  - Business operation (validation, failure logging)
//! └── handlers.rs - HTTP handlers
//! ```
//!
//! # Failure Path
//!
//! The service logs failure context through the operation logger at the
//! point of occurrence, then returns a `DomainError` for the request error
//! boundary to classify and shape.

/// Request and response types
pub mod types;

/// Database operations
pub mod store;

/// User creation business operation
pub mod service;

/// HTTP handlers
pub mod handlers;

// Re-export commonly used items
pub use handlers::create_user;
pub use types::{CreateUserRequest, UserResponse};
