//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server. It provides the foundation for the application's
//! backend infrastructure.
//!
//! # Module Structure
//!
//! - **`config`** - Configuration loading (optional database)
//! - **`state`** - Application state and `FromRef` implementations
//! - **`init`** - Server initialization (`create_app`)

/// Configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
