//! egui Native Desktop App Module
//!
//! This module provides a native desktop application using egui/eframe
//! that connects to the Axum backend for payment submission.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (server URL, monitoring)
//! - **`monitoring`** - External crash-reporting client
//! - **`error_boundary`** - Render-tree error boundary with fallback view
//! - **`api`** - Backend HTTP client
//! - **`state`** - Application state
//! - **`views`** - UI views
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs            - Module exports and documentation
//! ├── main.rs           - Main application entry point
//! ├── config.rs         - Configuration management
//! ├── monitoring.rs     - Crash-reporting client
//! ├── error_boundary.rs - Render-tree error boundary
//! ├── api.rs            - Backend HTTP client
//! ├── state.rs          - Application state
//! └── views/            - UI views
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin egui_app
//! ```

pub mod config;
pub mod monitoring;
pub mod error_boundary;
pub mod api;
pub mod state;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use error_boundary::{BoundaryState, ErrorBoundary, FALLBACK_TEXT};
pub use monitoring::{ErrorEvent, ErrorReporter, MonitoringClient, MonitoringConfig};
pub use state::AppState;
