//! XFPay - Main Library
//!
//! XFPay is a small full-stack payments and account application built with
//! Rust: an Axum HTTP backend exposing user and payment endpoints, and a
//! native egui desktop client with error reporting wired to an external
//! monitoring service.
//!
//! # Overview
//!
//! The structurally important piece of the application is the error
//! normalization pipeline: every failure, whatever its cause, is classified
//! against a closed taxonomy and surfaced as one uniform envelope shape on
//! both tiers.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between frontend and backend
//!   - The error envelope and the error code taxonomy
//!   - Domain error types returned by business operations
//!   - Application configuration
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server with user and payment handlers
//!   - Request error boundary converting failures to envelope responses
//!   - Operation logging and optional Postgres persistence
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - UI error boundary with a static fallback view
//!   - Monitoring client for external crash reporting
//!   - HTTP client for the backend API
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (Axum server, database).
//!   Required for server builds.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! # #[cfg(feature = "ssr")]
//! # async fn example() {
//! use xfpay::backend::server::init::create_app;
//!
//! let app = create_app().await;
//! // Use app with Axum server
//! # }
//! ```
//!
//! ## Native Desktop App
//!
//! ```text
//! cargo run --bin egui_app
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - Business operations return `Result<T, DomainError>` over a closed
//!   error-kind enumeration
//! - HTTP failures are shaped by `backend::error` into `ErrorEnvelope`
//!   JSON bodies

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
pub mod egui_app;
