//! Backend Module
//!
//! This module contains all server-side code for the XFPay application.
//! It provides an Axum HTTP server exposing user and payment endpoints,
//! with a request error boundary that converts every failure into a
//! uniform client-facing envelope.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, state, and configuration
//! - **`routes`** - HTTP route configuration
//! - **`users`** - User creation operation (handlers, service, store)
//! - **`payments`** - Payment processing operation (handlers, service, gateway)
//! - **`error`** - Backend error types and HTTP response conversion
//! - **`logging`** - Operation failure logging capability
//!
//! # Error Flow
//!
//! A business operation is invoked from a handler. On failure the service
//! records structured context through the operation logger, then returns a
//! `DomainError`. The handler propagates it as a `BackendError`, whose
//! `IntoResponse` implementation classifies the failure against the error
//! code taxonomy and writes the envelope with the mapped status. Panics
//! anywhere inside a request are caught by the router's catch-panic layer
//! and converted to the generic envelope.
//!
//! # Compilation
//!
//! This module is only compiled with the `ssr` feature enabled.

/// Server initialization and state management
pub mod server;

/// HTTP route configuration
pub mod routes;

/// User creation operation
pub mod users;

/// Payment processing operation
pub mod payments;

/// Backend error types and response conversion
pub mod error;

/// Operation failure logging
pub mod logging;
