//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the frontend and backend. These types are used for serialization and
//! communication over the HTTP API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. The error envelope and the error code
//! taxonomy live here so both tiers agree on the wire shape of failures.

/// Error code taxonomy and severity levels
pub mod taxonomy;

/// Client-facing error envelope
pub mod envelope;

/// Shared domain error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use envelope::ErrorEnvelope;
pub use error::DomainError;
pub use taxonomy::{ErrorCode, Severity};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
