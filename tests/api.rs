//! API integration tests
//!
//! Tests for the user and payment endpoints, including the failure paths
//! through the request error boundary.
#![cfg(feature = "ssr")]

mod common;

use std::sync::Arc;

use axum::http::StatusCode;

use common::{create_test_server, create_test_server_with, FailingGateway, RecordingLogger};
use xfpay::backend::logging::TracingLogger;

#[tokio::test]
async fn test_health() {
    let server = create_test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_create_user_invalid_username() {
    let server = create_test_server();

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "username": "1bad",
            "email": "user@example.com"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["field"], "username");
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let server = create_test_server();

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "username": "alice",
            "email": "not-an-email"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["field"], "email");
}

#[tokio::test]
async fn test_create_user_without_database_is_creation_failure() {
    let server = create_test_server();

    let response = server
        .post("/api/users")
        .json(&serde_json::json!({
            "username": "alice",
            "email": "alice@example.com"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "USER_CREATION_FAILED");
    assert_eq!(body["message"], "Failed to create user. Please try again later.");
}

#[tokio::test]
async fn test_process_payment_success() {
    let server = create_test_server();

    let response = server
        .post("/api/payments")
        .json(&serde_json::json!({
            "amount": 2500,
            "currency": "USD"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["amount"], 2500);
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["status"], "processed");
    assert!(body["payment_id"].as_str().is_some());
}

#[tokio::test]
async fn test_process_payment_non_positive_amount() {
    let server = create_test_server();

    let response = server
        .post("/api/payments")
        .json(&serde_json::json!({
            "amount": 0,
            "currency": "USD"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["field"], "amount");
}

#[tokio::test]
async fn test_payment_gateway_failure_surfaces_generic_envelope() {
    let logger = Arc::new(RecordingLogger::default());
    let server = create_test_server_with(Arc::new(FailingGateway), logger.clone());

    let response = server
        .post("/api/payments")
        .json(&serde_json::json!({
            "amount": 2500,
            "currency": "USD"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "PAYMENT_PROCESSING_FAILED");
    assert_eq!(body["message"], "Failed to process payment. Please try again later.");

    // The gateway's internal error text never crosses the boundary
    assert!(!response.text().contains("connection reset"));
}

#[tokio::test]
async fn test_payment_gateway_failure_logged_with_context() {
    let logger = Arc::new(RecordingLogger::default());
    let server = create_test_server_with(Arc::new(FailingGateway), logger.clone());

    server
        .post("/api/payments")
        .json(&serde_json::json!({
            "amount": 2500,
            "currency": "USD"
        }))
        .await;

    let entries = logger.entries();
    assert_eq!(entries.len(), 1);
    let (message, context) = &entries[0];
    assert_eq!(message, "Payment processing failed");
    assert!(context.contains_key("payment_id"));
    assert_eq!(context.get("amount").unwrap(), 2500);
}

#[tokio::test]
async fn test_validation_failure_is_not_operation_logged() {
    let logger = Arc::new(RecordingLogger::default());
    let server = create_test_server_with(Arc::new(FailingGateway), logger.clone());

    server
        .post("/api/payments")
        .json(&serde_json::json!({
            "amount": -5,
            "currency": "USD"
        }))
        .await;

    // Client-fault failures never reach the gateway or the failure log
    assert!(logger.entries().is_empty());
}

#[tokio::test]
async fn test_default_state_uses_tracing_logger() {
    // Exercises the default collaborators end to end
    let server = create_test_server_with(
        Arc::new(FailingGateway),
        Arc::new(TracingLogger::new()),
    );

    let response = server
        .post("/api/payments")
        .json(&serde_json::json!({
            "amount": 100,
            "currency": "EUR"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
