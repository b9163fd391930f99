//! Shared test helpers
//!
//! Test doubles for the operation logger and the payment gateway, and a
//! server builder used by the API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Map, Value};
use uuid::Uuid;

use xfpay::backend::logging::OperationLogger;
use xfpay::backend::payments::gateway::{GatewayError, PaymentGateway};
use xfpay::backend::routes::create_router;
use xfpay::backend::server::state::AppState;

/// Logger that records every failure entry for assertions
#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(String, Map<String, Value>)>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<(String, Map<String, Value>)> {
        self.entries.lock().unwrap().clone()
    }
}

impl OperationLogger for RecordingLogger {
    fn log_failure(&self, message: &str, context: Map<String, Value>) {
        self.entries
            .lock()
            .unwrap()
            .push((message.to_string(), context));
    }
}

/// Gateway that fails every charge with internal error text
pub struct FailingGateway;

#[async_trait]
impl PaymentGateway for FailingGateway {
    async fn charge(
        &self,
        _payment_id: Uuid,
        _amount: i64,
        _currency: &str,
    ) -> Result<String, GatewayError> {
        Err(GatewayError::Unavailable {
            message: "connection reset by processor".to_string(),
        })
    }
}

/// Test server with default collaborators and no database
pub fn create_test_server() -> TestServer {
    let app = create_router(AppState::with_defaults(None));
    TestServer::new(app).unwrap()
}

/// Test server with explicit collaborators
pub fn create_test_server_with(
    gateway: Arc<dyn PaymentGateway>,
    logger: Arc<dyn OperationLogger>,
) -> TestServer {
    let app = create_router(AppState::new(None, gateway, logger));
    TestServer::new(app).unwrap()
}
