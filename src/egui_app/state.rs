/**
 * Application State
 *
 * Central state for the desktop app: configuration, the monitoring
 * client, the home view error boundary, and the payment form.
 *
 * Backend requests run on short-lived worker threads; results come back
 * over an mpsc channel polled each frame (`poll_payment_result`).
 */

use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

use crate::egui_app::api::{self, ApiFailure, PaymentReceipt};
use crate::egui_app::config::Config;
use crate::egui_app::error_boundary::ErrorBoundary;
use crate::egui_app::monitoring::{MonitoringClient, MonitoringConfig};

/// Payment form input fields
#[derive(Debug, Default)]
pub struct PaymentForm {
    /// Raw amount input (minor units)
    pub amount_input: String,
    /// Currency code input
    pub currency_input: String,
}

/// Main application state
pub struct AppState {
    /// Client configuration
    pub config: Config,
    /// Monitoring client handle
    pub monitoring: Arc<MonitoringClient>,
    /// Error boundary guarding the home view subtree
    pub boundary: ErrorBoundary,
    /// Payment form inputs
    pub form: PaymentForm,
    /// Result of the latest payment submission
    pub last_result: Option<Result<PaymentReceipt, ApiFailure>>,
    /// Whether a submission is in flight
    pub submitting: bool,
    /// Diagnostic switch: panic inside the wrapped subtree next frame
    pub force_render_failure: bool,
    result_rx: Option<Receiver<Result<PaymentReceipt, ApiFailure>>>,
}

impl AppState {
    /// Build state from the default configuration
    pub fn new() -> Self {
        let config = Config::new();

        let monitoring = Arc::new(MonitoringClient::new(MonitoringConfig {
            endpoint: config.monitoring_endpoint().map(str::to_string),
            sample_rate: config.monitoring_sample_rate(),
            ..Default::default()
        }));

        let boundary = ErrorBoundary::new("home", monitoring.clone());

        Self {
            config,
            monitoring,
            boundary,
            form: PaymentForm {
                amount_input: String::new(),
                currency_input: "USD".to_string(),
            },
            last_result: None,
            submitting: false,
            force_render_failure: false,
            result_rx: None,
        }
    }

    /// Submit the payment form to the backend
    ///
    /// Parses the form, then runs the request on a worker thread so the
    /// UI keeps rendering. The result is picked up by
    /// `poll_payment_result`.
    pub fn submit_payment(&mut self) {
        let amount = match self.form.amount_input.trim().parse::<i64>() {
            Ok(amount) => amount,
            Err(_) => {
                self.last_result = Some(Err(ApiFailure::Transport(
                    "Amount must be a whole number of cents".to_string(),
                )));
                return;
            }
        };
        let currency = self.form.currency_input.trim().to_uppercase();

        let config = self.config.clone();
        let (tx, rx) = mpsc::channel();
        self.result_rx = Some(rx);
        self.submitting = true;
        self.last_result = None;

        thread::spawn(move || {
            let result = api::submit_payment(&config, amount, currency);
            let _ = tx.send(result);
        });
    }

    /// Poll for a completed payment submission
    pub fn poll_payment_result(&mut self) {
        if let Some(rx) = &self.result_rx {
            if let Ok(result) = rx.try_recv() {
                self.last_result = Some(result);
                self.result_rx = None;
                self.submitting = false;
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
