/**
 * Monitoring Client
 *
 * External crash-reporting collaborator for the desktop app. Error events
 * are sampled, passed through an optional filtering hook, and delivered
 * fire-and-forget on a background thread. A reporting failure is logged
 * and swallowed: it must never crash the caller.
 *
 * # Event Flow
 *
 * 1. Sampling: events are dropped according to `sample_rate`
 * 2. `before_send`: optional filter hook, returning `false` drops the event
 * 3. Alert: `Fatal` events trigger the out-of-band alert hook
 * 4. Delivery: the event is queued to the background delivery thread
 */

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::taxonomy::Severity;

/// Error event reported to the monitoring service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEvent {
    /// Failure description
    pub message: String,
    /// Event severity
    pub severity: Severity,
    /// ISO-8601 timestamp
    pub timestamp: String,
    /// Structured context (identifiers, view names)
    pub context: Map<String, Value>,
}

impl ErrorEvent {
    /// Create a new event with a fresh timestamp
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            context: Map::new(),
        }
    }

    /// Attach a context field
    pub fn with_context(mut self, key: impl Into<String>, value: Value) -> Self {
        self.context.insert(key.into(), value);
        self
    }
}

/// Event filter hook, returning `false` drops the event
pub type BeforeSend = Arc<dyn Fn(&ErrorEvent) -> bool + Send + Sync>;

/// Out-of-band alert hook for `Fatal` events
pub type AlertHook = Arc<dyn Fn(&ErrorEvent) + Send + Sync>;

/// Monitoring client configuration
#[derive(Clone)]
pub struct MonitoringConfig {
    /// Ingest endpoint; `None` disables delivery (events still pass the
    /// hooks, useful in development)
    pub endpoint: Option<String>,
    /// Fraction of events reported, 0.0 - 1.0
    pub sample_rate: f32,
    /// Optional event filter
    pub before_send: Option<BeforeSend>,
    /// Optional out-of-band alert for `Fatal` events
    pub alert: Option<AlertHook>,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            sample_rate: 1.0,
            before_send: None,
            alert: None,
        }
    }
}

/// Reporting seam used by the UI error boundary
///
/// Implementations must not panic; the boundary additionally guards
/// against it.
pub trait ErrorReporter: Send + Sync {
    /// Report a failure event (fire-and-forget)
    fn report(&self, event: &ErrorEvent);
}

/// Monitoring client with a background delivery thread
///
/// Cheap to clone the handle via `Arc`; the delivery thread lives as long
/// as any sender does.
pub struct MonitoringClient {
    config: MonitoringConfig,
    sender: Sender<ErrorEvent>,
}

impl MonitoringClient {
    /// Create a client and spawn its delivery thread
    pub fn new(config: MonitoringConfig) -> Self {
        let (sender, receiver) = mpsc::channel::<ErrorEvent>();
        let endpoint = config.endpoint.clone();

        thread::Builder::new()
            .name("xfpay-monitoring".to_string())
            .spawn(move || deliver_loop(endpoint, receiver))
            .ok();

        Self { config, sender }
    }

    /// Capture an error event
    ///
    /// Applies sampling, the `before_send` filter, and the fatal alert,
    /// then queues the event for delivery. Never blocks on the network
    /// and never panics.
    pub fn capture(&self, event: ErrorEvent) {
        if self.config.sample_rate <= 0.0 {
            return;
        }
        if self.config.sample_rate < 1.0 && rand::random::<f32>() > self.config.sample_rate {
            return;
        }

        if let Some(before_send) = &self.config.before_send {
            if !before_send(&event) {
                tracing::debug!("Monitoring event dropped by before_send: {}", event.message);
                return;
            }
        }

        // Send an immediate alert for the highest severity
        if event.severity == Severity::Fatal {
            match &self.config.alert {
                Some(alert) => alert(&event),
                None => {
                    tracing::error!(target: "xfpay::alerts", "FATAL event: {}", event.message)
                }
            }
        }

        if self.sender.send(event).is_err() {
            tracing::warn!("Monitoring delivery thread unavailable, event dropped");
        }
    }
}

impl ErrorReporter for MonitoringClient {
    fn report(&self, event: &ErrorEvent) {
        self.capture(event.clone());
    }
}

/// Background delivery loop
///
/// Posts events as JSON to the configured endpoint. Delivery failures are
/// logged at warn and the loop keeps running.
fn deliver_loop(endpoint: Option<String>, receiver: Receiver<ErrorEvent>) {
    let client = reqwest::blocking::Client::new();

    while let Ok(event) = receiver.recv() {
        match &endpoint {
            Some(url) => {
                if let Err(e) = client.post(url).json(&event).send() {
                    tracing::warn!("Failed to deliver monitoring event: {}", e);
                }
            }
            None => {
                tracing::debug!(
                    "Monitoring endpoint not configured, event not delivered: {}",
                    event.message
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_before_send_can_drop_events() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_hook = seen.clone();

        let client = MonitoringClient::new(MonitoringConfig {
            before_send: Some(Arc::new(move |_| {
                seen_hook.fetch_add(1, Ordering::SeqCst);
                false
            })),
            ..Default::default()
        });

        client.capture(ErrorEvent::new("dropped", Severity::Error));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fatal_triggers_alert() {
        let alerts = Arc::new(AtomicUsize::new(0));
        let alerts_hook = alerts.clone();

        let client = MonitoringClient::new(MonitoringConfig {
            alert: Some(Arc::new(move |_| {
                alerts_hook.fetch_add(1, Ordering::SeqCst);
            })),
            ..Default::default()
        });

        client.capture(ErrorEvent::new("warning", Severity::Warning));
        client.capture(ErrorEvent::new("meltdown", Severity::Fatal));
        assert_eq!(alerts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zero_sample_rate_drops_before_hooks() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_hook = seen.clone();

        let client = MonitoringClient::new(MonitoringConfig {
            sample_rate: 0.0,
            before_send: Some(Arc::new(move |_| {
                seen_hook.fetch_add(1, Ordering::SeqCst);
                true
            })),
            ..Default::default()
        });

        for _ in 0..10 {
            client.capture(ErrorEvent::new("sampled out", Severity::Error));
        }
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_event_serialization() {
        let event = ErrorEvent::new("Render failure", Severity::Fatal)
            .with_context("view", Value::String("home".to_string()));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["severity"], "fatal");
        assert_eq!(json["context"]["view"], "home");
        assert!(chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok());
    }
}
