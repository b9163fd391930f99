/**
 * UI Error Boundary
 *
 * Render-tree guard for the desktop app. A boundary wraps a subtree
 * render closure; a panic thrown during that render transitions the
 * boundary from `Healthy` to `Errored`, which is terminal for the
 * subtree until `remount` is called.
 *
 * # On Transition
 *
 * 1. The failure is reported to the monitoring collaborator exactly once
 *    (a reporting failure is swallowed, it must not crash the boundary)
 * 2. The failure is logged to the local diagnostic channel
 * 3. A fixed fallback message is rendered in place of the subtree
 *
 * There is no automatic recovery; subsequent frames keep rendering the
 * fallback without re-invoking the wrapped closure.
 */

use std::panic::{catch_unwind, AssertUnwindSafe};

use eframe::egui;
use serde_json::Value;

use crate::egui_app::monitoring::{ErrorEvent, ErrorReporter};
use crate::shared::taxonomy::Severity;

/// Fixed fallback message rendered when the subtree has failed
pub const FALLBACK_TEXT: &str = "Something went wrong. Please try again later.";

/// Captured render failure
#[derive(Debug, Clone)]
pub struct ErrorReport {
    /// Panic payload text
    pub message: String,
    /// ISO-8601 timestamp of the transition
    pub timestamp: String,
}

/// Boundary state machine: `Healthy -> Errored` (terminal per mount)
#[derive(Debug, Clone)]
pub enum BoundaryState {
    Healthy,
    Errored(ErrorReport),
}

/// Render-tree error boundary
pub struct ErrorBoundary {
    /// Name of the wrapped subtree, included in report context
    name: &'static str,
    state: BoundaryState,
    reporter: std::sync::Arc<dyn ErrorReporter>,
}

impl ErrorBoundary {
    /// Create a healthy boundary reporting to the given collaborator
    pub fn new(name: &'static str, reporter: std::sync::Arc<dyn ErrorReporter>) -> Self {
        Self {
            name,
            state: BoundaryState::Healthy,
            reporter,
        }
    }

    /// Current boundary state
    pub fn state(&self) -> &BoundaryState {
        &self.state
    }

    /// Whether the wrapped subtree has failed
    pub fn is_errored(&self) -> bool {
        matches!(self.state, BoundaryState::Errored(_))
    }

    /// Reset to `Healthy`
    ///
    /// The only way back after a failure; the wrapped subtree renders
    /// fresh on the next frame.
    pub fn remount(&mut self) {
        self.state = BoundaryState::Healthy;
    }

    /// Render the wrapped subtree, guarding against panics
    ///
    /// In the `Errored` state the fallback message is rendered and the
    /// closure is not invoked.
    pub fn show(&mut self, ui: &mut egui::Ui, content: impl FnOnce(&mut egui::Ui)) {
        if self.is_errored() {
            render_fallback(ui);
            return;
        }

        if let Err(payload) = catch_unwind(AssertUnwindSafe(|| content(&mut *ui))) {
            let message = panic_message(payload);
            tracing::error!("Render failure in '{}': {}", self.name, message);

            let event = ErrorEvent::new(message.clone(), Severity::Fatal)
                .with_context("view", Value::String(self.name.to_string()));

            // Report once, and never let a reporting failure replace the
            // original one.
            let reporter = &self.reporter;
            if catch_unwind(AssertUnwindSafe(|| reporter.report(&event))).is_err() {
                tracing::warn!("Failed to report render failure for '{}'", self.name);
            }

            self.state = BoundaryState::Errored(ErrorReport {
                message,
                timestamp: event.timestamp,
            });
            render_fallback(ui);
        }
    }
}

/// Render the fixed fallback view
fn render_fallback(ui: &mut egui::Ui) {
    ui.colored_label(egui::Color32::from_rgb(220, 53, 69), FALLBACK_TEXT);
}

/// Extract a printable message from a panic payload
fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown render failure".to_string()
    }
}
