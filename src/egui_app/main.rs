/**
 * egui Native Desktop App - Main Entry Point
 *
 * This is the main entry point for the egui native desktop application.
 * It implements eframe::App and renders the payment form behind the UI
 * error boundary.
 */
use eframe::egui;
use xfpay::egui_app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    // Initialize tracing for the local diagnostic channel
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "XFPay",
        options,
        Box::new(|_cc| Ok(Box::new(XfpayApp::default()))),
    )
}

/// Main application state
struct XfpayApp {
    state: AppState,
}

impl Default for XfpayApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for XfpayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_payment_result();

        views::render_top_bar(ctx, &mut self.state);

        views::render_main_panel(ctx, &mut self.state);
    }
}
