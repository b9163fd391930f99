use eframe::egui;

use crate::egui_app::state::AppState;

pub mod home_view;

/// Top bar background color
const TOP_BAR_BG: egui::Color32 = egui::Color32::from_rgb(24, 26, 32);
/// Light text color
const TEXT_LIGHT: egui::Color32 = egui::Color32::from_rgb(235, 235, 240);

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    TEXT_LIGHT,
                    egui::RichText::new("💳 XFPay").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    ui.colored_label(
                        egui::Color32::from_rgb(108, 117, 125),
                        state.config.server_url(),
                    );
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        home_view::render(ui, state);
    });
}
