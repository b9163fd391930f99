/**
 * Home View
 *
 * Payment submission form, wrapped in the UI error boundary. A render
 * failure anywhere inside the wrapped subtree is replaced by the fixed
 * fallback message; the Diagnostics section can deliberately trigger
 * one and remount afterwards.
 */

use eframe::egui;

use crate::egui_app::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(12.0);
    ui.heading("Submit a payment");
    ui.add_space(8.0);

    let mut submit_clicked = false;
    {
        let boundary = &mut state.boundary;
        let form = &mut state.form;
        let last_result = &state.last_result;
        let submitting = state.submitting;
        let force_render_failure = state.force_render_failure;

        boundary.show(ui, |ui| {
            if force_render_failure {
                panic!("Deliberate render failure");
            }

            ui.horizontal(|ui| {
                ui.label("Amount (cents):");
                ui.text_edit_singleline(&mut form.amount_input);
            });
            ui.horizontal(|ui| {
                ui.label("Currency:");
                ui.text_edit_singleline(&mut form.currency_input);
            });

            ui.add_space(8.0);
            if ui
                .add_enabled(!submitting, egui::Button::new("Submit payment"))
                .clicked()
            {
                submit_clicked = true;
            }
            if submitting {
                ui.spinner();
            }

            match last_result {
                Some(Ok(receipt)) => {
                    ui.colored_label(
                        egui::Color32::from_rgb(40, 167, 69),
                        format!(
                            "Payment {} {} ({})",
                            receipt.status, receipt.payment_id, receipt.reference
                        ),
                    );
                }
                Some(Err(failure)) => {
                    ui.colored_label(egui::Color32::from_rgb(220, 53, 69), failure.message());
                }
                None => {}
            }
        });
    }

    if submit_clicked {
        state.submit_payment();
    }

    ui.add_space(16.0);
    ui.separator();
    ui.collapsing("Diagnostics", |ui| {
        if state.boundary.is_errored() {
            if ui.button("Remount view").clicked() {
                state.force_render_failure = false;
                state.boundary.remount();
            }
        } else if ui.button("Trigger render failure").clicked() {
            state.force_render_failure = true;
        }
    });
}
