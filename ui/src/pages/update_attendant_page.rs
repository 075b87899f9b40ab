//! Edit screen for one attendant.
//!
//! Reached from the roster's Edit button. Prefills name/email from the
//! current snapshot and saves them as a partial document update; the
//! response is applied by the app's per-frame polling, which returns to the
//! roster and re-fetches it on success.

use egui::{Color32, Response, Ui};
use parkdesk_business::Route;

use crate::state::State;
use crate::widgets::attendants::update_attendant;

pub fn update_attendant_page(state: &mut State, id: &str, ui: &mut Ui) -> Response {
    let store_base_url = state.config.store_url().to_string();
    let known = state.attendants.by_id(id).cloned();

    // Prefill once per navigation.
    if state.update_form.loaded_for.as_deref() != Some(id) {
        state.update_form.load(id, known.as_ref());
    }

    ui.vertical(|ui| {
        ui.heading("Update Parking Attendant");
        ui.weak(Route::UpdateAttendant(id.to_string()).path());
        ui.add_space(12.0);

        if known.is_none() {
            ui.label("Attendant not found in the current roster.");
            ui.add_space(8.0);
            if ui.button("Back").clicked() {
                go_back(state);
            }
            return;
        }

        if let Some(error) = &state.update_form.error {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
            ui.add_space(8.0);
        }

        if state.update_form.in_progress {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Saving...");
            });
            return;
        }

        egui::Grid::new("update_attendant_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut state.update_form.name);
                ui.end_row();

                ui.label("Email");
                ui.text_edit_singleline(&mut state.update_form.email);
                ui.end_row();
            });

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                state.update_form.in_progress = true;
                state.update_form.error = None;
                update_attendant(
                    &store_base_url,
                    id,
                    &state.update_form.name,
                    &state.update_form.email,
                    ui.ctx().clone(),
                );
            }
            if ui.button("Back").clicked() {
                go_back(state);
            }
        });
    })
    .response
}

/// Returns to the roster without saving.
fn go_back(state: &mut State) {
    state.update_form.reset();
    log::info!("navigate to {}", Route::Attendants.path());
    state.route = Route::Attendants;
}
