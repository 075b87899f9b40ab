//! Delegated delete control for attendant rows.
//!
//! The row cell renders only the button; this module owns the rest of the
//! flow: the confirm modal, the soft-delete request against the attendants
//! collection, and the result channel the app drains each frame. A
//! successful delete closes the modal and re-fetches the roster, so the
//! removed row disappears as soon as the refreshed snapshot arrives.

use chrono::Utc;
use egui::{Color32, RichText, Ui, Window};
use parkdesk_business::store::UpdateDocumentRequest;
use parkdesk_business::{ATTENDANTS_COLLECTION, Attendant, AttendantsState, store};

use super::api::parse_update_response;
use crate::state::State;

/// Outcome of one soft-delete request.
#[derive(Debug, Clone)]
pub struct DeleteResult {
    pub id: String,
    pub outcome: Result<(), String>,
}

pub type DeleteResultSender = flume::Sender<DeleteResult>;
pub type DeleteResultReceiver = flume::Receiver<DeleteResult>;

/// Creates the channel pair carried in the app state.
pub fn create_delete_channel() -> (DeleteResultSender, DeleteResultReceiver) {
    flume::unbounded()
}

/// Renders the delete button for one row. Returns `true` when clicked.
pub(crate) fn delete_button(ui: &mut Ui, attendant: &Attendant) -> bool {
    ui.button("Delete")
        .on_hover_text(format!("Delete {}", attendant.name))
        .clicked()
}

/// Shows the delete confirmation modal for the pending attendant.
pub(crate) fn show_delete_modal(
    state: &mut AttendantsState,
    store_base_url: &str,
    results: &DeleteResultSender,
    ui: &mut Ui,
) {
    let Some(attendant) = state.pending_delete.clone() else {
        return;
    };

    let mut open = true;

    Window::new(format!("Delete Attendant - {}", attendant.name))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            if let Some(error) = &state.delete_error {
                ui.colored_label(Color32::RED, format!("Error: {error}"));
                ui.add_space(8.0);
            }

            if state.delete_in_progress {
                ui.label("Deleting attendant...");
                ui.spinner();
                return;
            }

            ui.colored_label(Color32::from_rgb(255, 165, 0), "⚠ Warning");
            ui.add_space(4.0);
            ui.label(format!(
                "Are you sure you want to delete attendant '{}'?",
                attendant.name
            ));
            ui.label("The record is hidden from the roster, not removed from the store.");

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Delete").color(Color32::RED))
                    .clicked()
                {
                    state.set_delete_in_progress();
                    soft_delete_attendant(
                        store_base_url,
                        &attendant.id,
                        results.clone(),
                        ui.ctx().clone(),
                    );
                }

                if ui.button("Cancel").clicked() {
                    state.close_delete();
                }
            });
        });

    if !open {
        state.close_delete();
    }
}

/// Stamps `deleted_at` on the attendant's document.
fn soft_delete_attendant(
    store_base_url: &str,
    id: &str,
    results: DeleteResultSender,
    ctx: egui::Context,
) {
    let url = store::document_url(store_base_url, ATTENDANTS_COLLECTION, id);
    let update = UpdateDocumentRequest::soft_delete(Utc::now());
    let id = id.to_string();

    let body = match serde_json::to_vec(&update) {
        Ok(body) => body,
        Err(err) => {
            let _ = results.send(DeleteResult {
                id,
                outcome: Err(err.to_string()),
            });
            ctx.request_repaint();
            return;
        }
    };

    let request = ehttp::Request {
        method: "PATCH".to_string(),
        url,
        body,
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
    };

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        let outcome = match parse_update_response(result) {
            Ok(true) => Ok(()),
            Ok(false) => Err("Attendant not found".to_string()),
            Err(err) => Err(err.to_string()),
        };
        if let Err(err) = &outcome {
            log::error!("error deleting attendant {id}: {err}");
        }
        let _ = results.send(DeleteResult {
            id: id.clone(),
            outcome,
        });
    });
}

/// Applies completed delete results: success closes the modal and re-fetches
/// the roster; failure surfaces inside the modal.
pub fn poll_delete_results(state: &mut State) {
    while let Ok(result) = state.delete_result_receiver.try_recv() {
        match result.outcome {
            Ok(()) => {
                log::info!("attendant {} deleted", result.id);
                state.attendants.close_delete();
                state.attendants.request_refresh();
            }
            Err(error) => state.attendants.set_delete_error(error),
        }
    }
}
