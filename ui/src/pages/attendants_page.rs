//! The attendants roster page.
//!
//! Hosts only the roster panel; the top bar is owned by the app shell.

use egui::{Response, Ui};

use crate::{state::State, widgets};

pub fn attendants_page(state: &mut State, ui: &mut Ui) -> Response {
    let store_base_url = state.config.store_url().to_string();

    ui.vertical(|ui| {
        ui.heading("Parking Attendants");
        ui.add_space(8.0);
        widgets::attendants::attendants_panel(
            &mut state.attendants,
            &mut state.route,
            &store_base_url,
            &state.delete_result_sender,
            ui,
        );
    })
    .response
}
