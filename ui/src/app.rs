use parkdesk_business::Route;

use crate::{pages, state::State, widgets};

/// The Parkdesk admin application.
pub struct ParkdeskApp {
    state: State,
}

impl ParkdeskApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for ParkdeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Feed completed async work into state before rendering.
        widgets::attendants::poll_attendants_responses(&mut self.state, ctx);
        widgets::attendants::poll_delete_results(&mut self.state);

        // Fetch on first show of the roster, and again after a successful
        // mutation. At most one list query is in flight.
        if self.state.route == Route::Attendants
            && self.state.attendants.wants_fetch()
            && !self.state.attendants.is_fetching
        {
            self.state.attendants.begin_fetch();
            widgets::attendants::fetch_attendants(self.state.config.store_url(), ctx.clone());
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Parkdesk");
                ui.separator();
                widgets::env_version(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.route.clone() {
            Route::Attendants => {
                pages::attendants_page(&mut self.state, ui);
            }
            Route::UpdateAttendant(id) => {
                pages::update_attendant_page(&mut self.state, &id, ui);
            }
        });
    }
}
