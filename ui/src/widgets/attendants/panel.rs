//! The attendants roster panel.
//!
//! Search box over a striped Name/Email/Action table. The snapshot is
//! fetched by the app shell on first show; the panel itself only re-issues
//! the query from its Refresh button. While a fetch is in flight the table
//! is replaced by a loading indicator; an empty filter result (including the
//! aftermath of a failed fetch) renders the empty-state message instead.

use chrono::Utc;
use egui::{Response, TextEdit, Ui};
use egui_extras::TableBuilder;
use parkdesk_business::{Attendant, AttendantsState, Route};

use super::api::{self, fetch_attendants};
use super::delete::{DeleteResultSender, show_delete_modal};
use super::table::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use super::table::header::render_table_header;
use super::table::row::{RowAction, render_attendant_row};
use crate::state::State;

/// Hint shown in the search box.
const SEARCH_HINT: &str = "Search by attendant name...";
/// Shown when there is nothing to display.
const EMPTY_MESSAGE: &str = "No attendant found";

/// Renders the roster panel.
pub fn attendants_panel(
    state: &mut AttendantsState,
    route: &mut Route,
    store_base_url: &str,
    delete_results: &DeleteResultSender,
    ui: &mut Ui,
) -> Response {
    let response = ui.vertical(|ui| {
        // Toolbar: refresh plus in-flight indicator.
        ui.horizontal(|ui| {
            if ui.button("Refresh").clicked() && !state.is_fetching {
                state.set_fetching();
                fetch_attendants(store_base_url, ui.ctx().clone());
            }
            if state.is_fetching {
                ui.spinner();
                ui.label("Loading...");
            }
        });

        ui.add_space(8.0);
        ui.add(
            TextEdit::singleline(&mut state.search)
                .hint_text(SEARCH_HINT)
                .desired_width(280.0),
        );
        ui.add_space(8.0);

        if state.is_fetching {
            // Snapshot in flight; the table is not rendered.
            return;
        }

        let filtered: Vec<Attendant> = state.filtered().into_iter().cloned().collect();
        if filtered.is_empty() {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.weak(EMPTY_MESSAGE);
            });
            return;
        }

        let mut row_action: Option<RowAction> = None;

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
        for column in table_columns() {
            table = table.column(column);
        }
        table
            .header(HEADER_HEIGHT, |mut header| {
                render_table_header(&mut header);
            })
            .body(|mut body| {
                for attendant in &filtered {
                    body.row(ROW_HEIGHT, |mut row| {
                        if let Some(action) = render_attendant_row(&mut row, attendant) {
                            row_action = Some(action);
                        }
                    });
                }
            });

        match row_action {
            Some(RowAction::Edit(id)) => {
                let target = Route::UpdateAttendant(id);
                log::info!("navigate to {}", target.path());
                *route = target;
            }
            Some(RowAction::Delete(attendant)) => state.request_delete(attendant),
            None => {}
        }
    });

    // Confirm modal for a requested delete.
    if state.pending_delete.is_some() {
        show_delete_modal(state, store_base_url, delete_results, ui);
    }

    response.response
}

/// Drains completed fetch/update responses into state.
///
/// Call once per frame before rendering.
pub fn poll_attendants_responses(state: &mut State, ctx: &egui::Context) {
    // Completed roster fetch.
    if let Some(attendants) =
        ctx.memory(|mem| mem.data.get_temp::<Vec<Attendant>>(api::response_id()))
    {
        state.attendants.update_attendants(attendants, Utc::now());
        ctx.memory_mut(|mem| {
            mem.data.remove::<Vec<Attendant>>(api::response_id());
        });
    }

    // Failed roster fetch. The panel degrades to its empty state; the
    // message is kept in state for diagnostics only.
    if let Some(error) = ctx.memory(|mem| mem.data.get_temp::<String>(api::error_id())) {
        state.attendants.set_error(error);
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(api::error_id());
        });
    }

    // Saved attendant update: back to the roster and re-fetch it.
    if let Some(id) = ctx.memory(|mem| mem.data.get_temp::<String>(api::update_ok_id())) {
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(api::update_ok_id());
        });
        log::info!("attendant {id} updated");
        state.update_form.reset();
        state.route = Route::Attendants;
        state.attendants.request_refresh();
    }

    // Failed attendant update: surface on the edit page.
    if let Some(error) = ctx.memory(|mem| mem.data.get_temp::<String>(api::update_error_id())) {
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(api::update_error_id());
        });
        state.update_form.error = Some(error);
        state.update_form.in_progress = false;
    }
}

#[cfg(test)]
mod attendants_panel_tests {
    use chrono::Utc;
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::super::delete::create_delete_channel;
    use super::*;

    /// State driven by the panel in these tests.
    struct PanelState {
        attendants: AttendantsState,
        route: Route,
    }

    fn test_attendants() -> Vec<Attendant> {
        vec![
            Attendant {
                id: "u1".to_string(),
                name: "Siti Rahma".to_string(),
                email: "siti@parkdesk.app".to_string(),
            },
            Attendant {
                id: "u2".to_string(),
                name: "Budi Santoso".to_string(),
                email: "budi@parkdesk.app".to_string(),
            },
            Attendant {
                id: "u3".to_string(),
                name: "Agus Wijaya".to_string(),
                email: "agus@parkdesk.app".to_string(),
            },
        ]
    }

    fn state_with_attendants() -> PanelState {
        let mut attendants = AttendantsState::new();
        attendants.update_attendants(test_attendants(), Utc::now());
        PanelState {
            attendants,
            route: Route::Attendants,
        }
    }

    fn harness_with(state: PanelState) -> Harness<'static, PanelState> {
        let (sender, receiver) = create_delete_channel();
        // Keep the receiver alive for the harness lifetime; the panel only
        // needs the sender.
        Harness::new_ui_state(
            move |ui, state: &mut PanelState| {
                let _keep = &receiver;
                attendants_panel(
                    &mut state.attendants,
                    &mut state.route,
                    "http://test",
                    &sender,
                    ui,
                );
            },
            state,
        )
    }

    #[test]
    fn test_table_header_elements_exist() {
        let harness = harness_with(state_with_attendants());

        assert!(
            harness.query_by_label("Name").is_some(),
            "Name header should exist"
        );
        assert!(
            harness.query_by_label("Email").is_some(),
            "Email header should exist"
        );
        assert!(
            harness.query_by_label("Action").is_some(),
            "Action header should exist"
        );
    }

    #[test]
    fn test_rows_display_fetched_attendants() {
        let harness = harness_with(state_with_attendants());

        for name in ["Siti Rahma", "Budi Santoso", "Agus Wijaya"] {
            assert!(
                harness.query_by_label_contains(name).is_some(),
                "attendant '{name}' should be displayed"
            );
        }
        assert!(
            harness.query_by_label_contains("budi@parkdesk.app").is_some(),
            "attendant emails should be displayed"
        );
    }

    #[test]
    fn test_row_buttons_exist_per_attendant() {
        let harness = harness_with(state_with_attendants());

        assert_eq!(
            harness.query_all_by_label("Edit").count(),
            3,
            "one Edit button per attendant"
        );
        assert_eq!(
            harness.query_all_by_label("Delete").count(),
            3,
            "one Delete button per attendant"
        );
    }

    #[test]
    fn test_empty_state_message() {
        let harness = harness_with(PanelState {
            attendants: AttendantsState::new(),
            route: Route::Attendants,
        });

        assert!(
            harness.query_by_label("No attendant found").is_some(),
            "empty state message should be displayed"
        );
        assert!(
            harness.query_by_label("Email").is_none(),
            "table should not render without rows"
        );
    }

    #[test]
    fn test_loading_state_hides_table() {
        let mut state = state_with_attendants();
        state.attendants.set_fetching();
        let harness = harness_with(state);

        assert!(
            harness.query_by_label_contains("Loading").is_some(),
            "loading indicator should be visible while fetching"
        );
        assert!(
            harness.query_by_label_contains("Siti Rahma").is_none(),
            "rows should not render while fetching"
        );
        assert!(
            harness.query_by_label("Name").is_none(),
            "header should not render while fetching"
        );
    }

    #[test]
    fn test_fetch_error_degrades_to_empty_state() {
        let mut state = PanelState {
            attendants: AttendantsState::new(),
            route: Route::Attendants,
        };
        state.attendants.set_fetching();
        state
            .attendants
            .set_error("store returned status: 500".to_string());
        let harness = harness_with(state);

        assert!(
            harness.query_by_label("No attendant found").is_some(),
            "empty state should be displayed after a failed fetch"
        );
        assert!(
            harness.query_by_label_contains("500").is_none(),
            "fetch errors are logged, not shown as a banner"
        );
    }

    #[test]
    fn test_search_filters_rows_on_change() {
        let mut harness = harness_with(state_with_attendants());
        harness.step();

        harness.state_mut().attendants.search = "rahm".to_string();
        harness.step();

        assert!(
            harness.query_by_label_contains("Siti Rahma").is_some(),
            "matching attendant should stay visible"
        );
        assert!(
            harness.query_by_label_contains("Budi Santoso").is_none(),
            "non-matching attendants should be filtered out"
        );

        harness.state_mut().attendants.search.clear();
        harness.step();

        assert_eq!(
            harness.query_all_by_label("Edit").count(),
            3,
            "clearing the search restores the full list"
        );
    }

    #[test]
    fn test_edit_click_navigates_to_update_route() {
        let mut state = state_with_attendants();
        state
            .attendants
            .update_attendants(test_attendants()[..1].to_vec(), Utc::now());
        let mut harness = harness_with(state);
        harness.step();

        harness.get_by_label("Edit").click();
        harness.step();

        assert_eq!(
            harness.state().route,
            Route::UpdateAttendant("u1".to_string())
        );
        assert_eq!(
            harness.state().route.path(),
            "/update-parking-attendant/u1"
        );
    }

    #[test]
    fn test_delete_click_opens_confirm_modal() {
        let mut state = state_with_attendants();
        state
            .attendants
            .update_attendants(test_attendants()[..1].to_vec(), Utc::now());
        let mut harness = harness_with(state);
        harness.step();

        harness.get_by_label("Delete").click();
        harness.step();

        assert_eq!(
            harness
                .state()
                .attendants
                .pending_delete
                .as_ref()
                .map(|attendant| attendant.id.as_str()),
            Some("u1")
        );

        harness.step();
        assert!(
            harness.query_by_label_contains("Are you sure").is_some(),
            "confirm modal should be visible"
        );
    }

    #[test]
    fn test_cancel_closes_confirm_modal_without_deleting() {
        let mut state = state_with_attendants();
        state
            .attendants
            .request_delete(test_attendants()[0].clone());
        let mut harness = harness_with(state);
        harness.step();

        harness.get_by_label("Cancel").click();
        harness.step();

        assert!(harness.state().attendants.pending_delete.is_none());
        assert_eq!(
            harness.query_all_by_label("Edit").count(),
            3,
            "cancel keeps every row"
        );
    }
}
