//! Row rendering for the attendants table.

use egui_extras::TableRow;
use parkdesk_business::Attendant;

use super::cells::{draw_cell_bottom_border, render_email_cell, render_name_cell};
use crate::widgets::attendants::delete::delete_button;

/// Action produced by clicking a row control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Navigate to the edit screen for this attendant id.
    Edit(String),
    /// Hand the attendant to the delete flow.
    Delete(Attendant),
}

/// Renders a single attendant row. Returns the clicked action, if any.
#[inline]
pub fn render_attendant_row(
    row: &mut TableRow<'_, '_>,
    attendant: &Attendant,
) -> Option<RowAction> {
    let mut action = None;

    row.col(|ui| {
        render_name_cell(ui, &attendant.name);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_email_cell(ui, &attendant.email);
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        ui.horizontal(|ui| {
            if ui.button("Edit").clicked() {
                action = Some(RowAction::Edit(attendant.id.clone()));
            }
            if delete_button(ui, attendant) {
                action = Some(RowAction::Delete(attendant.clone()));
            }
        });
        draw_cell_bottom_border(ui);
    });

    action
}
