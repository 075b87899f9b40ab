//! Table header rendering for the attendants table.

use egui::Ui;
use egui_extras::TableRow;

/// Header column labels.
const HEADERS: [&str; 3] = ["Name", "Email", "Action"];

/// Renders the table header with bold labels.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>) {
    for label in HEADERS {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
