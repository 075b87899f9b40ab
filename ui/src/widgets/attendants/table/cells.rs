//! Cell rendering functions for the attendants table.

use egui::{Stroke, Ui};

#[inline]
pub fn render_name_cell(ui: &mut Ui, name: &str) {
    ui.label(name);
}

#[inline]
pub fn render_email_cell(ui: &mut Ui, email: &str) {
    ui.label(email);
}

/// Draws a bottom border line for a cell.
#[inline]
pub fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
