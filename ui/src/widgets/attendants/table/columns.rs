//! Column definitions for the attendants table.

use egui_extras::Column;

/// Fixed width for the action-button column.
pub const ACTIONS_WIDTH: f32 = 150.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration, in order:
/// - Name (flexible)
/// - Email (flexible)
/// - Action (fixed)
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::remainder().at_least(120.0), // Name - flexible
        Column::remainder().at_least(160.0), // Email - flexible
        Column::exact(ACTIONS_WIDTH),        // Action - fixed
    ]
}
