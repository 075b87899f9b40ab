//! Attendants roster widgets.
//!
//! The panel state lives in `parkdesk-business`; this module owns rendering
//! and network plumbing:
//! - `api`: store calls feeding results into egui temp memory
//! - `panel`: the roster panel (search, loading, table, empty state)
//! - `delete`: the delegated delete control and its confirm modal
//! - `table`: table rendering components (columns, header, row, cells)

mod api;
mod delete;
mod panel;
pub mod table;

pub use api::{fetch_attendants, update_attendant};
pub use delete::{
    DeleteResult, DeleteResultReceiver, DeleteResultSender, create_delete_channel,
    poll_delete_results,
};
pub use panel::{attendants_panel, poll_attendants_responses};
