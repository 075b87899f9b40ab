//! State for the attendants roster panel.

use chrono::{DateTime, Utc};

use super::Attendant;

/// State behind the attendants list view and its delete flow.
///
/// Mutated only on the UI thread; async results are fed in by the UI crate's
/// per-frame polling.
#[derive(Debug, Default)]
pub struct AttendantsState {
    /// Snapshot from the last completed fetch, in backend order.
    pub(crate) attendants: Vec<Attendant>,
    /// Search text, matched against attendant names.
    pub search: String,
    /// Whether a list query is in flight.
    pub is_fetching: bool,
    /// Message of the last failed fetch. Kept for diagnostics; the list view
    /// degrades to its empty state instead of showing a banner.
    pub error: Option<String>,
    /// When the current snapshot was taken.
    pub last_fetch: Option<DateTime<Utc>>,
    /// Whether the initial fetch has been kicked off.
    pub(crate) started: bool,
    /// Whether the list should be re-fetched (set after a successful
    /// mutation).
    pub(crate) refresh_requested: bool,
    /// Attendant awaiting delete confirmation, if any.
    pub pending_delete: Option<Attendant>,
    /// Whether the confirmed delete request is in flight.
    pub delete_in_progress: bool,
    /// Error from the last failed delete, shown inside the confirm modal.
    pub delete_error: Option<String>,
}

impl AttendantsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rows to render: case-insensitive substring match of the search
    /// text against attendant names. Empty search yields the full snapshot.
    ///
    /// Re-derived on every frame; not memoized.
    pub fn filtered(&self) -> Vec<&Attendant> {
        let needle = self.search.to_lowercase();
        self.attendants
            .iter()
            .filter(|attendant| attendant.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn attendants(&self) -> &[Attendant] {
        &self.attendants
    }

    /// Looks up an attendant from the current snapshot by document id.
    pub fn by_id(&self, id: &str) -> Option<&Attendant> {
        self.attendants.iter().find(|attendant| attendant.id == id)
    }

    /// True when a fetch should be issued: either nothing has been fetched
    /// yet, or a mutation requested a refresh.
    pub fn wants_fetch(&self) -> bool {
        !self.started || self.refresh_requested
    }

    /// Marks the fetch as issued and in flight.
    pub fn begin_fetch(&mut self) {
        self.started = true;
        self.refresh_requested = false;
        self.set_fetching();
    }

    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.error = None;
    }

    /// Applies a completed fetch.
    ///
    /// Takes `now` as a parameter so tests can pin the snapshot time.
    pub fn update_attendants(&mut self, attendants: Vec<Attendant>, now: DateTime<Utc>) {
        self.attendants = attendants;
        self.is_fetching = false;
        self.error = None;
        self.last_fetch = Some(now);
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_fetching = false;
    }

    /// Asks for the list to be re-fetched on the next frame.
    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    /// Opens the delete confirmation for `attendant`.
    pub fn request_delete(&mut self, attendant: Attendant) {
        self.pending_delete = Some(attendant);
        self.delete_in_progress = false;
        self.delete_error = None;
    }

    /// Closes the delete confirmation, dropping any error.
    pub fn close_delete(&mut self) {
        self.pending_delete = None;
        self.delete_in_progress = false;
        self.delete_error = None;
    }

    pub fn set_delete_in_progress(&mut self) {
        self.delete_in_progress = true;
        self.delete_error = None;
    }

    pub fn set_delete_error(&mut self, error: String) {
        self.delete_error = Some(error);
        self.delete_in_progress = false;
    }
}
