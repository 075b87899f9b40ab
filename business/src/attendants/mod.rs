//! Parking-attendant domain model.

mod state;

pub use state::AttendantsState;

use serde::{Deserialize, Serialize};

use crate::store::Document;

/// Collection holding attendant documents in the store.
pub const ATTENDANTS_COLLECTION: &str = "parking_attendants";

/// One parking attendant as shown in the roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendant {
    /// Document key in [`ATTENDANTS_COLLECTION`].
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Attendant {
    /// Maps a store document to an attendant.
    ///
    /// Missing or non-string `name`/`email` fields map to empty strings; the
    /// row still renders and still matches the empty search.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.string_field("name"),
            email: doc.string_field("email"),
        }
    }
}
