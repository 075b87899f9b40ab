//! Route state for page navigation.
//!
//! This module defines the route enum that determines which page to display.

use serde::{Deserialize, Serialize};

/// Represents the current page of the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// The attendants roster table.
    #[default]
    Attendants,
    /// Edit screen for one attendant, by document id.
    UpdateAttendant(String),
}

impl Route {
    /// The path this route renders as, matching the web admin's URLs.
    pub fn path(&self) -> String {
        match self {
            Self::Attendants => "/parking-attendants".to_string(),
            Self::UpdateAttendant(id) => format!("/update-parking-attendant/{id}"),
        }
    }

    /// Parses a path back into a route. Inverse of [`Route::path`].
    pub fn parse(path: &str) -> Option<Self> {
        if path == "/parking-attendants" {
            return Some(Self::Attendants);
        }
        path.strip_prefix("/update-parking-attendant/")
            .filter(|id| !id.is_empty())
            .map(|id| Self::UpdateAttendant(id.to_string()))
    }
}
