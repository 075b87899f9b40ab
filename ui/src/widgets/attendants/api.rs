//! Store calls for the attendants roster.
//!
//! Requests run on ehttp's background thread; completions are handed back to
//! the UI thread through egui temp memory and drained by
//! [`super::panel::poll_attendants_responses`] each frame. Every completion
//! requests a repaint so an idle window picks the result up promptly.

use parkdesk_business::store::{
    QueryRequest, QueryResponse, StoreError, UpdateDocumentRequest, UpdateDocumentResponse,
};
use parkdesk_business::{ATTENDANTS_COLLECTION, Attendant, store};
use serde_json::Value;

/// Temp-memory key for a completed roster fetch (`Vec<Attendant>`).
pub(crate) fn response_id() -> egui::Id {
    egui::Id::new("attendants_response")
}

/// Temp-memory key for a failed roster fetch (`String`).
pub(crate) fn error_id() -> egui::Id {
    egui::Id::new("attendants_error")
}

/// Temp-memory key for a saved attendant update (`String` id).
pub(crate) fn update_ok_id() -> egui::Id {
    egui::Id::new("attendant_update_ok")
}

/// Temp-memory key for a failed attendant update (`String`).
pub(crate) fn update_error_id() -> egui::Id {
    egui::Id::new("attendant_update_error")
}

fn json_request(method: &str, url: String, body: Vec<u8>) -> ehttp::Request {
    ehttp::Request {
        method: method.to_string(),
        url,
        body,
        headers: ehttp::Headers::new(&[("Content-Type", "application/json")]),
    }
}

/// Queries the non-deleted attendant documents.
///
/// The query always carries the soft-delete filter, so documents with a set
/// `deleted_at` never reach the UI.
pub fn fetch_attendants(store_base_url: &str, ctx: egui::Context) {
    let url = store::query_url(store_base_url, ATTENDANTS_COLLECTION);
    let body = match serde_json::to_vec(&QueryRequest::non_deleted()) {
        Ok(body) => body,
        Err(err) => {
            log::error!("failed to encode attendants query: {err}");
            ctx.memory_mut(|mem| mem.data.insert_temp(error_id(), err.to_string()));
            return;
        }
    };

    ehttp::fetch(json_request("POST", url, body), move |result| {
        ctx.request_repaint();
        match parse_query_response(result) {
            Ok(attendants) => {
                ctx.memory_mut(|mem| mem.data.insert_temp(response_id(), attendants));
            }
            Err(err) => {
                log::error!("error fetching attendants: {err}");
                ctx.memory_mut(|mem| mem.data.insert_temp(error_id(), err.to_string()));
            }
        }
    });
}

/// Saves edited name/email as a partial update of the attendant's document.
pub fn update_attendant(store_base_url: &str, id: &str, name: &str, email: &str, ctx: egui::Context) {
    let url = store::document_url(store_base_url, ATTENDANTS_COLLECTION, id);

    let mut update = UpdateDocumentRequest::default();
    update
        .fields
        .insert("name".to_string(), Value::String(name.to_string()));
    update
        .fields
        .insert("email".to_string(), Value::String(email.to_string()));

    let body = match serde_json::to_vec(&update) {
        Ok(body) => body,
        Err(err) => {
            log::error!("failed to encode attendant update: {err}");
            ctx.memory_mut(|mem| mem.data.insert_temp(update_error_id(), err.to_string()));
            return;
        }
    };

    let id = id.to_string();
    ehttp::fetch(json_request("PATCH", url, body), move |result| {
        ctx.request_repaint();
        match parse_update_response(result) {
            Ok(true) => {
                ctx.memory_mut(|mem| mem.data.insert_temp(update_ok_id(), id.clone()));
            }
            Ok(false) => {
                ctx.memory_mut(|mem| {
                    mem.data
                        .insert_temp(update_error_id(), "Attendant not found".to_string());
                });
            }
            Err(err) => {
                log::error!("error updating attendant {id}: {err}");
                ctx.memory_mut(|mem| mem.data.insert_temp(update_error_id(), err.to_string()));
            }
        }
    });
}

fn parse_query_response(
    result: ehttp::Result<ehttp::Response>,
) -> Result<Vec<Attendant>, StoreError> {
    let response = result.map_err(StoreError::Transport)?;
    if response.status != 200 {
        return Err(StoreError::Status(response.status));
    }
    let query: QueryResponse =
        serde_json::from_slice(&response.bytes).map_err(|err| StoreError::Parse(err.to_string()))?;
    Ok(query
        .documents
        .iter()
        .map(Attendant::from_document)
        .collect())
}

/// Shared by the update and soft-delete paths; `Ok(false)` means the store
/// knows no document with the given id.
pub(crate) fn parse_update_response(
    result: ehttp::Result<ehttp::Response>,
) -> Result<bool, StoreError> {
    let response = result.map_err(StoreError::Transport)?;
    if response.status != 200 {
        return Err(StoreError::Status(response.status));
    }
    let update: UpdateDocumentResponse =
        serde_json::from_slice(&response.bytes).map_err(|err| StoreError::Parse(err.to_string()))?;
    Ok(update.updated)
}
