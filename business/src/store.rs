//! Wire contracts for the document store backing Parkdesk.
//!
//! The backend exposes named collections of schemaless JSON documents. This
//! app uses two operations:
//!
//! - query a collection with an optional field filter:
//!   `POST {base}/api/collections/{collection}/documents/query`
//! - partially update one document:
//!   `PATCH {base}/api/collections/{collection}/documents/{id}`
//!
//! Requests and responses are plain serde structs; the HTTP calls themselves
//! are made from the UI crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A single document in a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document key, unique within its collection.
    pub id: String,
    /// Field values. Absent in the payload means an empty document.
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Returns the named field as a string, or `""` when it is missing or
    /// not a string.
    pub fn string_field(&self, name: &str) -> String {
        self.fields
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

/// Comparison applied by a [`FieldFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    IsNull,
    Equal,
}

/// A filter on one document field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub field: String,
    pub op: FilterOp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldFilter {
    /// Matches documents where `field` is unset or null.
    pub fn is_null(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::IsNull,
            value: None,
        }
    }

    /// Matches documents where `field` equals `value`.
    pub fn equals(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            op: FilterOp::Equal,
            value: Some(value),
        }
    }
}

/// Body of the collection query endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FieldFilter>,
}

impl QueryRequest {
    /// The soft-delete filter: only documents whose `deleted_at` is unset.
    pub fn non_deleted() -> Self {
        Self {
            filter: Some(FieldFilter::is_null("deleted_at")),
        }
    }
}

/// Response of the collection query endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub documents: Vec<Document>,
}

/// Body of the document update endpoint. Only the named fields change;
/// everything else is left as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    pub fields: Map<String, Value>,
}

impl UpdateDocumentRequest {
    /// An update writing a single field.
    pub fn set_field(name: impl Into<String>, value: Value) -> Self {
        let mut fields = Map::new();
        fields.insert(name.into(), value);
        Self { fields }
    }

    /// The soft-delete update: stamps `deleted_at` with `now` in RFC 3339.
    pub fn soft_delete(now: DateTime<Utc>) -> Self {
        Self::set_field("deleted_at", Value::String(now.to_rfc3339()))
    }
}

/// Response of the document update endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDocumentResponse {
    /// False when no document with the given id exists.
    pub updated: bool,
}

/// URL of the query endpoint for `collection`.
pub fn query_url(base_url: &str, collection: &str) -> String {
    format!("{base_url}/api/collections/{collection}/documents/query")
}

/// URL of a single document in `collection`.
pub fn document_url(base_url: &str, collection: &str, id: &str) -> String {
    format!("{base_url}/api/collections/{collection}/documents/{id}")
}

/// Errors produced when talking to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("store returned status: {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Parse(String),
}
