//! Request and response shapes for the `/documents` endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use crate::metadata::Metadata;

/// A stored document as returned by the backend.
///
/// `id` is backend-assigned and opaque. `text` may be absent when the
/// backend did not include the document body in the response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
}

/// Request body for updating a document's text and/or metadata.
///
/// The backend may distinguish an omitted `text` field from a literal
/// `null`, so both wire forms must be producible:
/// `text: None` omits the field, `text: Some(None)` transmits `null`,
/// and `text: Some(Some(s))` transmits the new text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub text: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl UpdateRequest {
    pub fn new() -> Self {
        UpdateRequest::default()
    }

    /// Replace the document text (the backend re-embeds it).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(Some(text.into()));
        self
    }

    /// Transmit a literal `null` for `text`, signalling no text change.
    pub fn with_null_text(mut self) -> Self {
        self.text = Some(None);
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

// Keeps `null` distinguishable from an absent field when deserializing:
// a present `null` becomes Some(None) instead of collapsing to None.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Request body for deleting a batch of documents by id.
///
/// No local validation: the backend is authoritative about empty or
/// unknown id lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteBatchRequest {
    pub ids: Vec<String>,
}

impl DeleteBatchRequest {
    pub fn new(ids: Vec<String>) -> Self {
        DeleteBatchRequest { ids }
    }
}
