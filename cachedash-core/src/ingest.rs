//! Request and response shapes for the `/ingest` endpoint.

use serde::{Deserialize, Serialize};

use crate::metadata::Metadata;

/// A value that is either a single item or an ordered batch of items.
///
/// The backend accepts both a single text and a list of texts on ingest,
/// and mirrors the shape back in the response: a scalar `text` yields a
/// scalar `id`, a batch yields a batch of ids of equal length and order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Number of items carried (1 for the scalar form).
    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, OneOrMany::Many(items) if items.is_empty())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

/// Request body for ingesting one text or a batch of texts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngestRequest {
    pub text: OneOrMany<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl IngestRequest {
    /// Ingest a single text.
    pub fn single(text: impl Into<String>) -> Self {
        IngestRequest {
            text: OneOrMany::One(text.into()),
            metadata: None,
        }
    }

    /// Ingest a batch of texts; the backend returns ids in matching order.
    pub fn batch(texts: Vec<String>) -> Self {
        IngestRequest {
            text: OneOrMany::Many(texts),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Response body for ingest: backend-assigned id(s), shape-matched to the request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngestResponse {
    pub id: OneOrMany<String>,
}
