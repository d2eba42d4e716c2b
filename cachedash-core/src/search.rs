//! Request and response shapes for the `/search` endpoint.

use serde::{Deserialize, Serialize};

use crate::metadata::Metadata;

/// Request body for similarity search.
///
/// `top_k` unset lets the backend pick its default. `where` filters on
/// metadata, `where_document` on document content; both are backend-defined
/// filter expressions passed through opaquely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#where: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub where_document: Option<Metadata>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            top_k: None,
            r#where: None,
            where_document: None,
        }
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn with_where(mut self, filter: Metadata) -> Self {
        self.r#where = Some(filter);
        self
    }

    pub fn with_where_document(mut self, filter: Metadata) -> Self {
        self.where_document = Some(filter);
        self
    }
}

/// A single search hit.
///
/// `distance: None` means the backend did not compute a similarity score
/// for this hit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub distance: Option<f64>,
}

/// Response body for search results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}
