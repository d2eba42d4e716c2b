pub mod document;
pub mod ingest;
pub mod metadata;
pub mod search;
pub mod stats;

// Re-export key types for easier use
pub use document::{DeleteBatchRequest, DocumentResponse, UpdateRequest};
pub use ingest::{IngestRequest, IngestResponse, OneOrMany};
pub use metadata::Metadata;
pub use search::{SearchRequest, SearchResponse, SearchResult};
pub use stats::StatsResponse;
