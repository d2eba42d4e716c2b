use serde::{Deserialize, Serialize};

/// Response body for collection statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_documents: u64,
}
