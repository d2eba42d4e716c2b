use serde_json::{Map, Value};

/// Type alias for the open-ended metadata mapping attached to documents.
///
/// The backend defines the schema; the client transmits whatever
/// string-keyed values the caller provides and never validates them.
pub type Metadata = Map<String, Value>;
