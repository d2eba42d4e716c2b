use thiserror::Error;

/// The main result type for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Classified failures surfaced to feature call sites.
///
/// Classification is observational: the transport layer logs the failure
/// and returns it unchanged. Recovery policy (retry, user message, no-op)
/// belongs to the caller; the client never retries or re-authenticates.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP 401: invalid or missing credential.
    #[error("unauthorized (HTTP {status}): {body}")]
    Unauthorized { status: u16, body: String },

    /// HTTP 429: the caller must back off; no automatic retry happens here.
    #[error("rate limited (HTTP {status}): {body}")]
    RateLimited { status: u16, body: String },

    /// Any other non-success HTTP status with a response body.
    #[error("backend rejected request (HTTP {status}): {body}")]
    ServerRejected { status: u16, body: String },

    /// No HTTP response was received: connection refused, DNS failure,
    /// or the request timed out. Carries no status by construction so
    /// callers can tell "backend said no" apart from "backend unreachable".
    #[error("backend unreachable (timeout: {timeout}): {detail}")]
    NetworkUnreachable { timeout: bool, detail: String },

    /// The request could not be built or dispatched (bad base URL,
    /// invalid header value). Fails before any response exists.
    #[error("request setup failed: {0}")]
    RequestSetup(String),
}

impl ApiError {
    /// HTTP status code, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status, .. }
            | ApiError::RateLimited { status, .. }
            | ApiError::ServerRejected { status, .. } => Some(*status),
            ApiError::NetworkUnreachable { .. } | ApiError::RequestSetup(_) => None,
        }
    }

    /// Response body, when a response was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { body, .. }
            | ApiError::RateLimited { body, .. }
            | ApiError::ServerRejected { body, .. } => Some(body),
            ApiError::NetworkUnreachable { .. } | ApiError::RequestSetup(_) => None,
        }
    }

    /// True when the failure was the 10 s request timeout elapsing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::NetworkUnreachable { timeout: true, .. })
    }
}
