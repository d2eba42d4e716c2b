//! Client configuration, resolved once from the environment at startup.

use std::env;
use std::time::Duration;

/// Default backend address when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Fixed per-request timeout; requests exceeding it are aborted.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "CACHE_API_URL";

/// Environment variable carrying the optional API key.
pub const API_KEY_ENV: &str = "CACHE_API_KEY";

/// Transport configuration for [`crate::ApiClient`].
///
/// An absent API key is a valid configuration: requests go out
/// unauthenticated and any rejection is left to the backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Reads `CACHE_API_URL` and `CACHE_API_KEY` from the environment,
    /// falling back to the defaults. An empty API key counts as absent.
    pub fn from_env() -> Self {
        let base_url =
            env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        ClientConfig {
            base_url,
            api_key,
            timeout: REQUEST_TIMEOUT,
        }
    }
}
