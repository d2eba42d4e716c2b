//! Shared HTTP transport for the Cache backend.
//!
//! One configured `reqwest::Client` serves every feature call site:
//! ingest, search, document CRUD and stats all go through the same
//! request pipeline (auth header injection, timeout, error
//! classification). The health probe is the single exception to the
//! error contract: it degrades every failure to `false`.

use cachedash_core::{
    DeleteBatchRequest, DocumentResponse, IngestRequest, IngestResponse, SearchRequest,
    SearchResponse, StatsResponse, UpdateRequest,
};
use once_cell::sync::OnceCell;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

const API_KEY_HEADER: &str = "X-API-Key";

static SHARED: OnceCell<ApiClient> = OnceCell::new();

/// Returns the process-wide client, constructing it from the environment
/// on first use. All call sites share this one instance; its configuration
/// is read-only after construction.
pub fn shared() -> ApiResult<&'static ApiClient> {
    SHARED.get_or_try_init(|| ApiClient::new(ClientConfig::from_env()))
}

/// Typed client for the Cache vector-store API.
///
/// Holds no per-call state: concurrent requests share only the immutable
/// configuration and may complete in any order.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    /// Versioned API base, without a trailing slash (e.g. `http://host/api/v1`).
    base_url: String,
    /// Root-level health endpoint, outside the versioned path.
    health_url: Url,
    api_key: Option<HeaderValue>,
}

impl ApiClient {
    /// Builds a client from `config`. Fails with [`ApiError::RequestSetup`]
    /// on an unparseable base URL or an API key that is not a valid header
    /// value; nothing network-related happens here.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let parsed = Url::parse(&config.base_url).map_err(|e| {
            ApiError::RequestSetup(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;

        // The health endpoint lives at the backend root, so strip the
        // versioned path from the configured base for that one call.
        let mut health_url = parsed.clone();
        health_url.set_path("/health");
        health_url.set_query(None);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::RequestSetup(format!("failed to build HTTP client: {e}")))?;

        let api_key = config
            .api_key
            .map(|key| {
                HeaderValue::from_str(&key)
                    .map_err(|e| ApiError::RequestSetup(format!("invalid API key value: {e}")))
            })
            .transpose()?;

        Ok(ApiClient {
            http,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            health_url,
            api_key,
        })
    }

    /// Ingests one text or a batch; the response `id` mirrors the request
    /// shape (scalar in, scalar out; batch in, batch of equal length out).
    pub async fn ingest(&self, request: &IngestRequest) -> ApiResult<IngestResponse> {
        let response = self
            .send(Method::POST, "/ingest", |req| req.json(request))
            .await?;
        decode(response).await
    }

    /// Similarity search over the collection.
    pub async fn search(&self, request: &SearchRequest) -> ApiResult<SearchResponse> {
        let response = self
            .send(Method::POST, "/search", |req| req.json(request))
            .await?;
        decode(response).await
    }

    /// Fetches a single document by id.
    pub async fn get_document(&self, id: &str) -> ApiResult<DocumentResponse> {
        let path = format!("/documents/{id}");
        let response = self.send(Method::GET, &path, |req| req).await?;
        decode(response).await
    }

    /// Updates a document's text and/or metadata. See [`UpdateRequest`] for
    /// the null-vs-omitted `text` semantics.
    pub async fn update_document(
        &self,
        id: &str,
        request: &UpdateRequest,
    ) -> ApiResult<DocumentResponse> {
        let path = format!("/documents/{id}");
        let response = self
            .send(Method::PUT, &path, |req| req.json(request))
            .await?;
        decode(response).await
    }

    /// Deletes a batch of documents by id. The backend decides what an
    /// empty or unknown id list means.
    pub async fn delete_documents(&self, request: &DeleteBatchRequest) -> ApiResult<()> {
        self.send(Method::DELETE, "/documents", |req| req.json(request))
            .await?;
        Ok(())
    }

    /// Collection statistics.
    pub async fn stats(&self) -> ApiResult<StatsResponse> {
        let response = self.send(Method::GET, "/stats", |req| req).await?;
        decode(response).await
    }

    /// Liveness probe against the backend root.
    ///
    /// Returns `true` only when the root `/health` endpoint answers with a
    /// success status and a body whose `status` field is exactly `"ok"`.
    /// Every failure mode (connection refused, timeout, non-2xx, wrong
    /// status value, malformed body) degrades to `false`; this call never
    /// returns an error, by contract, since it exists for yes/no polling.
    pub async fn check_health(&self) -> bool {
        #[derive(Deserialize)]
        struct HealthBody {
            status: String,
        }

        let mut request = self.http.get(self.health_url.clone());
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.clone());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                debug!(error = %e, "health probe got no response");
                return false;
            }
        };
        if !response.status().is_success() {
            debug!(status = response.status().as_u16(), "health probe rejected");
            return false;
        }
        match response.json::<HealthBody>().await {
            Ok(body) => body.status == "ok",
            Err(e) => {
                debug!(error = %e, "health probe body undecodable");
                false
            }
        }
    }

    /// Shared request pipeline: builds `method path` against the versioned
    /// base, injects the API key header when configured, sends, and
    /// classifies any failure. Successful responses pass through unchanged.
    async fn send(
        &self,
        method: Method,
        path: &str,
        customize: impl FnOnce(reqwest::RequestBuilder) -> reqwest::RequestBuilder,
    ) -> ApiResult<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %path, "dispatching request");

        let mut request = self.http.request(method, &url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.clone());
        }
        let request = customize(request);

        let response = request.send().await.map_err(classify_transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Classification is a logging side effect only; the rejection is
        // returned to the caller with status and body intact.
        let code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(match code {
            401 => {
                warn!(status = code, %path, "backend rejected request as unauthorized");
                ApiError::Unauthorized { status: code, body }
            }
            429 => {
                warn!(status = code, %path, "backend rate limited request");
                ApiError::RateLimited { status: code, body }
            }
            _ => {
                error!(status = code, %path, "backend rejected request");
                ApiError::ServerRejected { status: code, body }
            }
        })
    }
}

/// Maps a failure that produced no HTTP response. Builder-stage errors
/// keep their own classification; everything else is unreachable-flavored,
/// with the timeout case marked so callers can tell it apart.
fn classify_transport(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        return ApiError::RequestSetup(err.to_string());
    }
    let timeout = err.is_timeout();
    error!(timeout, error = %err, "no response from backend");
    ApiError::NetworkUnreachable {
        timeout,
        detail: err.to_string(),
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status().as_u16();
    response.json::<T>().await.map_err(|e| {
        error!(status, error = %e, "undecodable response body");
        ApiError::ServerRejected {
            status,
            body: format!("undecodable response body: {e}"),
        }
    })
}
