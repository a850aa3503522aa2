//! Transport boundary: turns `HttpRequest` values into real network I/O.
//!
//! # Design
//! `HttpTransport` is the seam between `TodoApiClient` and the network.
//! `ReqwestTransport` is the production implementation; tests substitute
//! doubles that record requests and replay canned outcomes. The transport
//! owns all connection-level configuration (base URL, default headers,
//! connection pool) — the client carries none of it.

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;
use url::Url;

use crate::error::HttpError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes a single HTTP round-trip.
///
/// Implementations report exactly one kind of failure: the exchange did not
/// produce a success response. A non-2xx answer is returned as
/// `HttpError::Status` with the full response preserved.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Production transport backed by `reqwest`.
///
/// Explicitly constructed and passed to `TodoApiClient` — there is no
/// process-wide client instance. No timeout is configured here; reqwest's
/// defaults apply unless the caller supplies a preconfigured client via
/// `with_client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, default headers,
    /// proxy settings).
    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = self
            .base_url
            .join(&request.path)
            .map_err(|e| HttpError::Transport(e.to_string()))?;
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        };
        debug!(%method, %url, "executing request");

        let mut builder = self.client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        let response = HttpResponse {
            status: status.as_u16(),
            headers,
            body,
        };
        if status.is_success() {
            Ok(response)
        } else {
            Err(HttpError::Status(response))
        }
    }
}
