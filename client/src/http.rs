//! HTTP requests and responses as plain data.
//!
//! # Design
//! `TodoApiClient` describes each request as an `HttpRequest` value and
//! hands it to the transport; the transport answers with an `HttpResponse`
//! carrying status, headers, and body verbatim. Keeping both sides as plain
//! data lets unit tests inspect exactly what was issued without touching
//! the network.
//!
//! Paths are service-relative (`api/todo/...`). Resolving them against a
//! base URL is the transport's job.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoApiClient` operations and executed by an `HttpTransport`.
/// `path` is relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response carried back to the caller untransformed.
///
/// The client never decodes `body`; extracting the payload is the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
