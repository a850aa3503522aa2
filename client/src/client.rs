//! Stateless request builders for the todo API.
//!
//! # Design
//! `TodoApiClient` holds only the injected transport and carries no mutable
//! state between calls. Each operation builds one `HttpRequest`, executes it
//! through the transport, and returns the outcome unchanged — no retries, no
//! classification, no decoding of the response body. Two concurrent calls
//! may complete in either order; the client imposes no mutual exclusion.

use crate::error::HttpError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::HttpTransport;
use crate::types::Todo;

/// Async client for the kanban todo service.
///
/// A thin pass-through: every method issues exactly one request and hands
/// back whatever the transport reports, success or failure.
#[derive(Debug, Clone)]
pub struct TodoApiClient<T> {
    transport: T,
}

impl<T: HttpTransport> TodoApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn list_all(&self) -> Result<HttpResponse, HttpError> {
        self.transport
            .execute(HttpRequest {
                method: HttpMethod::Get,
                path: "api/todo".to_string(),
                headers: Vec::new(),
                body: None,
            })
            .await
    }

    pub async fn get_by_id(&self, id: u32) -> Result<HttpResponse, HttpError> {
        self.transport
            .execute(HttpRequest {
                method: HttpMethod::Get,
                path: format!("api/todo/{id}"),
                headers: Vec::new(),
                body: None,
            })
            .await
    }

    /// The query lands in the path as given; any escaping is left to the
    /// transport.
    pub async fn search(&self, query: &str) -> Result<HttpResponse, HttpError> {
        self.transport
            .execute(HttpRequest {
                method: HttpMethod::Get,
                path: format!("api/todo/query/{query}"),
                headers: Vec::new(),
                body: None,
            })
            .await
    }

    /// The server assigns the id; whatever id the payload carries is
    /// forwarded untouched.
    pub async fn create(&self, todo: &Todo) -> Result<HttpResponse, HttpError> {
        self.transport
            .execute(HttpRequest {
                method: HttpMethod::Post,
                path: "api/todo".to_string(),
                headers: json_headers(),
                body: Some(json_body(todo)?),
            })
            .await
    }

    /// Advance (`true`) or reverse (`false`) the status of the todo named by
    /// the body's id.
    ///
    /// The path segment is the advance flag coerced to 0/1 — not the todo's
    /// id, which travels only in the body. Kept byte-for-byte compatible
    /// with the deployed consumer; see the README.
    pub async fn update(&self, todo: &Todo, advance: bool) -> Result<HttpResponse, HttpError> {
        self.transport
            .execute(HttpRequest {
                method: HttpMethod::Put,
                path: format!("api/todo/{}", u8::from(advance)),
                headers: json_headers(),
                body: Some(json_body(todo)?),
            })
            .await
    }

    /// Replace the title and description of the todo named by the body's id.
    pub async fn update_content(&self, todo: &Todo) -> Result<HttpResponse, HttpError> {
        self.transport
            .execute(HttpRequest {
                method: HttpMethod::Put,
                path: "api/todo".to_string(),
                headers: json_headers(),
                body: Some(json_body(todo)?),
            })
            .await
    }

    /// The path has no separator before the id (`api/todo7`), matching the
    /// deployed consumer byte-for-byte.
    /// TODO: confirm with the service owners whether `api/todo/{id}` was
    /// intended here.
    pub async fn delete_by_id(&self, id: u32) -> Result<HttpResponse, HttpError> {
        self.transport
            .execute(HttpRequest {
                method: HttpMethod::Delete,
                path: format!("api/todo{id}"),
                headers: Vec::new(),
                body: None,
            })
            .await
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn json_body(todo: &Todo) -> Result<String, HttpError> {
    serde_json::to_string(todo).map_err(|e| HttpError::Serialization(e.to_string()))
}
