//! Async API client for the kanban todo service.
//!
//! # Overview
//! `TodoApiClient` translates in-process calls into outbound HTTP requests
//! and hands back the raw response. It decodes nothing: callers receive the
//! full `HttpResponse` (status, headers, body) on success and the original
//! transport failure otherwise.
//!
//! # Design
//! - The transport is injected at construction (`HttpTransport` trait), so
//!   tests can substitute doubles without global mutation.
//! - Requests are described as plain data (`HttpRequest`) with
//!   service-relative paths; the transport resolves them against its base
//!   URL and performs the actual I/O.
//! - Two wire quirks of the deployed consumer are reproduced byte-for-byte
//!   rather than silently fixed: `update` routes by the advance flag (0/1)
//!   instead of the todo id, and `delete_by_id` omits the `/` before the
//!   id. See the README before changing either.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::TodoApiClient;
pub use error::HttpError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::{Todo, TodoStatus};
