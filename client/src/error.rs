//! Error type for the todo API client.
//!
//! # Design
//! A single taxonomy: transport/service failure. The client never
//! classifies beyond what the transport reports. `Status` keeps the full
//! response so a caller receiving the failure loses nothing relative to
//! receiving the response itself.

use thiserror::Error;

use crate::http::HttpResponse;

/// Failure outcome of a single request/response exchange.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    /// The request never produced a response: connect failure, timeout,
    /// or a body read that broke mid-stream.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status. Carries the full
    /// response untransformed.
    #[error("HTTP {}: {}", .0.status, .0.body)]
    Status(HttpResponse),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
