//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `BadRequest` get dedicated variants because callers
//! distinguish "the todo does not exist" and "the input was rejected" from
//! other failures. Every other non-success response lands in `Http` with the
//! status code and the server's message.

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server returned 404: the requested todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// The server returned 400 with the given message.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server returned another unexpected status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
