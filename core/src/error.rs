//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the server reports exactly one
//! error kind of its own. All other non-2xx responses land in `HttpError` with
//! the raw status code and body for debugging. `Transport` covers failures
//! before any response arrived.

/// Errors returned by `TodoClient` parse methods and `Transport` impls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404; carries the server's message.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, timeout).
    #[error("transport failed: {0}")]
    Transport(String),
}
