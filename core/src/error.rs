//! Error types for the birthday API client and admin controller.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a delete racing another delete
//! is the common way to hit it. All other non-2xx responses land in `Http`
//! with the raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `BirthdayClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// The request never produced an HTTP response (connection refused, DNS,
/// broken body stream, ...).
#[derive(Debug, Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// Failure of a `BirthdayAdmin` operation after it has been logged and, where
/// the policy says so, reported to the view.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
