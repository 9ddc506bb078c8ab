//! Errors returned by `TodoClient`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404: the todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// 400: the server could not use the request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
