//! Request error types

use hyper::StatusCode;
use thiserror::Error;

/// Reasons a request body could not be turned into a device report
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("missing Content-Length header")]
    MissingContentLength,

    #[error("invalid Content-Length header: {0:?}")]
    InvalidContentLength(String),

    #[error("request body of {size} bytes exceeds limit of {limit} bytes")]
    PayloadTooLarge { size: u64, limit: u64 },

    #[error("failed to read request body: {0}")]
    BodyRead(String),

    #[error("request body is not valid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("request body must be a JSON object")]
    NotAnObject,

    #[error("invalid field in request body: {0}")]
    InvalidField(serde_json::Error),
}

impl RequestError {
    /// HTTP status this error is reported with
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
