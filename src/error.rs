//! Unified error types.

use thiserror::Error;

/// Top-level error returned by adapters and sub-clients.
#[derive(Error, Debug)]
pub enum TickerError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl TickerError {
    /// Status code of the underlying HTTP failure, if any.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            TickerError::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// Status code carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::ServerError { status, .. } => Some(*status),
            HttpError::RateLimited { .. } => Some(429),
            HttpError::Unauthorized => Some(401),
            HttpError::NotFound(_) => Some(404),
            HttpError::BadRequest(_) => Some(400),
            _ => None,
        }
    }
}
