use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to parse response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// The only operation that inspects the response status before reading the body.
    #[error("Failed to update document (status {status})")]
    UpdateFailed { status: StatusCode },

    #[error("Tag request rejected (status {status})")]
    TagRequestFailed { status: StatusCode },

    #[error("Invalid content type for upload: {0}")]
    InvalidContentType(String),

    #[error("Failed to read upload file: {0}")]
    Io(#[from] std::io::Error),
}
