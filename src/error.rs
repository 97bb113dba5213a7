// ABOUTME: Custom error types for the Imgur SDK with caller-facing status codes
// ABOUTME: Covers validation, transport, decode, and service-reported upload failures

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImgurError {
    #[error("Invalid image: payload is empty")]
    InvalidImage,

    #[error("Passed invalid image kind: {0}. Please use file/base64/URL")]
    InvalidKind(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("Problem decoding json result from image upload: {message}. Body: {body}")]
    Decode { message: String, body: String },

    #[error("Upload to imgur failed with status: {status}")]
    UploadFailed { status: i32 },

    #[error("Could not read file {path}: {message}")]
    File { path: String, message: String },
}

impl ImgurError {
    /// Numeric status reported alongside the failure: the decoded status when
    /// the service answered, 500 for local file reads, -1 for everything else.
    pub fn status(&self) -> i32 {
        match self {
            ImgurError::UploadFailed { status } => *status,
            ImgurError::File { .. } => 500,
            _ => -1,
        }
    }

    /// True when the remote service answered but marked the upload unsuccessful.
    pub fn is_service_failure(&self) -> bool {
        matches!(self, ImgurError::UploadFailed { .. })
    }

    /// True when the failure was detected before any network I/O.
    pub fn is_validation(&self) -> bool {
        matches!(self, ImgurError::InvalidImage | ImgurError::InvalidKind(_))
    }
}
