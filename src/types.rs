// ABOUTME: Data types for the Imgur SDK: payload kinds, image metadata, rate limits
// ABOUTME: Includes the JSON response wrapper and header-based rate-limit extraction

use std::fmt;
use std::str::FromStr;

use reqwest::header::HeaderMap;
use serde::Deserialize;

use crate::constants::headers::{
    RATE_LIMIT_CLIENT_LIMIT, RATE_LIMIT_CLIENT_REMAINING, RATE_LIMIT_USER_LIMIT,
    RATE_LIMIT_USER_REMAINING, RATE_LIMIT_USER_RESET,
};
use crate::error::ImgurError;

/// Encoding of the submitted image payload.
///
/// Wire values match what the API accepts for the `type` form field:
/// `file`, `base64`, and `URL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    File,
    Base64,
    Url,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::File => "file",
            ImageKind::Base64 => "base64",
            ImageKind::Url => "URL",
        }
    }
}

impl FromStr for ImageKind {
    type Err = ImgurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(ImageKind::File),
            "base64" => Ok(ImageKind::Base64),
            "URL" => Ok(ImageKind::Url),
            other => Err(ImgurError::InvalidKind(other.to_string())),
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quota counters reported via `X-RateLimit-*` response headers.
///
/// Extraction is best-effort: absent or unparsable headers leave the
/// corresponding field at zero and never fail the upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub client_limit: i64,
    pub client_remaining: i64,
    pub user_limit: i64,
    pub user_remaining: i64,
    pub user_reset: i64,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            client_limit: header_i64(headers, RATE_LIMIT_CLIENT_LIMIT),
            client_remaining: header_i64(headers, RATE_LIMIT_CLIENT_REMAINING),
            user_limit: header_i64(headers, RATE_LIMIT_USER_LIMIT),
            user_remaining: header_i64(headers, RATE_LIMIT_USER_REMAINING),
            user_reset: header_i64(headers, RATE_LIMIT_USER_RESET),
        }
    }
}

fn header_i64(headers: &HeaderMap, name: &str) -> i64 {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// Metadata of an uploaded image as reported by the service.
///
/// Unknown response fields are ignored and missing ones default, so older
/// and newer API revisions both decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub datetime: i64,
    #[serde(rename = "type", default)]
    pub image_type: String,
    #[serde(default)]
    pub animated: bool,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub bandwidth: i64,
    #[serde(default)]
    pub deletehash: Option<String>,
    #[serde(default)]
    pub link: String,

    /// Quota snapshot taken from the response headers of the upload call.
    #[serde(skip)]
    pub rate_limit: RateLimit,
}

/// Result of a successful upload: the decoded image plus the status the
/// service reported in the response body.
#[derive(Debug, Clone)]
pub struct UploadResponse {
    pub image: ImageInfo,
    pub status: i32,
}

/// JSON envelope the API wraps every response in.
#[derive(Debug, Deserialize)]
pub(crate) struct ResponseWrapper {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status: i32,
    pub data: Option<ImageInfo>,
}
