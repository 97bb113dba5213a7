// ABOUTME: Imgur SDK library providing a typed client for the image upload API
// ABOUTME: Builds multipart upload requests and decodes JSON responses with rate limits

use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

pub mod builder;
pub mod constants;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use builder::ImgurClientConfig;
pub use error::ImgurError;
pub use types::{ImageInfo, ImageKind, RateLimit, UploadResponse};

use constants::{headers, urls};
use types::ResponseWrapper;

pub type Result<T> = std::result::Result<T, ImgurError>;

/// Client for the Imgur image upload API.
///
/// Holds the read-only configuration (credentials, HTTP transport, base URL)
/// shared across calls; each upload allocates its own request and result, so
/// the client is safe to share between tasks.
pub struct ImgurClient {
    client: reqwest::Client,
    client_id: SecretString,
    rapidapi_key: Option<SecretString>,
    base_url: String,
}

impl ImgurClient {
    /// Create a client with default transport settings. Use [`ImgurClient::builder`]
    /// for timeouts, proxies, or RapidAPI routing.
    pub fn new(client_id: impl Into<String>) -> Result<Self> {
        Self::builder()
            .client_id(SecretString::new(client_id.into().into_boxed_str()))
            .build()
    }

    pub(crate) fn from_config(config: ImgurClientConfig) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder().timeout(config.timeout);
        if let Some(proxy) = config.proxy {
            client_builder = client_builder.proxy(proxy);
        }
        let client = client_builder
            .build()
            .map_err(|e| ImgurError::Configuration(e.to_string()))?;

        let base_url = config.base_url.unwrap_or_else(|| {
            if config.rapidapi_key.is_some() {
                urls::RAPIDAPI_BASE.to_string()
            } else {
                urls::IMGUR_API_BASE.to_string()
            }
        });

        Ok(Self {
            client,
            client_id: config.client_id,
            rapidapi_key: config.rapidapi_key,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, resource: &str) -> String {
        format!("{}/3/{}", self.base_url.trim_end_matches('/'), resource)
    }

    /// Upload an image to imgur.
    ///
    /// `image` can be a binary file, base64 data, or a URL for an image (up to
    /// 10MB); `kind` names which of those it is (`file`, `base64`, or `URL`).
    /// `album`, `title`, and `description` are optional and omitted from the
    /// form when absent or empty. For anonymous albums, `album` should be the
    /// deletehash returned at album creation.
    ///
    /// Returns the decoded image info (with a rate-limit snapshot from the
    /// response headers) and the status the service reported.
    pub async fn upload_image(
        &self,
        image: &[u8],
        album: Option<&str>,
        kind: &str,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<UploadResponse> {
        if image.is_empty() {
            return Err(ImgurError::InvalidImage);
        }
        let kind: ImageKind = kind.parse()?;

        let form = build_upload_form(image, album, kind, title, description);
        let url = self.api_url("image");
        debug!(%url, "posting image upload");

        let mut request = self
            .client
            .post(&url)
            .header(
                AUTHORIZATION,
                format!("Client-ID {}", self.client_id.expose_secret()),
            )
            .multipart(form);
        if let Some(key) = &self.rapidapi_key {
            request = request.header(headers::RAPIDAPI_KEY, key.expose_secret());
        }

        let response = request.send().await.map_err(|e| ImgurError::Request {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let response_headers = response.headers().clone();
        let body = response.text().await.map_err(|e| ImgurError::Request {
            url: url.clone(),
            message: e.to_string(),
        })?;
        debug!(bytes = body.len(), "received upload response");

        let wrapper: ResponseWrapper =
            serde_json::from_str(&body).map_err(|e| ImgurError::Decode {
                message: e.to_string(),
                body,
            })?;

        if !wrapper.success {
            return Err(ImgurError::UploadFailed {
                status: wrapper.status,
            });
        }

        let mut image_info = wrapper.data.unwrap_or_default();
        // Best-effort: garbled quota headers never fail a completed upload.
        image_info.rate_limit = RateLimit::from_headers(&response_headers);

        Ok(UploadResponse {
            image: image_info,
            status: wrapper.status,
        })
    }

    /// Upload a file given by `path` to imgur.
    ///
    /// Reads the whole file into memory and delegates to [`upload_image`]
    /// with kind `file`.
    ///
    /// [`upload_image`]: ImgurClient::upload_image
    pub async fn upload_image_from_file(
        &self,
        path: &str,
        album: Option<&str>,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<UploadResponse> {
        info!(path, "uploading image from file");
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ImgurError::File {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        self.upload_image(&bytes, album, ImageKind::File.as_str(), title, description)
            .await
    }
}

fn build_upload_form(
    image: &[u8],
    album: Option<&str>,
    kind: ImageKind,
    title: Option<&str>,
    description: Option<&str>,
) -> Form {
    // The API accepts the payload both as a file part and as a bare field;
    // the live service needs both, so keep the duplication. The bare field is
    // built from the raw bytes as well: binary payloads are not valid UTF-8
    // and must reach the wire unaltered.
    let file_part = Part::bytes(image.to_vec()).file_name("image");
    let mut form = Form::new()
        .part("image", file_part)
        .part("image", Part::bytes(image.to_vec()))
        .text("type", kind.as_str());

    for (name, value) in [
        ("album", album),
        ("title", title),
        ("description", description),
    ] {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            form = form.text(name, value.to_string());
        }
    }

    form
}
