// ABOUTME: Builder pattern implementation for ImgurClient configuration
// ABOUTME: Holds credentials behind secrecy and exposes transport-level knobs

use crate::ImgurClient;
use crate::constants::timeouts;
use crate::error::ImgurError;
use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;
use url::Url;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<ImgurClient, ImgurError>))]
pub struct ImgurClientConfig {
    /// Application credential sent as `Authorization: Client-ID <id>`.
    pub client_id: SecretString,

    /// Secondary API key; when set, requests route through RapidAPI and
    /// carry the `X-RapidAPI-Key` header.
    #[builder(default = None)]
    pub rapidapi_key: Option<SecretString>,

    #[builder(default = timeouts::HTTP_REQUEST_TIMEOUT)]
    pub timeout: Duration,

    #[builder(default = None)]
    pub proxy: Option<reqwest::Proxy>,

    /// Override of the API base URL, used to point at a mock server in tests.
    #[builder(default = None)]
    pub base_url: Option<String>,
}

impl From<ImgurClientConfig> for Result<ImgurClient, ImgurError> {
    fn from(config: ImgurClientConfig) -> Self {
        ImgurClient::from_config(config)
    }
}

impl ImgurClient {
    pub fn builder() -> ImgurClientConfigBuilder<((), (), (), (), ())> {
        ImgurClientConfig::builder()
    }

    pub fn create_proxy(url: &str) -> Result<reqwest::Proxy, ImgurError> {
        let parsed_url = Url::parse(url)
            .map_err(|e| ImgurError::Configuration(format!("Invalid proxy URL: {}", e)))?;

        reqwest::Proxy::all(parsed_url.as_str())
            .map_err(|e| ImgurError::Configuration(format!("Invalid proxy configuration: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::urls;
    use secrecy::SecretString;
    use std::time::Duration;

    fn test_client_id() -> SecretString {
        SecretString::new("test-client-id".to_string().into_boxed_str())
    }

    #[test]
    fn test_builder_with_minimal_config() {
        let client_result = ImgurClient::builder().client_id(test_client_id()).build();

        assert!(client_result.is_ok());
        assert_eq!(client_result.unwrap().base_url(), urls::IMGUR_API_BASE);
    }

    #[test]
    fn test_builder_with_all_options() {
        let client_result = ImgurClient::builder()
            .client_id(test_client_id())
            .rapidapi_key(Some(SecretString::new(
                "rapid-key".to_string().into_boxed_str(),
            )))
            .timeout(Duration::from_secs(60))
            .base_url(Some("http://127.0.0.1:1234".to_string()))
            .build();

        assert!(client_result.is_ok());
        assert_eq!(client_result.unwrap().base_url(), "http://127.0.0.1:1234");
    }

    #[test]
    fn test_rapidapi_key_switches_default_base_url() {
        let client = ImgurClient::builder()
            .client_id(test_client_id())
            .rapidapi_key(Some(SecretString::new(
                "rapid-key".to_string().into_boxed_str(),
            )))
            .build()
            .unwrap();

        assert_eq!(client.base_url(), urls::RAPIDAPI_BASE);
    }

    #[test]
    fn test_config_uses_secrecy_for_credentials() {
        let client_id = test_client_id();
        let debug_str = format!("{:?}", client_id);
        assert!(!debug_str.contains("test-client-id"));
    }

    #[test]
    fn test_builder_validates_proxy_url() {
        let result = ImgurClient::create_proxy("not-a-url");

        assert!(result.is_err());
        match result {
            Err(ImgurError::Configuration(msg)) => {
                assert!(msg.contains("Invalid proxy URL"));
            }
            _ => panic!("Expected configuration error"),
        }
    }

    #[test]
    fn test_builder_with_valid_proxy() {
        let proxy = ImgurClient::create_proxy("http://proxy:8080");
        assert!(proxy.is_ok());

        let client_result = ImgurClient::builder()
            .client_id(test_client_id())
            .proxy(Some(proxy.unwrap()))
            .build();

        assert!(client_result.is_ok());
    }
}
