// ABOUTME: Test helper utilities for mocking Imgur API responses and server
// ABOUTME: Provides mockito-based helpers for unit testing upload interactions

use mockito::{Server, ServerGuard};
use secrecy::SecretString;
use serde_json::json;

use crate::ImgurClient;

pub async fn mock_imgur_server() -> ServerGuard {
    Server::new_async().await
}

/// Client wired to a mock server, with the credential the mocks expect.
pub fn test_client(base_url: &str) -> ImgurClient {
    ImgurClient::builder()
        .client_id(SecretString::new("test-client-id".to_string().into_boxed_str()))
        .base_url(Some(base_url.to_string()))
        .build()
        .unwrap()
}

pub fn mock_upload_success_response() -> serde_json::Value {
    json!({
        "success": true,
        "status": 200,
        "data": {
            "id": "abc123",
            "title": null,
            "description": null,
            "datetime": 1700000000,
            "type": "image/png",
            "animated": false,
            "width": 640,
            "height": 480,
            "views": 0,
            "bandwidth": 0,
            "deletehash": "d3adb33f",
            "link": "https://i.imgur.com/abc123.png"
        }
    })
}

pub fn mock_upload_failure_response(status: i32) -> serde_json::Value {
    json!({
        "success": false,
        "status": status
    })
}
