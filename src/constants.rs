// ABOUTME: Centralized constants for the Imgur SDK
// ABOUTME: Contains API endpoints, timeouts, and rate-limit header names

/// Imgur API URLs
pub mod urls {
    /// Base URL for the public Imgur API
    pub const IMGUR_API_BASE: &str = "https://api.imgur.com";

    /// Base URL when routing through RapidAPI
    pub const RAPIDAPI_BASE: &str = "https://imgur-apiv3.p.rapidapi.com";
}

/// HTTP and request timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default timeout for HTTP requests
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Header names used on requests and parsed from responses
pub mod headers {
    /// Secondary API key header sent when routing through RapidAPI
    pub const RAPIDAPI_KEY: &str = "X-RapidAPI-Key";

    /// Rate-limit quota headers reported by the Imgur API
    pub const RATE_LIMIT_CLIENT_LIMIT: &str = "X-RateLimit-ClientLimit";
    pub const RATE_LIMIT_CLIENT_REMAINING: &str = "X-RateLimit-ClientRemaining";
    pub const RATE_LIMIT_USER_LIMIT: &str = "X-RateLimit-UserLimit";
    pub const RATE_LIMIT_USER_REMAINING: &str = "X-RateLimit-UserRemaining";
    pub const RATE_LIMIT_USER_RESET: &str = "X-RateLimit-UserReset";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_url_constants() {
        assert!(urls::IMGUR_API_BASE.starts_with("https://"));
        assert!(urls::RAPIDAPI_BASE.contains("rapidapi.com"));
    }

    #[test]
    fn test_timeout_constants() {
        assert_eq!(timeouts::HTTP_REQUEST_TIMEOUT, Duration::from_secs(30));
    }

    #[test]
    fn test_header_constants() {
        assert!(headers::RATE_LIMIT_CLIENT_LIMIT.starts_with("X-RateLimit-"));
        assert!(headers::RATE_LIMIT_USER_RESET.starts_with("X-RateLimit-"));
        assert_eq!(headers::RAPIDAPI_KEY, "X-RapidAPI-Key");
    }
}
