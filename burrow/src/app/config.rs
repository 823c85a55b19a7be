use std::time::Duration;

const API_URL_ENV: &str = "BURROW_API_URL";
const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/posts";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// App-owned configuration shared with features.
#[derive(Debug, Clone)]
pub(crate) struct AppConfig {
    pub(crate) api_base_url: String,
    pub(crate) request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_URL),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment with fallbacks.
    pub(crate) fn from_env() -> Self {
        let api_base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_API_URL));

        Self {
            api_base_url,
            ..Self::default()
        }
    }
}
