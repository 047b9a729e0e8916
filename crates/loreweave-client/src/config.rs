//! Client configuration.
//!
//! Loaded from environment variables with development defaults matching the
//! local storyteller server, so a bare `cargo run` against a local service
//! needs no setup.

/// Connection settings for the storyteller service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL, without a trailing slash (e.g. `http://127.0.0.1:3000`).
    pub base_url: String,
    /// Value for the `X-Api-Key` header on every request.
    pub api_key: String,
}

impl ClientConfig {
    /// Load configuration from the environment.
    ///
    /// - `LOREWEAVE_SERVER_URL` (default `http://127.0.0.1:3000`)
    /// - `LOREWEAVE_API_KEY` (default `my_secret_key`, the local dev key)
    pub fn from_env() -> Self {
        let base_url = std::env::var("LOREWEAVE_SERVER_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3000".to_owned());
        let api_key =
            std::env::var("LOREWEAVE_API_KEY").unwrap_or_else(|_| "my_secret_key".to_owned());
        Self::new(base_url, api_key)
    }

    /// Create a config, normalizing away a trailing slash on the base URL.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_key,
        }
    }
}
