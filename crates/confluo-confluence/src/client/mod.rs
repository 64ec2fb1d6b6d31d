//! Confluence REST API client.
//!
//! Sync HTTP client for the Confluence REST API with HTTP Basic
//! authentication (username + API token).

mod attachments;
mod pages;

use std::time::Duration;

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use ureq::Agent;

use crate::config::ConfluenceConfig;
use crate::error::ConfluenceError;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Confluence REST API client.
pub struct ConfluenceClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl ConfluenceClient {
    /// Create a client from connection settings.
    #[must_use]
    pub fn from_config(config: &ConfluenceConfig) -> Self {
        Self::new(&config.base_url, &config.username, &config.api_token)
    }

    /// Create a client from raw connection values.
    ///
    /// # Arguments
    /// * `base_url` - Confluence instance base URL
    /// * `username` - account username (email for Confluence Cloud)
    /// * `api_token` - API token or password
    #[must_use]
    pub fn new(base_url: &str, username: &str, api_token: &str) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        let credentials = BASE64_STANDARD.encode(format!("{username}:{api_token}"));

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth_header: format!("Basic {credentials}"),
        }
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/rest/api", self.base_url)
    }

    /// Read a JSON response body, converting error statuses to
    /// [`ConfluenceError::HttpResponse`] with the body preserved.
    fn read_json<T: serde::de::DeserializeOwned>(
        response: ureq::http::Response<ureq::Body>,
    ) -> Result<T, ConfluenceError> {
        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(ConfluenceError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ConfluenceClient::new("https://confluence.example.com/", "u", "t");
        assert_eq!(client.api_url(), "https://confluence.example.com/rest/api");
    }

    #[test]
    fn test_basic_auth_header() {
        let client = ConfluenceClient::new("https://confluence.example.com", "user", "token");
        // base64("user:token")
        assert_eq!(client.auth_header, "Basic dXNlcjp0b2tlbg==");
    }
}
