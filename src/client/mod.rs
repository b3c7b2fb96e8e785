//! HTTP client for the external region-lookup service.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles URL
//! construction, error mapping into classifiable failures, and envelope
//! parsing for the region API.

mod async_wrapper;
pub use async_wrapper::{AsyncRegionClient, AsyncRegionClientImpl};

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::{RegionApiError, RegionApiResult};
use crate::models::RegionEnvelope;

/// HTTP client for the region service.
///
/// Uses `ureq` for synchronous HTTP requests; async callers go through
/// [`AsyncRegionClient`], which runs requests on the blocking thread pool.
/// The agent timeout is the only overall deadline — the retry layer above
/// adds no timeout of its own.
#[derive(Clone)]
pub struct RegionClient {
    /// Base URL for the region API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl RegionClient {
    /// Create a new RegionClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.region_api_url.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a RegionClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request and parse the response envelope.
    fn get_envelope(&self, path: &str) -> RegionApiResult<RegionEnvelope> {
        let url = self.build_url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e))?;

        let body = response
            .into_string()
            .map_err(|e| RegionApiError::Http(e.to_string()))?;

        serde_json::from_str(&body).map_err(RegionApiError::Json)
    }

    /// Map a ureq error to a RegionApiError.
    fn map_error(&self, error: ureq::Error) -> RegionApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    400 => RegionApiError::BadRequest(message),
                    _ => RegionApiError::Api {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed | ureq::ErrorKind::Dns => {
                    RegionApiError::ConnectionFailed(transport.to_string())
                }
                ureq::ErrorKind::Io => RegionApiError::Timeout,
                _ => RegionApiError::Http(transport.to_string()),
            },
        }
    }

    // ========================= Region Operations =========================

    /// Fetch a region by its identifier.
    pub fn get_region(&self, id: &str) -> RegionApiResult<RegionEnvelope> {
        let path = format!("/regions/{}", urlencoding::encode(id));
        self.get_envelope(&path)
    }

    /// Fetch a region by its telephone area code.
    pub fn get_region_by_area_code(&self, area_code: &str) -> RegionApiResult<RegionEnvelope> {
        let path = format!("/regions/by-area-code/{}", urlencoding::encode(area_code));
        self.get_envelope(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = RegionClient::with_base_url("https://regions.example.com".to_string());

        assert_eq!(
            client.build_url("/regions/R1"),
            "https://regions.example.com/regions/R1"
        );

        assert_eq!(
            client.build_url("regions/R1"),
            "https://regions.example.com/regions/R1"
        );

        let client_with_slash =
            RegionClient::with_base_url("https://regions.example.com/".to_string());

        assert_eq!(
            client_with_slash.build_url("/regions/R1"),
            "https://regions.example.com/regions/R1"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            region_api_url: "https://regions.example.com".to_string(),
            ..Config::default()
        };

        let client = RegionClient::new(&config);
        assert_eq!(client.base_url, "https://regions.example.com");
    }
}
