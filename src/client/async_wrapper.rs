//! Async wrapper around the synchronous RegionClient.
//!
//! Uses `tokio::task::spawn_blocking` to run HTTP operations on a dedicated
//! thread pool, preventing blocking of the async runtime.

use async_trait::async_trait;
use std::sync::Arc;

use crate::client::RegionClient;
use crate::error::{RegionApiError, RegionApiResult};
use crate::models::RegionEnvelope;

/// Async surface of the region service client.
///
/// The trait is the seam the lookup layer depends on, so tests can substitute
/// a scripted client without touching the resilience machinery above it.
#[async_trait]
pub trait AsyncRegionClient: Send + Sync {
    /// Fetch a region by its identifier.
    async fn get_region(&self, id: &str) -> RegionApiResult<RegionEnvelope>;

    /// Fetch a region by its telephone area code.
    async fn get_region_by_area_code(&self, area_code: &str) -> RegionApiResult<RegionEnvelope>;
}

/// Async wrapper around the synchronous [`RegionClient`].
#[derive(Clone)]
pub struct AsyncRegionClientImpl {
    client: Arc<RegionClient>,
}

impl AsyncRegionClientImpl {
    pub fn new(client: RegionClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncRegionClient for AsyncRegionClientImpl {
    async fn get_region(&self, id: &str) -> RegionApiResult<RegionEnvelope> {
        let client = self.client.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.get_region(&id))
            .await
            .map_err(|e| RegionApiError::Http(format!("Task join error: {}", e)))?
    }

    async fn get_region_by_area_code(&self, area_code: &str) -> RegionApiResult<RegionEnvelope> {
        let client = self.client.clone();
        let area_code = area_code.to_string();

        tokio::task::spawn_blocking(move || client.get_region_by_area_code(&area_code))
            .await
            .map_err(|e| RegionApiError::Http(format!("Task join error: {}", e)))?
    }
}
