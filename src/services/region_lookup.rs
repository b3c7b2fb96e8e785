//! Region lookup capability over the resilient invoker.

use std::sync::Arc;

use crate::client::AsyncRegionClient;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{RegionEnvelope, RegionSummary};
use crate::resilience::ResilientInvoker;

/// Fetches regions by id or by area code, routing every remote call through
/// the retry policy.
///
/// Absence in any form — empty invoker result, unsuccessful envelope, or a
/// successful envelope with no payload — surfaces as
/// [`ServiceError::RegionNotFound`]. Stateless; share via clone.
#[derive(Clone)]
pub struct RegionLookup {
    client: Arc<dyn AsyncRegionClient>,
    invoker: Arc<ResilientInvoker>,
}

impl RegionLookup {
    pub fn new(client: Arc<dyn AsyncRegionClient>, invoker: Arc<ResilientInvoker>) -> Self {
        Self { client, invoker }
    }

    /// Resolve a region by its identifier.
    pub async fn get_by_id(&self, id: &str) -> ServiceResult<RegionSummary> {
        let client = self.client.clone();
        let id = id.to_string();

        let envelope = self
            .invoker
            .invoke(move || {
                let client = client.clone();
                let id = id.clone();
                async move { client.get_region(&id).await }
            })
            .await?;

        Self::unwrap_region(envelope)
    }

    /// Resolve a region by its telephone area code.
    pub async fn get_by_area_code(&self, area_code: &str) -> ServiceResult<RegionSummary> {
        let client = self.client.clone();
        let area_code = area_code.to_string();

        let envelope = self
            .invoker
            .invoke(move || {
                let client = client.clone();
                let area_code = area_code.clone();
                async move { client.get_region_by_area_code(&area_code).await }
            })
            .await?;

        Self::unwrap_region(envelope)
    }

    fn unwrap_region(envelope: Option<RegionEnvelope>) -> ServiceResult<RegionSummary> {
        match envelope {
            Some(envelope) if envelope.success => {
                envelope.data.ok_or(ServiceError::RegionNotFound)
            }
            _ => Err(ServiceError::RegionNotFound),
        }
    }
}
