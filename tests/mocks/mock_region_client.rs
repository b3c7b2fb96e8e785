use async_trait::async_trait;
use contact_service::error::{RegionApiError, RegionApiResult};
use contact_service::models::{RegionEnvelope, RegionSummary};
use contact_service::AsyncRegionClient;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Failure the mock should produce before serving lookups.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum ScriptedFailure {
    /// Transport-level connection failure (retryable)
    Connection,
    /// HTTP 400 (explicit rejection)
    BadRequest,
    /// HTTP 503 (unclassified remote failure)
    ServerError,
}

/// Mock region client for testing.
///
/// Serves registered regions as successful envelopes and unknown lookups as
/// `success: false` envelopes, optionally failing a scripted number of calls
/// first. Tracks the total number of calls for retry assertions.
#[allow(dead_code)]
pub struct MockRegionClient {
    regions: Mutex<Vec<RegionSummary>>,
    script: Mutex<Option<(ScriptedFailure, usize)>>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockRegionClient {
    pub fn new() -> Self {
        Self {
            regions: Mutex::new(Vec::new()),
            script: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Register a region served by both lookup styles.
    pub fn add_region(&self, id: &str, area_code: &str) {
        let mut regions = self.regions.lock().unwrap();
        regions.push(RegionSummary {
            id: id.to_string(),
            area_code: area_code.to_string(),
        });
    }

    /// Fail the next `times` calls with `failure` before serving lookups.
    /// Pass `usize::MAX` to fail forever.
    pub fn fail_with(&self, failure: ScriptedFailure, times: usize) {
        let mut script = self.script.lock().unwrap();
        *script = Some((failure, times));
    }

    /// Total number of lookup calls, including failed attempts.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_failure(&self) -> Option<RegionApiError> {
        let mut script = self.script.lock().unwrap();
        if let Some((failure, remaining)) = script.as_mut() {
            if *remaining > 0 {
                *remaining -= 1;
                return Some(match failure {
                    ScriptedFailure::Connection => {
                        RegionApiError::ConnectionFailed("connection refused".to_string())
                    }
                    ScriptedFailure::BadRequest => {
                        RegionApiError::BadRequest("malformed request".to_string())
                    }
                    ScriptedFailure::ServerError => RegionApiError::Api {
                        status: 503,
                        message: "service unavailable".to_string(),
                    },
                });
            }
        }
        None
    }

    fn envelope_for(&self, region: Option<RegionSummary>) -> RegionEnvelope {
        match region {
            Some(region) => RegionEnvelope {
                success: true,
                error: None,
                data: Some(region),
            },
            None => RegionEnvelope {
                success: false,
                error: Some("region not registered".to_string()),
                data: None,
            },
        }
    }
}

impl Default for MockRegionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncRegionClient for MockRegionClient {
    async fn get_region(&self, id: &str) -> RegionApiResult<RegionEnvelope> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = self.next_failure() {
            return Err(failure);
        }

        let regions = self.regions.lock().unwrap();
        let region = regions.iter().find(|r| r.id == id).cloned();
        Ok(self.envelope_for(region))
    }

    async fn get_region_by_area_code(&self, area_code: &str) -> RegionApiResult<RegionEnvelope> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = self.next_failure() {
            return Err(failure);
        }

        let regions = self.regions.lock().unwrap();
        let region = regions.iter().find(|r| r.area_code == area_code).cloned();
        Ok(self.envelope_for(region))
    }
}
