//! Message channel transport boundary.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::ChannelError;

/// Transport for domain events, addressed by logical channel name.
///
/// Channel names come from configuration; payloads are opaque serialized
/// strings owned by [`EventPublisher`](crate::messaging::EventPublisher).
#[async_trait]
pub trait MessageChannel: Send + Sync {
    /// Deliver `payload` to `channel`.
    async fn send(&self, channel: &str, payload: &str) -> Result<(), ChannelError>;
}

/// In-process channel that records deliveries.
///
/// The reference transport for tests and embedding; cheap to clone, all
/// clones share the same delivery log.
#[derive(Clone, Default)]
pub struct InMemoryChannel {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl InMemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// All deliveries so far as `(channel, payload)` pairs.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }

    /// Payloads delivered to a specific channel.
    pub fn sent_to(&self, channel: &str) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|(name, _)| name == channel)
            .map(|(_, payload)| payload)
            .collect()
    }
}

#[async_trait]
impl MessageChannel for InMemoryChannel {
    async fn send(&self, channel: &str, payload: &str) -> Result<(), ChannelError> {
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| ChannelError::Unavailable("channel lock poisoned".to_string()))?;

        sent.push((channel.to_string(), payload.to_string()));
        Ok(())
    }
}
