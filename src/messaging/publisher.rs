//! Fire-and-forget publisher for domain events.

use serde::Serialize;
use std::sync::Arc;

use crate::messaging::MessageChannel;

/// Best-effort publisher: every failure becomes `false`, nothing escapes.
///
/// Callers receive a plain boolean with no error detail; whether a `false`
/// matters is the caller's policy decision, not the publisher's.
#[derive(Clone)]
pub struct EventPublisher {
    channel: Arc<dyn MessageChannel>,
}

impl EventPublisher {
    pub fn new(channel: Arc<dyn MessageChannel>) -> Self {
        Self { channel }
    }

    /// Attempt delivery of `payload` to `channel`.
    ///
    /// Returns `false` when the payload is absent (no delivery attempted),
    /// fails to serialize, or the transport rejects it; `true` only when the
    /// channel accepted the message.
    pub async fn publish<T: Serialize + Sync>(&self, channel: &str, payload: Option<&T>) -> bool {
        let Some(payload) = payload else {
            return false;
        };

        let raw = match serde_json::to_string(payload) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(channel, error = %err, "event payload failed to serialize");
                return false;
            }
        };

        match self.channel.send(channel, &raw).await {
            Ok(()) => {
                tracing::debug!(channel, "event delivered");
                true
            }
            Err(err) => {
                tracing::warn!(channel, error = %err, "event delivery failed");
                false
            }
        }
    }
}
