use async_trait::async_trait;
use contact_service::error::ChannelError;
use contact_service::MessageChannel;

/// Channel mock that refuses every delivery.
#[allow(dead_code)]
pub struct RejectingChannel;

#[async_trait]
impl MessageChannel for RejectingChannel {
    async fn send(&self, _channel: &str, _payload: &str) -> Result<(), ChannelError> {
        Err(ChannelError::Unavailable("broker down".to_string()))
    }
}
