mod counting_repository;
mod mock_message_channel;
mod mock_region_client;

pub use counting_repository::CountingRepository;
pub use mock_message_channel::RejectingChannel;
pub use mock_region_client::{MockRegionClient, ScriptedFailure};
