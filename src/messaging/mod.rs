//! Best-effort event publication over a named message channel.

mod channel;
mod publisher;

pub use channel::{InMemoryChannel, MessageChannel};
pub use publisher::EventPublisher;
