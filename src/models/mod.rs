//! Data structures for contacts, regions, and domain events.

pub mod contact;
pub mod region;

pub use contact::{Contact, ContactCreatedEvent};
pub use region::{RegionEnvelope, RegionSummary};
