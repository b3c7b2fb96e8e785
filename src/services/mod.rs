//! Business workflows: region lookups and contact orchestration.

mod contact_service;
mod region_lookup;

pub use contact_service::{ContactService, ContactServiceImpl};
pub use region_lookup::RegionLookup;
