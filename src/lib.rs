//! Contact Service Core - the resilient orchestration layer of a
//! contact-management service.
//!
//! This library coordinates three collaborators around the contact record:
//! an external region-lookup HTTP service (called with bounded retry and
//! failure classification), a key-value cache consulted before local reads,
//! and a message channel that receives contact-created events on a
//! best-effort basis.
//!
//! # Architecture
//!
//! - **models**: Data structures for contacts, regions, and domain events
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **resilience**: Bounded-retry invoker with failure classification
//! - **client**: HTTP client for the region service
//! - **cache**: Cache-aside read path and the store boundary beneath it
//! - **messaging**: Best-effort event publication
//! - **repositories**: Local persistence boundary
//! - **services**: The contact workflows composing all of the above

// Re-export commonly used types
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod messaging;
pub mod models;
pub mod repositories;
pub mod resilience;
pub mod services;

pub use cache::{CacheAside, CacheStore, MemoryCacheStore};
pub use client::{AsyncRegionClient, AsyncRegionClientImpl, RegionClient};
pub use config::Config;
pub use error::{
    CacheError, ChannelError, ConfigError, RegionApiError, RepositoryError, ServiceError,
    ValidationError,
};
pub use messaging::{EventPublisher, InMemoryChannel, MessageChannel};
pub use models::{Contact, ContactCreatedEvent, RegionEnvelope, RegionSummary};
pub use repositories::{ContactRepository, MemoryContactRepository};
pub use resilience::{ClassifyFailure, FailureClass, ResilientInvoker, ServiceUnavailable};
pub use services::{ContactService, ContactServiceImpl, RegionLookup};
