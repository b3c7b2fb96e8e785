//! Error types for the contact service core.
//!
//! One `thiserror` enum per boundary, plus the workflow-facing
//! [`ServiceError`] that callers of the contact operations receive.

use thiserror::Error;

use crate::resilience::{ClassifyFailure, FailureClass, ServiceUnavailable};

/// Errors surfaced by the region service HTTP client.
#[derive(Error, Debug)]
pub enum RegionApiError {
    /// Low-level transport failure: connection refused or host unreachable
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Network timeout
    #[error("request timeout")]
    Timeout,

    /// The remote endpoint rejected the request as malformed
    #[error("bad request: {0}")]
    BadRequest(String),

    /// API returned a non-success status code
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP request failed for another reason
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClassifyFailure for RegionApiError {
    fn classify(&self) -> FailureClass {
        match self {
            RegionApiError::ConnectionFailed(_) => FailureClass::TransientNetwork,
            RegionApiError::BadRequest(_) => FailureClass::ClientRejected,
            _ => FailureClass::Fatal,
        }
    }
}

/// Errors raised by the key-value cache store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The backing store could not be reached
    #[error("cache store unavailable: {0}")]
    Unavailable(String),

    /// A value could not be serialized for storage
    #[error("cache codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Errors raised by the message channel transport.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// The transport could not be reached
    #[error("channel unavailable: {0}")]
    Unavailable(String),

    /// The transport refused the message
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

/// Errors raised by local contact persistence.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Storage could not be reached or failed mid-operation
    #[error("storage failure: {0}")]
    Storage(String),

    /// An insert collided with an existing identifier
    #[error("duplicate contact id {0}")]
    Duplicate(String),

    /// An update targeted an identifier with no stored record
    #[error("no stored contact with id {0}")]
    Missing(String),
}

/// Errors raised when constructing domain values.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A field exceeds the schema's length limit
    #[error("{field} exceeds the maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Failures surfaced to callers of the contact workflows.
///
/// The workflows are a pure translation layer: remote failures are classified
/// and partially absorbed below (see [`crate::resilience`]), absence of a
/// result becomes one of the two not-found kinds here, and everything else
/// passes through unchanged.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The referenced region does not exist, or the remote lookup explicitly
    /// reported no match
    #[error("region not found")]
    RegionNotFound,

    /// No local record for the given identifier
    #[error("contact not found")]
    ContactNotFound,

    /// The region service is unreachable after exhausting retries, or failed
    /// in an unclassified way; displays a fixed generic message while the
    /// original failure stays reachable via `source()`
    #[error(transparent)]
    ServiceUnavailable(#[from] ServiceUnavailable),

    /// The cache store failed; propagated unclassified
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Local persistence failed; propagated unclassified
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A workflow input failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The contact-created event was not delivered and the configured policy
    /// does not ignore delivery failures
    #[error("contact event could not be delivered")]
    EventDeliveryFailed,
}

/// Convenience type alias for Results with RegionApiError
pub type RegionApiResult<T> = Result<T, RegionApiError>;

/// Convenience type alias for Results with CacheError
pub type CacheResult<T> = Result<T, CacheError>;

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
