//! Bounded-retry wrapper for remote calls.
//!
//! [`ResilientInvoker`] wraps an arbitrary async call with a fixed-delay
//! retry loop. Failures are sorted into three classes: transient network
//! faults are retried a bounded number of times, explicit client rejections
//! become an empty result, and everything else surfaces as the generic
//! [`ServiceUnavailable`] failure.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::config::Config;

/// How a failed remote call should be handled by the invoker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Low-level transport failure worth retrying: connection refused,
    /// host unreachable, or equivalent
    TransientNetwork,

    /// The remote endpoint explicitly rejected the request as malformed;
    /// treated as "nothing found" rather than a failure
    ClientRejected,

    /// Anything else; surfaced as [`ServiceUnavailable`] without retrying
    Fatal,
}

/// Classification hook for errors produced by wrapped calls.
pub trait ClassifyFailure {
    /// Sort this failure into a [`FailureClass`].
    fn classify(&self) -> FailureClass;
}

/// Terminal failure raised when a wrapped remote call cannot be completed.
///
/// Displays a fixed caller-facing message; the classified original failure
/// is retained as the error `source()` for diagnostics but never shown.
#[derive(Error, Debug)]
#[error("An external service is temporarily unavailable.")]
pub struct ServiceUnavailable {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl ServiceUnavailable {
    /// Wrap the original failure, keeping it reachable via `source()`.
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }
}

/// Wraps remote calls with bounded retry and fixed backoff.
///
/// Holds only its policy; the attempt counter lives inside each `invoke`
/// call, so one invoker can be shared across all concurrent workflows.
#[derive(Debug, Clone)]
pub struct ResilientInvoker {
    max_retries: u32,
    retry_delay: Duration,
}

impl ResilientInvoker {
    /// Retries after the first attempt (4 attempts total).
    pub const DEFAULT_MAX_RETRIES: u32 = 3;

    /// Fixed delay between attempts.
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(4000);

    /// Create an invoker with the reference policy.
    pub fn new() -> Self {
        Self::with_policy(Self::DEFAULT_MAX_RETRIES, Self::DEFAULT_RETRY_DELAY)
    }

    /// Create an invoker with an explicit retry policy.
    pub fn with_policy(max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            max_retries,
            retry_delay,
        }
    }

    /// Create an invoker from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_policy(
            config.retry_max_attempts,
            Duration::from_millis(config.retry_delay_ms),
        )
    }

    /// Run `call` until it succeeds, its failure stops being retryable, or
    /// the retries are exhausted.
    ///
    /// Returns `Ok(Some(value))` on success at any attempt, `Ok(None)` when
    /// the remote explicitly rejected the request, and [`ServiceUnavailable`]
    /// for exhausted retries or unclassified failures. The first attempt runs
    /// immediately; the delay applies only between attempts.
    pub async fn invoke<T, E, F, Fut>(&self, call: F) -> Result<Option<T>, ServiceUnavailable>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: ClassifyFailure + std::error::Error + Send + Sync + 'static,
    {
        let mut attempt: u32 = 0;

        loop {
            match call().await {
                Ok(value) => return Ok(Some(value)),
                Err(err) => match err.classify() {
                    FailureClass::TransientNetwork if attempt < self.max_retries => {
                        attempt += 1;
                        tracing::warn!(
                            attempt,
                            max_retries = self.max_retries,
                            error = %err,
                            "transient network failure, retrying after delay"
                        );
                        tokio::time::sleep(self.retry_delay).await;
                    }
                    FailureClass::ClientRejected => {
                        tracing::debug!(error = %err, "remote rejected the request, returning empty result");
                        return Ok(None);
                    }
                    class => {
                        tracing::error!(?class, error = %err, "remote call failed");
                        return Err(ServiceUnavailable::new(err));
                    }
                },
            }
        }
    }
}

impl Default for ResilientInvoker {
    fn default() -> Self {
        Self::new()
    }
}
