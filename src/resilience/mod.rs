//! Retry and failure-classification primitives for remote calls.

mod invoker;

pub use invoker::{ClassifyFailure, FailureClass, ResilientInvoker, ServiceUnavailable};
