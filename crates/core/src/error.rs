//! Error model.
//!
//! Split in two: `DomainError` for deterministic validation failures, and
//! `StoreError` for infrastructure failures surfaced through the store
//! contracts. Workflow-level errors (customer missing, stock short) live
//! with the workflow itself, not here.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (malformed input, violated
/// construction invariants). Infrastructure concerns belong in `StoreError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. non-positive quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Infrastructure failure reported by a store implementation.
///
/// Store contracts return this instead of backend-specific error types so
/// the workflow stays decoupled from any particular storage technology.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend could not serve the request (connectivity, poisoned
    /// lock, timeout).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The request conflicted with concurrent state (stale version,
    /// vanished record, negative stock target).
    #[error("store conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
