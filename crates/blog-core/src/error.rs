//! Domain-level error types.

use thiserror::Error;

/// Domain errors - the closed set of failures raised by the service and
/// repository layers.
///
/// These are transport agnostic. Only the call handler turns them into a
/// wire status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid input")]
    InvalidInput,

    #[error("post not found")]
    PostNotFound,

    #[error("duplicate post")]
    DuplicatePost,

    /// Catch-all for anything unclassified. Never raised by the service or
    /// repository themselves.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias used across the core.
pub type DomainResult<T> = Result<T, DomainError>;
