//! Domain error taxonomy.
//!
//! Every layer below the HTTP boundary reports failures as a [`DomainError`].
//! Each layer either classifies an error it fully understands (the repository
//! turns a unique violation into [`DomainError::Conflict`]) or passes it upward
//! unchanged. Only the web crate turns these into status codes.

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Classified failure, independent of any transport representation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested entity is absent upstream or in storage.
    #[error("{0}")]
    NotFound(String),

    /// The entity already exists (duplicate favorite).
    #[error("{0}")]
    Conflict(String),

    /// A dependency could not be reached or answered with a failure:
    /// catalog transport errors, non-2xx upstream responses, storage pool
    /// exhaustion.
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// Malformed or missing request input.
    #[error("{0}")]
    ValidationFailed(String),

    /// Unclassified storage or runtime failure.
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    /// Short machine-readable name of the error kind, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::UpstreamUnavailable(_) => "upstream_unavailable",
            Self::ValidationFailed(_) => "validation_failed",
            Self::Internal(_) => "internal",
        }
    }
}
