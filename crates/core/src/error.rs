//! Domain error model.

use thiserror::Error;

/// Result type used across the quote engine boundaries.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The pricing computation itself is total and never fails; these errors only
/// surface at the edges (dispatching user actions, loading catalogs, reading
/// configuration, running the step transition).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced plan or add-on does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The requested action conflicts with work already in progress.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A configuration value could not be interpreted.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A background task ended before producing its result.
    #[error("interrupted: {0}")]
    Interrupted(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn interrupted(msg: impl Into<String>) -> Self {
        Self::Interrupted(msg.into())
    }
}
