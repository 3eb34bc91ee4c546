//! Directory error model.

use thiserror::Error;

use crate::validation::Violations;

/// Result type used across the directory layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Directory-level error.
///
/// Every failure the directory reports is a precondition failure on caller
/// input (empty key, duplicate key, unknown key). All violations detected in a
/// single call are carried together so callers can render them at once.
///
/// A credential mismatch is never an error: it is a plain `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields failed validation.
    #[error("validation failed: {0}")]
    Validation(Violations),
}

impl DomainError {
    pub fn validation(violations: impl Into<Violations>) -> Self {
        Self::Validation(violations.into())
    }

    /// The violations carried by this error.
    pub fn violations(&self) -> &Violations {
        match self {
            Self::Validation(v) => v,
        }
    }
}
