// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    /// The unique slug index rejected a write. Callers may re-derive the
    /// slug and retry.
    #[error("slug already exists: {0}")]
    DuplicateSlug(String),
    /// The unique username index rejected a write. Signup picks another
    /// candidate and retries.
    #[error("username already exists: {0}")]
    DuplicateUsername(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
