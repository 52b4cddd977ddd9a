//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request payload could not be deserialized
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The CPF failed cleaning or checksum validation
    #[error("Invalid CPF")]
    InvalidCpf,

    /// The password does not meet the minimum length
    #[error("Password must be at least {0} characters")]
    InvalidPassword(usize),

    /// The CPF is already registered
    #[error("Document already in use")]
    DocumentInUse,
}

impl DomainError {
    /// Create a malformed request error
    pub fn malformed(msg: impl Into<String>) -> Self {
        DomainError::MalformedRequest(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
