//! Unified error handling.
//!
//! Every collaborator of the registration pipeline reports failures as an
//! [`AppError`]. Only three classes are ever visible to clients (malformed
//! input, invalid credentials, internal error); the variants here keep the
//! detail needed for logs.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Invalid document, short password or document already registered.
    /// The reason is for logs only.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "jwt")]
    #[error("Token signing error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Password hash failed: {0}")]
    PasswordHash(String),

    #[error("Signing key is not configured")]
    MissingSigningKey,

    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MalformedInput(_) => "MALFORMED_INPUT",
            AppError::InvalidCredentials(_) => "INVALID_CREDENTIALS",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "TOKEN_ERROR",
            AppError::PasswordHash(_) => "HASH_ERROR",
            AppError::MissingSigningKey => "SIGNING_KEY_MISSING",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::MalformedInput(_) | AppError::InvalidCredentials(_)
        )
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MalformedRequest(msg) => AppError::MalformedInput(msg),
            DomainError::InvalidCpf
            | DomainError::InvalidPassword(_)
            | DomainError::DocumentInUse => AppError::InvalidCredentials(err.to_string()),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::MalformedInput(msg.into())
    }

    pub fn password_hash(msg: impl Into<String>) -> Self {
        AppError::PasswordHash(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
