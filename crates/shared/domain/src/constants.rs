//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Documents
// =============================================================================

/// Number of digits in a CPF, check digits included
pub const CPF_LENGTH: usize = 11;

/// Discriminator stored with every customer row for the CPF document scheme
pub const DOCUMENT_TYPE_CPF: i32 = 1;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (in bytes)
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Authentication
// =============================================================================

/// Access token lifetime in hours
pub const TOKEN_LIFETIME_HOURS: i64 = 2;
