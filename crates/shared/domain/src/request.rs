//! Registration request payload.

use serde::Deserialize;

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Incoming registration request.
///
/// Both fields may be omitted and default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationRequest {
    /// Raw CPF as typed by the user (punctuation allowed)
    #[serde(default)]
    pub cpf: String,
    /// Plain text password
    #[serde(default, rename = "pass")]
    pub password: String,
}

impl RegistrationRequest {
    pub fn new(cpf: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into(),
            password: password.into(),
        }
    }

    /// Deserialize a JSON payload.
    pub fn from_json(payload: &[u8]) -> DomainResult<Self> {
        serde_json::from_slice(payload).map_err(|e| DomainError::malformed(e.to_string()))
    }

    /// A request is anonymous only when both fields are exactly empty.
    pub fn is_anonymous(&self) -> bool {
        self.cpf.is_empty() && self.password.is_empty()
    }

    /// Check the password length requirement.
    pub fn has_minimum_password_length(&self) -> bool {
        self.password.len() >= MIN_PASSWORD_LENGTH
    }
}
