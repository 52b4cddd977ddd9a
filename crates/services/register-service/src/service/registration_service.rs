//! Registration service - turns a registration request into a persisted user
//! and a signed access token.
//!
//! Steps run strictly in order (parse, validate, uniqueness check, hash,
//! persist, sign) and the first failure ends the request. A user is persisted
//! at most once, and only after every validation and the hash succeeded.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use common::{AppError, AppResult};
use domain::{cpf, Cpf, DomainError, RegistrationRequest, User, MIN_PASSWORD_LENGTH};

use crate::providers::{Clock, IdGenerator};
use crate::repository::UserRepository;
use crate::security::{CredentialHasher, TokenIssuer};

/// Classified result of one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Success { token: String },
    /// The payload could not be deserialized
    MalformedInput,
    /// Invalid document, short password, or document already registered.
    /// Callers cannot tell these apart.
    InvalidCredentials,
    /// Uniqueness query, insert, hash or signing failed
    StorageFailure,
}

impl From<&AppError> for RegistrationOutcome {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::MalformedInput(_) => RegistrationOutcome::MalformedInput,
            AppError::InvalidCredentials(_) => RegistrationOutcome::InvalidCredentials,
            _ => RegistrationOutcome::StorageFailure,
        }
    }
}

/// Registration entry point for transport adapters.
#[async_trait]
pub trait Registrar: Send + Sync {
    /// Register from a raw JSON payload
    async fn register(&self, payload: &[u8]) -> RegistrationOutcome;
}

/// Registration orchestrator wired to its collaborators through traits.
pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<dyn TokenIssuer>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl RegistrationService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenIssuer>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            clock,
            ids,
        }
    }

    /// Register from an already deserialized request.
    pub async fn register_request(&self, request: RegistrationRequest) -> RegistrationOutcome {
        match self.run(&request).await {
            Ok(token) => RegistrationOutcome::Success { token },
            Err(err) => {
                let document = cpf::mask(&cpf::clean(&request.cpf));
                if err.is_client_error() {
                    warn!(code = err.code(), document = %document, reason = %err, "Registration rejected");
                } else {
                    error!(code = err.code(), document = %document, error = %err, "Registration failed");
                }
                RegistrationOutcome::from(&err)
            }
        }
    }

    async fn run(&self, request: &RegistrationRequest) -> AppResult<String> {
        let user = if request.is_anonymous() {
            User::anonymous(self.ids.next_id(), self.clock.now())
        } else {
            self.registered_user(request).await?
        };

        self.users.insert(&user).await?;

        let token = self.tokens.issue(&user)?;

        info!(user_id = %user.id, anonymous = user.is_anonymous, "User registered");
        Ok(token)
    }

    async fn registered_user(&self, request: &RegistrationRequest) -> AppResult<User> {
        let cpf = Cpf::new(&request.cpf);
        if !cpf.is_valid() {
            return Err(DomainError::InvalidCpf.into());
        }

        if !request.has_minimum_password_length() {
            return Err(DomainError::InvalidPassword(MIN_PASSWORD_LENGTH).into());
        }

        let document = cpf.formatted();
        if self.users.exists_by_document(&document).await? {
            return Err(DomainError::DocumentInUse.into());
        }

        let password_hash = self.hasher.hash(&request.password)?;

        Ok(User::registered(
            self.ids.next_id(),
            document,
            password_hash,
            self.clock.now(),
        ))
    }
}

#[async_trait]
impl Registrar for RegistrationService {
    async fn register(&self, payload: &[u8]) -> RegistrationOutcome {
        match RegistrationRequest::from_json(payload) {
            Ok(request) => self.register_request(request).await,
            Err(err) => {
                warn!(reason = %err, "Error to parse the request body");
                RegistrationOutcome::MalformedInput
            }
        }
    }
}
