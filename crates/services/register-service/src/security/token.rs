//! Access token issuance.

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use common::{AppError, AppResult, JwtConfig};
use domain::User;

use crate::providers::Clock;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
}

/// Issues signed access tokens for freshly registered users.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> AppResult<String>;
}

/// HS256 JWT issuer.
pub struct JwtIssuer {
    config: JwtConfig,
    clock: Arc<dyn Clock>,
}

impl JwtIssuer {
    pub fn new(config: JwtConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, user: &User) -> AppResult<String> {
        if !self.config.has_secret() {
            return Err(AppError::MissingSigningKey);
        }

        let now = self.clock.now();
        let expires_at = now + Duration::hours(self.config.expiration_hours);

        let claims = Claims {
            sub: user.id,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret_bytes()),
        )?;

        Ok(token)
    }
}
