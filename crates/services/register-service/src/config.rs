//! Register service configuration.

use std::env;

use common::{AppResult, DatabaseConfig, JwtConfig};

/// Register service configuration.
///
/// Built once at process start and handed to the collaborators that need it.
#[derive(Debug, Clone, Default)]
pub struct RegisterServiceConfig {
    /// Backing store connection
    pub database: DatabaseConfig,
    /// Token signing
    pub jwt: JwtConfig,
}

impl RegisterServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` takes precedence over the individual `DB_*` variables.
    /// A missing `SIGN_KEY` is not an error here; token issuance reports it.
    pub fn from_env() -> AppResult<Self> {
        let database = match env::var("DATABASE_URL") {
            Ok(url) => DatabaseConfig {
                url,
                ..DatabaseConfig::default()
            },
            Err(_) => DatabaseConfig::from_parts(
                &env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                env::var("DB_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5432),
                &env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
                &env::var("DB_PASS").unwrap_or_default(),
                &env::var("DB_NAME").unwrap_or_else(|_| "customers".to_string()),
            )?,
        };

        let database = DatabaseConfig {
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(database.max_connections),
            ..database
        };

        let jwt = JwtConfig {
            secret: env::var("SIGN_KEY")
                .or_else(|_| env::var("JWT_SECRET"))
                .unwrap_or_default(),
            ..JwtConfig::default()
        };

        if !jwt.has_secret() {
            tracing::warn!("SIGN_KEY is not set, token issuance will fail");
        }

        Ok(Self { database, jwt })
    }
}
