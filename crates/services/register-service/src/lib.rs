//! Register Service Library
//!
//! This crate provides the customer registration pipeline: CPF validation,
//! uniqueness check, password hashing, persistence and token issuance.
//! Transport adapters drive it through the [`Registrar`] trait.

pub mod config;
pub mod infra;
pub mod providers;
pub mod repository;
pub mod security;
pub mod service;

use std::sync::Arc;

use sea_orm::DbErr;
use tracing::info;

pub use crate::config::RegisterServiceConfig;
pub use crate::service::{Registrar, RegistrationOutcome, RegistrationService};

use crate::infra::Database;
use crate::providers::{Clock, SystemClock, UuidGenerator};
use crate::repository::UserStore;
use crate::security::{Argon2Hasher, JwtIssuer};

/// Connect to the database (applying pending migrations) and wire the
/// production collaborators.
pub async fn build_service(config: &RegisterServiceConfig) -> Result<RegistrationService, DbErr> {
    let db = Database::connect(&config.database).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    Ok(RegistrationService::new(
        Arc::new(UserStore::new(db.get_connection())),
        Arc::new(Argon2Hasher::new()),
        Arc::new(JwtIssuer::new(config.jwt.clone(), clock.clone())),
        clock,
        Arc::new(UuidGenerator),
    ))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &RegisterServiceConfig,
    action: MigrateAction,
) -> Result<(), DbErr> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
