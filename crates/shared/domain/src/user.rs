//! User domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Registered customer.
///
/// Built only through [`User::anonymous`] or [`User::registered`], so that
/// `is_anonymous` holds exactly when both `document` and `password_hash` are
/// empty. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: Uuid,
    /// Formatted CPF, empty for anonymous users
    pub document: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_anonymous: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a user with no document and no password
    pub fn anonymous(id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id,
            document: String::new(),
            password_hash: String::new(),
            is_anonymous: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a user from a validated document and a password hash
    pub fn registered(
        id: Uuid,
        document: String,
        password_hash: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            document,
            password_hash,
            is_anonymous: false,
            created_at: now,
            updated_at: now,
        }
    }
}
