//! Customer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{User, DOCUMENT_TYPE_CPF};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Formatted CPF (NULL for anonymous customers)
    #[sea_orm(unique)]
    pub document_id: Option<String>,
    pub document_type: i32,
    pub is_anonymous: bool,
    /// Password hash (NULL for anonymous customers)
    pub password: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert domain entity to an insertable active model
impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        let (document_id, password) = if user.is_anonymous {
            (None, None)
        } else {
            (Some(user.document.clone()), Some(user.password_hash.clone()))
        };

        ActiveModel {
            id: Set(user.id),
            document_id: Set(document_id),
            document_type: Set(DOCUMENT_TYPE_CPF),
            is_anonymous: Set(user.is_anonymous),
            password: Set(password),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
    }
}
