//! Customer repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use super::entities::customer::{self, ActiveModel, Entity as CustomerEntity};
use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// The uniqueness check and the insert are separate round-trips with no
/// transaction between them; the unique index on `document_id` is what
/// rejects a concurrent duplicate.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Whether any customer row already carries this formatted document
    async fn exists_by_document(&self, document: &str) -> AppResult<bool>;

    /// Persist a new user
    async fn insert(&self, user: &User) -> AppResult<()>;
}

/// Concrete implementation of UserRepository backed by the `customers` table
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn exists_by_document(&self, document: &str) -> AppResult<bool> {
        let count = CustomerEntity::find()
            .filter(customer::Column::DocumentId.eq(document))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn insert(&self, user: &User) -> AppResult<()> {
        CustomerEntity::insert(ActiveModel::from(user))
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Value};
    use uuid::Uuid;

    use super::*;

    fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::from(count))])
    }

    #[tokio::test]
    async fn test_document_in_use() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(1)]])
            .into_connection();
        let store = UserStore::new(db);

        assert!(store.exists_by_document("218.486.310-65").await.unwrap());
    }

    #[tokio::test]
    async fn test_document_not_in_use() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(0)]])
            .into_connection();
        let store = UserStore::new(db);

        assert!(!store.exists_by_document("218.486.310-65").await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_query_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let store = UserStore::new(db);

        let result = store.exists_by_document("218.486.310-65").await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_insert_registered_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let store = UserStore::new(db);
        let user = User::registered(
            Uuid::new_v4(),
            "218.486.310-65".to_string(),
            "abc123".to_string(),
            Utc::now(),
        );

        store.insert(&user).await.unwrap();

        let log = store.db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("INSERT INTO"));
        assert!(sql.contains("customers"));
    }

    #[tokio::test]
    async fn test_insert_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("duplicate key".to_string())])
            .into_connection();
        let store = UserStore::new(db);

        let result = store
            .insert(&User::anonymous(Uuid::new_v4(), Utc::now()))
            .await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
