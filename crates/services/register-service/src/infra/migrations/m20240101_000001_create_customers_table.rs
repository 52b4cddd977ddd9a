//! Migration: Create the customers table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Customers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Customers::DocumentId).string().null())
                    .col(ColumnDef::new(Customers::DocumentType).integer().not_null())
                    .col(ColumnDef::new(Customers::IsAnonymous).boolean().not_null())
                    .col(ColumnDef::new(Customers::Password).string().null())
                    .col(
                        ColumnDef::new(Customers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Customers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Concurrent registrations of the same document both pass the
        // application-level check; this index is what rejects the second one.
        // NULL documents (anonymous customers) never collide.
        manager
            .create_index(
                Index::create()
                    .name("idx_customers_document_id")
                    .table(Customers::Table)
                    .col(Customers::DocumentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Customers {
    Table,
    Id,
    DocumentId,
    DocumentType,
    IsAnonymous,
    Password,
    CreatedAt,
    UpdatedAt,
}
