//! Create `document` table.
//!
//! Holds the records of every collection as JSONB bodies.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(string_len(Document::Collection, 64).not_null())
                    .col(string_len(Document::Id, 64).not_null())
                    .col(
                        ColumnDef::new(Document::Seq)
                            .big_integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(json_binary(Document::Body).not_null())
                    .col(timestamp_with_time_zone(Document::InsertedAt).not_null())
                    .primary_key(
                        Index::create()
                            .col(Document::Collection)
                            .col(Document::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Document::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Document { Table, Collection, Id, Seq, Body, InsertedAt }
