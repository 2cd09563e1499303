use sea_orm_migration::prelude::*;

use crate::m20240601_000001_create_document::Document;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing scans one collection in insertion order
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_document_collection_seq")
                    .table(Document::Table)
                    .col(Document::Collection)
                    .col(Document::Seq)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_document_collection_seq")
                    .table(Document::Table)
                    .to_owned(),
            )
            .await
    }
}
