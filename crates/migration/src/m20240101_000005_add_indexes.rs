use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Item: store lookups when rendering a store with its items
        manager
            .create_index(
                Index::create()
                    .name("idx_item_store")
                    .table(Item::Table)
                    .col(Item::StoreId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_item_store").table(Item::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Item { Table, StoreId }
