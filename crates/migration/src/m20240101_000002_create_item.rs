//! Create `item` table with FK to `store`.
//!
//! Item names are globally unique; deleting a store removes its items.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(pk_auto(Item::Id))
                    .col(string_len(Item::Name, 80).unique_key().not_null())
                    .col(double(Item::Price).not_null())
                    .col(integer(Item::StoreId).not_null())
                    .col(timestamp_with_time_zone(Item::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Item::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_store")
                            .from(Item::Table, Item::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Item::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Item { Table, Id, Name, Price, StoreId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Store { Table, Id }
