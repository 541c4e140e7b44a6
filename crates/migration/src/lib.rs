//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_store;
mod m20240101_000002_create_item;
mod m20240101_000003_create_user;
mod m20240101_000004_create_user_credentials;
mod m20240101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_store::Migration),
            Box::new(m20240101_000002_create_item::Migration),
            Box::new(m20240101_000003_create_user::Migration),
            Box::new(m20240101_000004_create_user_credentials::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000005_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::Database;

    #[tokio::test]
    async fn up_and_down_on_in_memory_sqlite() -> Result<(), DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in ["store", "item", "user", "user_credentials"] {
            assert!(manager.has_table(table).await?, "missing table {table}");
        }
        assert!(manager.has_index("item", "idx_item_store").await?);

        Migrator::down(&db, None).await?;
        assert!(!manager.has_table("item").await?);
        Ok(())
    }
}
