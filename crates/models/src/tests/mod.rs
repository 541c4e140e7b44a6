/// Database connection and configuration tests
pub mod db_tests;



use sea_orm::DatabaseConnection;

/// Fresh, migrated in-memory database for one test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    crate::db::connect_and_migrate(&configs::DatabaseConfig::in_memory()).await
}
