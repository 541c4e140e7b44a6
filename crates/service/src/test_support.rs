#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::connect_and_migrate;
use configs::DatabaseConfig;

/// Fresh migrated in-memory database; every call is isolated from the others.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}
