use crate::db::connect_with_config;
use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::{Duration, Instant};
use anyhow::Result;

/// Test basic in-memory connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let start = Instant::now();
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    let connection_time = start.elapsed();

    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);

    assert!(connection_time < Duration::from_secs(5),
           "Connection took too long: {:?}", connection_time);
    Ok(())
}

/// Migrations create every table the entities map to
#[tokio::test]
async fn test_migrated_schema_has_tables() -> Result<()> {
    let db = super::setup_test_db().await?;
    for table in ["store", "item", "user", "user_credentials"] {
        let stmt = Statement::from_string(
            DatabaseBackend::Sqlite,
            format!("SELECT count(*) AS n FROM sqlite_master WHERE type = 'table' AND name = '{}'", table),
        );
        let row = db.query_one(stmt).await?.expect("one row");
        let n: i32 = row.try_get("", "n")?;
        assert_eq!(n, 1, "table {} missing", table);
    }
    Ok(())
}

/// Unreachable backends surface as errors instead of hanging
#[tokio::test]
async fn test_connection_failure_is_error() -> Result<()> {
    let cfg = DatabaseConfig {
        url: "sqlite:///nonexistent-dir-for-tests/sub/db.sqlite?mode=ro".to_string(),
        connect_timeout_secs: 1,
        acquire_timeout_secs: 1,
        ..DatabaseConfig::default()
    };
    let result = connect_with_config(&cfg).await;
    assert!(result.is_err());
    Ok(())
}

/// In-memory pools must not reap their only connection
#[test]
fn test_in_memory_pool_keeps_its_connection() {
    let opt = crate::db::connect_options(&DatabaseConfig::in_memory());
    assert_eq!(opt.get_idle_timeout(), Some(crate::db::IN_MEMORY_KEEPALIVE));
    assert_eq!(opt.get_max_lifetime(), Some(crate::db::IN_MEMORY_KEEPALIVE));

    let file = DatabaseConfig { url: "sqlite://data/test.db?mode=rwc".into(), ..DatabaseConfig::default() };
    let opt = crate::db::connect_options(&file);
    assert_eq!(opt.get_idle_timeout(), Some(Duration::from_secs(file.idle_timeout_secs)));
    assert_eq!(opt.get_max_lifetime(), Some(Duration::from_secs(file.max_lifetime_secs)));
}
