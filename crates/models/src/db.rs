use std::time::Duration;

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Idle timeout and lifetime for `sqlite::memory:` pools. The database lives
/// only as long as its connection, and sqlx otherwise reaps connections after
/// 10 minutes idle or 30 minutes in total. The pool's maintenance task adds this
/// to `Instant::now()`, so it must stay finite.
pub const IN_MEMORY_KEEPALIVE: Duration = Duration::from_secs(u32::MAX as u64);

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let (idle, lifetime) = if cfg.is_in_memory() {
        (IN_MEMORY_KEEPALIVE, IN_MEMORY_KEEPALIVE)
    } else {
        (Duration::from_secs(cfg.idle_timeout_secs), Duration::from_secs(cfg.max_lifetime_secs))
    };
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(idle)
        .max_lifetime(lifetime)
        .sqlx_logging(cfg.sqlx_logging);
    opt
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    Ok(db)
}

/// Connect and bring the schema up to date.
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!(backend = ?db.get_database_backend(), "database schema migrated");
    Ok(db)
}
