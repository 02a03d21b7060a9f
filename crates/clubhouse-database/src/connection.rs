//! Database connection management

use clubhouse_core::{ServiceError, ServiceResult};
use clubhouse_migrations::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub type DbConnection = DatabaseConnection;

/// Connect to the database and bring the schema up to date.
///
/// Migrations run on every connect; they are idempotent, so restarting
/// against an already-migrated database is a no-op. Per-statement sqlx
/// logging is disabled; query problems surface through the error path.
pub async fn establish_connection(database_url: &str) -> ServiceResult<Arc<DbConnection>> {
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    Migrator::up(&db, None)
        .await
        .map_err(|e| ServiceError::Database(e.to_string()))?;

    info!("database connected, schema is current");
    Ok(Arc::new(db))
}
