#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::{connect_with_config, DATABASE_URL};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: DATABASE_URL.clone(),
        max_connections: 5,
        min_connections: 1,
        ..DatabaseConfig::default()
    }
}

/// A connection to the test database, or `None` when database tests are
/// disabled (`SKIP_DB_TESTS`) or no database is configured.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    if std::env::var("DATABASE_URL").is_err() && std::env::var("RESERVATION_MASTER_URL").is_err() {
        eprintln!("skip: DATABASE_URL not set");
        return Ok(None);
    }

    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect_with_config(&db_config()).await?;
            migration::Migrator::up(&db, None).await?;
            drop(db);
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    // Return a fresh connection for the current test's runtime
    let db = connect_with_config(&db_config()).await?;
    Ok(Some(db))
}
