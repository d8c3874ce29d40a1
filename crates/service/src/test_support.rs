#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Schema};
use configs::DatabaseConfig;
use models::db::connect_with_config;
use models::{customer, product, service, vendor};

// Ensure tables are created only once across the entire test process
static PREPARED: OnceCell<()> = OnceCell::const_new();

const TEST_SCHEMA: &str = "wisdom_test";

fn test_config() -> Option<DatabaseConfig> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let url = std::env::var("DATABASE_URL").ok()?;
    let mut cfg = DatabaseConfig::default();
    cfg.url = url;
    cfg.schema = TEST_SCHEMA.into();
    cfg.min_connections = 1;
    cfg.acquire_timeout_secs = 10;
    Some(cfg)
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), sea_orm::DbErr> {
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// A connection to a scratch schema holding the four tables, or `None` when
/// no database is configured (`DATABASE_URL` unset or `SKIP_DB_TESTS` set).
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    let Some(cfg) = test_config() else { return Ok(None) };

    PREPARED
        .get_or_try_init(|| async {
            let db = connect_with_config(&cfg).await?;
            db.execute_unprepared(&format!("CREATE SCHEMA IF NOT EXISTS {TEST_SCHEMA}")).await?;
            // vendors first: products reference it
            create_table(&db, vendor::Entity).await?;
            create_table(&db, product::Entity).await?;
            create_table(&db, service::Entity).await?;
            create_table(&db, customer::Entity).await?;
            drop(db);
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    // Fresh pool for the current test's runtime
    let db = connect_with_config(&cfg).await?;
    Ok(Some(db))
}
