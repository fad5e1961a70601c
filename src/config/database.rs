//! Database configuration module.
//!
//! Handles the `SQLite` connection and table creation using `SeaORM`. Tables and
//! indexes are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! structs. Creation is idempotent: existing tables are left untouched.

use crate::config::settings::AppConfig;
use crate::entities::{History, Wallet};
use crate::errors::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

/// Opens a connection pool for the configured database URL.
#[instrument(skip(config), fields(url = %config.database_url))]
pub async fn create_connection(config: &AppConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    debug!("Database connection pool opened");
    Ok(db)
}

/// Creates the `wallets` and `histories` tables plus the owner index if missing.
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut wallet_table = schema.create_table_from_entity(Wallet);
    let mut history_table = schema.create_table_from_entity(History);
    wallet_table.if_not_exists();
    history_table.if_not_exists();

    db.execute(builder.build(&wallet_table)).await?;
    db.execute(builder.build(&history_table)).await?;

    for mut index in schema.create_index_from_entity(History) {
        index.if_not_exists();
        db.execute(builder.build(&index)).await?;
    }

    info!("Database tables ensured");
    Ok(())
}

/// Connects and makes sure the schema exists. Used at process startup.
pub async fn init_database(config: &AppConfig) -> Result<DatabaseConnection> {
    let db = create_connection(config).await?;
    create_tables(&db).await?;
    Ok(db)
}
