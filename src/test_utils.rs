//! Shared test utilities.
//!
//! Helpers for setting up a fresh in-memory database and seeding wallets and
//! histories with sensible defaults.

use crate::{
    config::database::create_tables,
    core::{history, wallet},
    entities::HistoryType,
    errors::Result,
    models::{self, HistoryFields},
};
use chrono::{TimeZone, Utc};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tempfile::TempDir;

/// Pool size of the file-backed test database
const FILE_DB_CONNECTIONS: u32 = 5;

/// Creates an in-memory `SQLite` database with all tables initialized.
///
/// The pool is pinned to a single connection: every connection to
/// `sqlite::memory:` would otherwise see its own empty database.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Creates a file-backed `SQLite` database in a temporary directory, served
/// by a pool of several connections.
///
/// Unlike [`setup_test_db`], transactions here really run side by side. The
/// returned `TempDir` must be kept alive for as long as the database is used.
pub async fn setup_file_test_db() -> Result<(TempDir, DatabaseConnection)> {
    let dir = TempDir::new()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("wallets.db").display());

    let mut options = ConnectOptions::new(url);
    options
        .max_connections(FILE_DB_CONNECTIONS)
        .sqlx_logging(false);
    let db = Database::connect(options).await?;
    create_tables(&db).await?;
    Ok((dir, db))
}

/// Creates a wallet through the core operation.
pub async fn create_test_wallet(db: &DatabaseConnection, name: &str) -> Result<models::Wallet> {
    wallet::create_wallet(db, name).await
}

/// Creates a history dated 2023-02-01 at `hour`:00 UTC.
pub async fn create_test_history(
    db: &DatabaseConnection,
    wallet_id: i64,
    name: &str,
    amount: i64,
    kind: HistoryType,
    hour: u32,
) -> Result<models::History> {
    let fields = HistoryFields {
        name: name.to_string(),
        amount,
        kind,
        history_at: Utc
            .with_ymd_and_hms(2023, 2, 1, hour, 0, 0)
            .single()
            .unwrap_or_default(),
    };
    history::create_history(db, wallet_id, fields).await
}

/// Sets up a database with one wallet. Returns (db, wallet).
pub async fn setup_with_wallet(name: &str) -> Result<(DatabaseConnection, models::Wallet)> {
    let db = setup_test_db().await?;
    let wallet = create_test_wallet(&db, name).await?;
    Ok((db, wallet))
}

/// Sets up the standard two-wallet fixture.
///
/// * `foo` - no histories
/// * `bar` - `ham` (1000 INCOME at 00:00) and `egg` (300 OUTCOME at 01:00),
///   so its balance is 700 and its histories list as `[egg, ham]`
///
/// Both wallets are reloaded after seeding. Returns (db, foo, bar).
pub async fn setup_bar_and_foo() -> Result<(DatabaseConnection, models::Wallet, models::Wallet)> {
    let db = setup_test_db().await?;
    let foo = create_test_wallet(&db, "foo").await?;
    let bar = create_test_wallet(&db, "bar").await?;

    create_test_history(&db, bar.wallet_id, "ham", 1000, HistoryType::Income, 0).await?;
    create_test_history(&db, bar.wallet_id, "egg", 300, HistoryType::Outcome, 1).await?;

    let foo = wallet::get_wallet(&db, foo.wallet_id).await?;
    let bar = wallet::get_wallet(&db, bar.wallet_id).await?;
    Ok((db, foo, bar))
}
