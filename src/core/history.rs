//! History business logic - entries addressed through the wallet that owns them.
//!
//! A history is only reachable as `(wallet_id, history_id)`; existing under a
//! different wallet does not satisfy a lookup. `move_history` is the one
//! operation that changes ownership, and it does so inside a single
//! transaction: the history is either still under its old wallet or already
//! under the destination, never in between.

use crate::{
    core::retry::retry_on_busy,
    db,
    errors::{Error, Result},
    models::{History, HistoryFields},
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, instrument};

/// Returns the histories of a wallet, newest `history_at` first.
///
/// Fails with `NotFound` if the wallet does not exist; an existing wallet
/// without histories yields an empty list.
#[instrument(skip(db))]
pub async fn list_histories(db: &DatabaseConnection, wallet_id: i64) -> Result<Vec<History>> {
    let txn = db.begin().await?;
    let wallet = db::find_wallet(&txn, wallet_id)
        .await?
        .ok_or(Error::wallet_not_found(wallet_id))?;
    txn.commit().await?;
    Ok(wallet.histories)
}

/// Returns one history if `wallet_id` currently owns it.
///
/// A history that exists under another wallet is reported as `NotFound`,
/// exactly like one that does not exist at all.
#[instrument(skip(db))]
pub async fn get_history(
    db: &DatabaseConnection,
    wallet_id: i64,
    history_id: i64,
) -> Result<History> {
    let txn = db.begin().await?;
    let history = db::find_history(&txn, wallet_id, history_id)
        .await?
        .ok_or(Error::history_not_found(history_id))?;
    txn.commit().await?;
    Ok(history)
}

/// Adds a new history to an existing wallet.
///
/// The amount is validated before the transaction starts, so a rejected
/// request never touches storage.
#[instrument(skip(db, fields))]
pub async fn create_history(
    db: &DatabaseConnection,
    wallet_id: i64,
    fields: HistoryFields,
) -> Result<History> {
    fields.validate()?;

    let history = retry_on_busy(|| insert_new_history(db, wallet_id, &fields)).await?;

    info!(wallet_id, history_id = history.history_id, "History created");
    Ok(history)
}

async fn insert_new_history(
    db: &DatabaseConnection,
    wallet_id: i64,
    fields: &HistoryFields,
) -> Result<History> {
    let txn = db.begin().await?;
    if db::find_wallet(&txn, wallet_id).await?.is_none() {
        return Err(Error::wallet_not_found(wallet_id));
    }
    let history = db::insert_history(&txn, wallet_id, fields).await?;
    txn.commit().await?;
    Ok(history)
}

/// Overwrites name, amount, type and `history_at`. Ownership is unchanged.
///
/// Fails with `NotFound` unless `wallet_id` currently owns the history.
#[instrument(skip(db, fields))]
pub async fn update_history(
    db: &DatabaseConnection,
    wallet_id: i64,
    history_id: i64,
    fields: HistoryFields,
) -> Result<History> {
    fields.validate()?;

    let history =
        retry_on_busy(|| overwrite_history(db, wallet_id, history_id, &fields)).await?;

    info!(wallet_id, history_id, "History updated");
    Ok(history)
}

async fn overwrite_history(
    db: &DatabaseConnection,
    wallet_id: i64,
    history_id: i64,
    fields: &HistoryFields,
) -> Result<History> {
    let txn = db.begin().await?;
    let mut history = db::find_history(&txn, wallet_id, history_id)
        .await?
        .ok_or(Error::history_not_found(history_id))?;
    history.apply(fields.clone());
    let history = db::update_history(&txn, wallet_id, &history).await?;
    txn.commit().await?;
    Ok(history)
}

/// Removes a history if `wallet_id` owns it; otherwise does nothing.
#[instrument(skip(db))]
pub async fn delete_history(db: &DatabaseConnection, wallet_id: i64, history_id: i64) -> Result<()> {
    let removed = retry_on_busy(|| remove_history(db, wallet_id, history_id)).await?;

    if removed {
        info!(wallet_id, history_id, "History deleted");
    } else {
        debug!(wallet_id, history_id, "No history to delete");
    }
    Ok(())
}

async fn remove_history(db: &DatabaseConnection, wallet_id: i64, history_id: i64) -> Result<bool> {
    let txn = db.begin().await?;
    let removed = db::delete_history(&txn, wallet_id, history_id).await?;
    txn.commit().await?;
    Ok(removed)
}

/// Reassigns a history from `wallet_id` to `destination_id`.
///
/// Fails with `NotFound` for the history if `wallet_id` does not own it, and
/// with `NotFound` for the wallet if the destination does not exist. In both
/// cases nothing is written. On success every field other than `wallet_id`
/// is unchanged, and the history is no longer reachable under `wallet_id`.
///
/// Of two concurrent moves of the same history exactly one succeeds. The
/// other either loses the lock race and is re-run against the committed
/// state, or finds no row left under `wallet_id`; both end in `NotFound`.
#[instrument(skip(db))]
pub async fn move_history(
    db: &DatabaseConnection,
    wallet_id: i64,
    history_id: i64,
    destination_id: i64,
) -> Result<History> {
    let history =
        retry_on_busy(|| reassign_history(db, wallet_id, history_id, destination_id)).await?;

    info!(
        history_id,
        from = wallet_id,
        to = destination_id,
        "History moved"
    );
    Ok(history)
}

async fn reassign_history(
    db: &DatabaseConnection,
    wallet_id: i64,
    history_id: i64,
    destination_id: i64,
) -> Result<History> {
    let txn = db.begin().await?;

    let mut history = db::find_history(&txn, wallet_id, history_id)
        .await?
        .ok_or(Error::history_not_found(history_id))?;

    let destination = db::find_wallet(&txn, destination_id)
        .await?
        .ok_or(Error::wallet_not_found(destination_id))?;

    history.wallet_id = destination.wallet_id;
    // Scoped on the old owner: a concurrent mover that got here first leaves
    // zero matching rows and this update fails with NotFound.
    let history = db::update_history(&txn, wallet_id, &history).await?;
    txn.commit().await?;
    Ok(history)
}
