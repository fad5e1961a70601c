//! History storage - every lookup and write is scoped by the owning wallet.
//!
//! A history is only reachable through `(wallet_id, history_id)`. Writes use
//! `update_many`/`delete_many` filtered on both ids, so a history that was
//! moved away in the meantime is reported as missing rather than overwritten.

use crate::{
    entities::{History, history},
    errors::{Error, Result},
    models::{self, HistoryFields},
};
use sea_orm::{Set, prelude::*};
use tracing::debug;

/// Finds a history by id, but only if `wallet_id` currently owns it.
pub async fn find_history<C>(
    db: &C,
    wallet_id: i64,
    history_id: i64,
) -> Result<Option<models::History>>
where
    C: ConnectionTrait,
{
    let found = History::find()
        .filter(history::Column::WalletId.eq(wallet_id))
        .filter(history::Column::HistoryId.eq(history_id))
        .one(db)
        .await?;
    Ok(found.map(Into::into))
}

/// Inserts a new history owned by `wallet_id`.
pub async fn insert_history<C>(
    db: &C,
    wallet_id: i64,
    fields: &HistoryFields,
) -> Result<models::History>
where
    C: ConnectionTrait,
{
    let history = history::ActiveModel {
        name: Set(fields.name.clone()),
        amount: Set(fields.amount),
        kind: Set(fields.kind),
        history_at: Set(fields.history_at),
        wallet_id: Set(wallet_id),
        ..Default::default()
    };
    let inserted = history.insert(db).await?;
    debug!(
        wallet_id,
        history_id = inserted.history_id,
        "Inserted history"
    );
    Ok(inserted.into())
}

/// Writes every field of `updated`, including its owner, to the row that
/// `wallet_id` currently owns.
///
/// Passing an `updated` whose `wallet_id` differs from `wallet_id` reassigns
/// ownership. Fails with `NotFound` if the row is no longer under `wallet_id`.
pub async fn update_history<C>(
    db: &C,
    wallet_id: i64,
    updated: &models::History,
) -> Result<models::History>
where
    C: ConnectionTrait,
{
    let changes = history::ActiveModel {
        name: Set(updated.name.clone()),
        amount: Set(updated.amount),
        kind: Set(updated.kind),
        history_at: Set(updated.history_at),
        wallet_id: Set(updated.wallet_id),
        ..Default::default()
    };

    let result = History::update_many()
        .set(changes)
        .filter(history::Column::WalletId.eq(wallet_id))
        .filter(history::Column::HistoryId.eq(updated.history_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::history_not_found(updated.history_id));
    }
    Ok(updated.clone())
}

/// Deletes the history if `wallet_id` owns it. Returns whether a row went away.
pub async fn delete_history<C>(db: &C, wallet_id: i64, history_id: i64) -> Result<bool>
where
    C: ConnectionTrait,
{
    let result = History::delete_many()
        .filter(history::Column::WalletId.eq(wallet_id))
        .filter(history::Column::HistoryId.eq(history_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}
