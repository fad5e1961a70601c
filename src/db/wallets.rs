//! Wallet storage - loads and persists whole wallet aggregates.
//!
//! Every function is generic over `ConnectionTrait` so it runs on the open
//! transaction of the calling operation. Reads always bring the owned
//! histories along so the balance can be derived from them.

use crate::{
    entities::{History, Wallet, history, wallet},
    errors::Result,
    models,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::debug;

fn to_aggregate(wallet: wallet::Model, histories: Vec<history::Model>) -> models::Wallet {
    let mut histories: Vec<models::History> = histories.into_iter().map(Into::into).collect();
    models::sort_newest_first(&mut histories);
    models::Wallet {
        wallet_id: wallet.wallet_id,
        name: wallet.name,
        histories,
    }
}

/// Finds a wallet by id together with its histories.
pub async fn find_wallet<C>(db: &C, wallet_id: i64) -> Result<Option<models::Wallet>>
where
    C: ConnectionTrait,
{
    let Some(wallet) = Wallet::find_by_id(wallet_id).one(db).await? else {
        return Ok(None);
    };

    let histories = wallet
        .find_related(History)
        .order_by_desc(history::Column::HistoryAt)
        .all(db)
        .await?;

    Ok(Some(to_aggregate(wallet, histories)))
}

/// Lists every wallet with its histories, ordered by wallet id.
pub async fn list_wallets<C>(db: &C) -> Result<Vec<models::Wallet>>
where
    C: ConnectionTrait,
{
    let rows = Wallet::find()
        .order_by_asc(wallet::Column::WalletId)
        .find_with_related(History)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(wallet, histories)| to_aggregate(wallet, histories))
        .collect())
}

/// Inserts a new wallet with no histories.
pub async fn insert_wallet<C>(db: &C, name: &str) -> Result<models::Wallet>
where
    C: ConnectionTrait,
{
    let wallet = wallet::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    let inserted = wallet.insert(db).await?;
    debug!(wallet_id = inserted.wallet_id, "Inserted wallet");
    Ok(to_aggregate(inserted, Vec::new()))
}

/// Persists the wallet's name. Owned histories are not touched.
pub async fn update_wallet<C>(db: &C, wallet: &models::Wallet) -> Result<()>
where
    C: ConnectionTrait,
{
    let active = wallet::ActiveModel {
        wallet_id: Set(wallet.wallet_id),
        name: Set(wallet.name.clone()),
    };
    active.update(db).await?;
    Ok(())
}

/// Deletes a wallet and every history it owns.
///
/// The cascade is explicit so that it never depends on the engine's foreign
/// key settings. Returns the number of histories removed.
pub async fn delete_wallet<C>(db: &C, wallet_id: i64) -> Result<u64>
where
    C: ConnectionTrait,
{
    let histories = History::delete_many()
        .filter(history::Column::WalletId.eq(wallet_id))
        .exec(db)
        .await?;

    Wallet::delete_by_id(wallet_id).exec(db).await?;

    debug!(
        wallet_id,
        histories_removed = histories.rows_affected,
        "Deleted wallet"
    );
    Ok(histories.rows_affected)
}
