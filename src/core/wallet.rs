//! Wallet business logic - list, read, create, rename and delete wallets.
//!
//! Each operation runs inside one database transaction; writes are retried
//! through [`retry_on_busy`] when they lose a lock race. Returned wallets
//! carry their histories, so `Wallet::balance` is always computed from the
//! rows that were current when the transaction read them.

use crate::{
    core::retry::retry_on_busy,
    db,
    errors::{Error, Result},
    models::Wallet,
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, instrument};

/// Returns every wallet with its histories, ordered by wallet id.
///
/// All wallets are read in one transaction, so the balances form a
/// consistent snapshot.
#[instrument(skip(db))]
pub async fn list_wallets(db: &DatabaseConnection) -> Result<Vec<Wallet>> {
    let txn = db.begin().await?;
    let wallets = db::list_wallets(&txn).await?;
    txn.commit().await?;
    Ok(wallets)
}

/// Returns one wallet with its histories.
///
/// Fails with `NotFound` if no wallet has this id.
#[instrument(skip(db))]
pub async fn get_wallet(db: &DatabaseConnection, wallet_id: i64) -> Result<Wallet> {
    let txn = db.begin().await?;
    let wallet = db::find_wallet(&txn, wallet_id)
        .await?
        .ok_or(Error::wallet_not_found(wallet_id))?;
    txn.commit().await?;
    Ok(wallet)
}

/// Creates an empty wallet (no histories, balance 0).
///
/// The insert runs in its own transaction and is retried if the database is
/// locked by another writer.
#[instrument(skip(db))]
pub async fn create_wallet(db: &DatabaseConnection, name: &str) -> Result<Wallet> {
    let wallet = retry_on_busy(|| insert_new_wallet(db, name)).await?;

    info!(wallet_id = wallet.wallet_id, "Wallet created");
    Ok(wallet)
}

async fn insert_new_wallet(db: &DatabaseConnection, name: &str) -> Result<Wallet> {
    let txn = db.begin().await?;
    let wallet = db::insert_wallet(&txn, name).await?;
    txn.commit().await?;
    Ok(wallet)
}

/// Renames a wallet. Its histories, and so its balance, are unchanged.
///
/// Fails with `NotFound` if the wallet does not exist.
#[instrument(skip(db))]
pub async fn update_wallet(db: &DatabaseConnection, wallet_id: i64, name: &str) -> Result<Wallet> {
    let wallet = retry_on_busy(|| rename_wallet(db, wallet_id, name)).await?;

    info!(wallet_id, "Wallet renamed");
    Ok(wallet)
}

async fn rename_wallet(db: &DatabaseConnection, wallet_id: i64, name: &str) -> Result<Wallet> {
    let txn = db.begin().await?;

    let mut wallet = db::find_wallet(&txn, wallet_id)
        .await?
        .ok_or(Error::wallet_not_found(wallet_id))?;
    wallet.name = name.to_string();
    db::update_wallet(&txn, &wallet).await?;

    txn.commit().await?;
    Ok(wallet)
}

/// Deletes a wallet and all of its histories.
///
/// Deleting a wallet that does not exist succeeds without doing anything.
#[instrument(skip(db))]
pub async fn delete_wallet(db: &DatabaseConnection, wallet_id: i64) -> Result<()> {
    match retry_on_busy(|| remove_wallet(db, wallet_id)).await? {
        Some(removed) => info!(wallet_id, histories_removed = removed, "Wallet deleted"),
        None => debug!(wallet_id, "No wallet to delete"),
    }
    Ok(())
}

/// Returns the number of histories removed, or `None` if there was no wallet.
async fn remove_wallet(db: &DatabaseConnection, wallet_id: i64) -> Result<Option<u64>> {
    let txn = db.begin().await?;

    if db::find_wallet(&txn, wallet_id).await?.is_none() {
        return Ok(None);
    }
    let removed = db::delete_wallet(&txn, wallet_id).await?;

    txn.commit().await?;
    Ok(Some(removed))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::history;
    use crate::entities::{History, HistoryColumn, HistoryType};
    use crate::test_utils::*;
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    #[tokio::test]
    async fn test_create_wallet_starts_empty() -> Result<()> {
        let db = setup_test_db().await?;

        let wallet = create_wallet(&db, "foo").await?;

        assert_eq!(wallet.name, "foo");
        assert!(wallet.histories.is_empty());
        assert_eq!(wallet.balance(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_wallet_derives_balance() -> Result<()> {
        let (db, _foo, bar) = setup_bar_and_foo().await?;

        let wallet = get_wallet(&db, bar.wallet_id).await?;

        assert_eq!(wallet.name, "bar");
        assert_eq!(wallet.histories.len(), 2);
        assert_eq!(wallet.balance(), 700);
        Ok(())
    }

    #[tokio::test]
    async fn test_balance_recomputed_after_history_changes() -> Result<()> {
        let (db, _foo, bar) = setup_bar_and_foo().await?;

        create_test_history(&db, bar.wallet_id, "spam", 400, HistoryType::Outcome, 2).await?;
        assert_eq!(get_wallet(&db, bar.wallet_id).await?.balance(), 300);

        let ham = bar.histories.iter().find(|h| h.name == "ham").unwrap();
        history::delete_history(&db, bar.wallet_id, ham.history_id).await?;
        assert_eq!(get_wallet(&db, bar.wallet_id).await?.balance(), -700);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_wallet_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = get_wallet(&db, 999).await;
        assert!(matches!(result, Err(Error::NotFound { id: 999, .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_wallets_includes_balances() -> Result<()> {
        let (db, foo, bar) = setup_bar_and_foo().await?;

        let wallets = list_wallets(&db).await?;

        assert_eq!(wallets.len(), 2);
        let listed_foo = wallets.iter().find(|w| w.wallet_id == foo.wallet_id).unwrap();
        let listed_bar = wallets.iter().find(|w| w.wallet_id == bar.wallet_id).unwrap();
        assert_eq!(listed_foo.balance(), 0);
        assert_eq!(listed_bar.balance(), 700);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_wallets_empty() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(list_wallets(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_update_wallet_renames_only() -> Result<()> {
        let (db, _foo, bar) = setup_bar_and_foo().await?;

        let renamed = update_wallet(&db, bar.wallet_id, "baz").await?;
        assert_eq!(renamed.name, "baz");
        assert_eq!(renamed.histories.len(), 2);
        assert_eq!(renamed.balance(), 700);

        let reloaded = get_wallet(&db, bar.wallet_id).await?;
        assert_eq!(reloaded.name, "baz");
        assert_eq!(reloaded.histories, bar.histories);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_wallet_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = update_wallet(&db, 42, "nobody").await;
        assert!(matches!(result, Err(Error::NotFound { id: 42, .. })));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_wallet_cascades_histories() -> Result<()> {
        let (db, foo, bar) = setup_bar_and_foo().await?;
        let history_ids: Vec<i64> = bar.histories.iter().map(|h| h.history_id).collect();

        delete_wallet(&db, bar.wallet_id).await?;

        assert!(matches!(
            get_wallet(&db, bar.wallet_id).await,
            Err(Error::NotFound { .. })
        ));
        for history_id in history_ids {
            assert!(matches!(
                history::get_history(&db, bar.wallet_id, history_id).await,
                Err(Error::NotFound { .. })
            ));
        }
        let orphans = History::find()
            .filter(HistoryColumn::WalletId.eq(bar.wallet_id))
            .count(&db)
            .await?;
        assert_eq!(orphans, 0);

        // Unrelated wallets survive
        assert_eq!(get_wallet(&db, foo.wallet_id).await?.name, "foo");
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_absent_wallet_is_noop() -> Result<()> {
        let (db, _foo, _bar) = setup_bar_and_foo().await?;
        let before = list_wallets(&db).await?;

        delete_wallet(&db, 999).await?;

        assert_eq!(list_wallets(&db).await?, before);
        assert!(matches!(
            get_wallet(&db, 999).await,
            Err(Error::NotFound { id: 999, .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_balance_of_maximal_amounts() -> Result<()> {
        let (db, wallet) = setup_with_wallet("whale").await?;
        create_test_history(&db, wallet.wallet_id, "a", i64::MAX, HistoryType::Income, 0).await?;
        create_test_history(&db, wallet.wallet_id, "b", i64::MAX, HistoryType::Income, 1).await?;

        let loaded = get_wallet(&db, wallet.wallet_id).await?;
        assert_eq!(loaded.balance(), 2 * i128::from(i64::MAX));

        let listed = list_wallets(&db).await?;
        assert_eq!(listed[0].balance(), 2 * i128::from(i64::MAX));
        Ok(())
    }
}
