//! Domain values handed out by the storage layer and the core operations.
//!
//! These are plain data, decoupled from the SeaORM row models. A [`Wallet`]
//! is always loaded as a whole aggregate together with the histories it owns,
//! and its balance is computed from them on demand.

use crate::entities::history;
use crate::errors::{Error, Result};
use chrono::{DateTime, Utc};

pub use crate::entities::HistoryType;

/// A single dated income or outcome entry.
///
/// Always owned by exactly one wallet; `wallet_id` only changes through a
/// move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    /// Unique identifier, assigned on insert
    pub history_id: i64,
    /// Free-text description
    pub name: String,
    /// Strictly positive amount; the direction comes from `kind`
    pub amount: i64,
    /// Income or outcome
    pub kind: HistoryType,
    /// When the entry happened (UTC)
    pub history_at: DateTime<Utc>,
    /// Owning wallet
    pub wallet_id: i64,
}

impl History {
    /// Signed contribution of this entry to its wallet's balance.
    ///
    /// Widened to `i128` so that summing any number of entries cannot
    /// overflow.
    #[must_use]
    pub fn signed_amount(&self) -> i128 {
        let amount = i128::from(self.amount);
        match self.kind {
            HistoryType::Income => amount,
            HistoryType::Outcome => -amount,
        }
    }

    /// Overwrites every mutable field, leaving identity and ownership alone.
    pub fn apply(&mut self, fields: HistoryFields) {
        self.name = fields.name;
        self.amount = fields.amount;
        self.kind = fields.kind;
        self.history_at = fields.history_at;
    }
}

impl From<history::Model> for History {
    fn from(model: history::Model) -> Self {
        Self {
            history_id: model.history_id,
            name: model.name,
            amount: model.amount,
            kind: model.kind,
            history_at: model.history_at,
            wallet_id: model.wallet_id,
        }
    }
}

/// The caller-supplied fields of a history, used for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryFields {
    /// Free-text description
    pub name: String,
    /// Must be greater than zero
    pub amount: i64,
    /// Income or outcome
    pub kind: HistoryType,
    /// When the entry happened (UTC)
    pub history_at: DateTime<Utc>,
}

impl HistoryFields {
    /// Rejects out-of-domain values before anything is written.
    ///
    /// Any positive `i64` is accepted; there is no upper bound on a single
    /// amount.
    pub fn validate(&self) -> Result<()> {
        if self.amount <= 0 {
            return Err(Error::InvalidAmount {
                amount: self.amount,
            });
        }
        Ok(())
    }
}

/// A wallet together with every history it currently owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    /// Unique identifier, assigned on insert
    pub wallet_id: i64,
    /// Free-text display name
    pub name: String,
    /// Owned histories, newest `history_at` first
    pub histories: Vec<History>,
}

impl Wallet {
    /// Income minus outcome over the owned histories.
    #[must_use]
    pub fn balance(&self) -> i128 {
        balance(&self.histories)
    }
}

/// Sum of income amounts minus sum of outcome amounts.
///
/// Computed in `i128`: every amount fits in an `i64`, so the sum stays exact
/// even for wallets whose totals exceed `i64::MAX`.
#[must_use]
pub fn balance(histories: &[History]) -> i128 {
    histories.iter().map(History::signed_amount).sum()
}

/// Orders histories newest `history_at` first; ties fall back to the newer id.
pub fn sort_newest_first(histories: &mut [History]) {
    histories.sort_by(|a, b| {
        b.history_at
            .cmp(&a.history_at)
            .then_with(|| b.history_id.cmp(&a.history_id))
    });
}
