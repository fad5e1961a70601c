//! History entity - A dated income or outcome entry owned by exactly one wallet.
//!
//! `wallet_id` references `wallets.wallet_id`; the type is stored as the
//! strings `INCOME` / `OUTCOME` in a column literally named `type`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction of a history entry.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(7))")]
#[serde(rename_all = "UPPERCASE")]
pub enum HistoryType {
    /// Money coming into the wallet
    #[sea_orm(string_value = "INCOME")]
    Income,
    /// Money leaving the wallet
    #[sea_orm(string_value = "OUTCOME")]
    Outcome,
}

/// History database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "histories")]
pub struct Model {
    /// Unique identifier for the history entry
    #[sea_orm(primary_key)]
    pub history_id: i64,
    /// Free-text description
    pub name: String,
    /// Strictly positive amount; the sign comes from `kind`
    pub amount: i64,
    /// `INCOME` or `OUTCOME`
    #[sea_orm(column_name = "type")]
    pub kind: HistoryType,
    /// Business timestamp, always UTC
    pub history_at: DateTimeUtc,
    /// Owning wallet
    #[sea_orm(indexed)]
    pub wallet_id: i64,
}

/// Defines relationships between History and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each history belongs to one wallet
    #[sea_orm(
        belongs_to = "super::wallet::Entity",
        from = "Column::WalletId",
        to = "super::wallet::Column::WalletId",
        on_delete = "Cascade"
    )]
    Wallet,
}

impl Related<super::wallet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wallet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
