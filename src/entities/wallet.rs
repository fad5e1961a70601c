//! Wallet entity - A named account that owns zero or more histories.
//!
//! The balance is not stored in this table; it is derived from
//! the owned histories every time a wallet is read.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Wallet database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wallets")]
pub struct Model {
    /// Unique identifier for the wallet
    #[sea_orm(primary_key)]
    pub wallet_id: i64,
    /// Free-text display name
    pub name: String,
}

/// Defines relationships between Wallet and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One wallet owns many histories
    #[sea_orm(has_many = "super::history::Entity")]
    Histories,
}

impl Related<super::history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Histories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
