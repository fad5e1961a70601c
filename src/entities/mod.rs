//! Entity module - SeaORM entity definitions for the `wallets` and `histories` tables.
//! Each entity has a Model struct for row data and an Entity struct for queries.

pub mod history;
pub mod wallet;

pub use history::{Column as HistoryColumn, Entity as History, HistoryType, Model as HistoryModel};
pub use wallet::{Column as WalletColumn, Entity as Wallet, Model as WalletModel};
