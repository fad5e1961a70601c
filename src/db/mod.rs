//! Storage layer - the persistence contract the core operations run against.
//!
//! All functions take any `ConnectionTrait`, which in practice is the
//! transaction opened by the calling operation. Nothing here begins or
//! commits a transaction itself.

pub mod histories;
pub mod wallets;

pub use histories::{delete_history, find_history, insert_history, update_history};
pub use wallets::{delete_wallet, find_wallet, insert_wallet, list_wallets, update_wallet};
