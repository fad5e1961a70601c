/// History operations, including the cross-wallet move
pub mod history;
/// Re-running write transactions that lost a `SQLite` lock race
pub mod retry;
/// Wallet operations
pub mod wallet;
