//! Retry of write transactions that hit a locked database.
//!
//! `SQLite` transactions start deferred: two writers can both read, and the
//! one that asks for the write lock second fails at once with
//! `SQLITE_BUSY` instead of waiting. The losing attempt is rolled back
//! and run again from the top, so it re-reads committed state. A history
//! that was moved away in the meantime then resolves as `NotFound`.

use crate::errors::{Error, Result};
use std::{future::Future, time::Duration};
use tracing::warn;

/// Attempts made before a busy error is handed to the caller
const MAX_ATTEMPTS: u32 = 6;

/// Initial retry delay in milliseconds (doubles each retry: 10, 20, 40, 80, 160ms)
const INITIAL_RETRY_DELAY_MS: u64 = 10;

/// Whether `err` means another connection currently holds the lock.
#[must_use]
pub fn is_busy(err: &Error) -> bool {
    let Error::Database(db_err) = err else {
        return false;
    };
    let message = db_err.to_string().to_lowercase();
    message.contains("database is locked")
        || message.contains("database table is locked")
        || message.contains("(code: 5)")
}

/// Runs `operation` and runs it again while it fails with a busy error.
///
/// Every call of `operation` must open and commit its own transaction.
/// An attempt that returns early has already dropped its transaction,
/// which rolls it back, so nothing from a failed attempt is ever visible.
/// Any other error, and a busy error on the last attempt, is returned as is.
pub async fn retry_on_busy<T, F, Fut>(mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Err(err) if is_busy(&err) && attempt + 1 < MAX_ATTEMPTS => {
                let delay = Duration::from_millis(INITIAL_RETRY_DELAY_MS * 2u64.pow(attempt));
                attempt += 1;
                warn!(
                    attempt,
                    max_attempts = MAX_ATTEMPTS,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "Database busy, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            result => return result,
        }
    }
}
