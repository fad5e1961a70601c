use std::fmt;
use thiserror::Error;

/// The kind of record a lookup failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// A wallet, addressed by `wallet_id`
    Wallet,
    /// A history entry, addressed by `history_id` under its owning wallet
    History,
}

impl Resource {
    /// Lower-case name used in logs and error payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wallet => "wallet",
            Self::History => "history",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the ledger service.
#[derive(Debug, Error)]
pub enum Error {
    /// The referenced wallet or history does not exist (under the addressed wallet).
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Which kind of record was missing
        resource: Resource,
        /// The id that failed to resolve
        id: i64,
    },

    /// History amounts must be strictly positive.
    #[error("Invalid amount: {amount} (must be a positive integer)")]
    InvalidAmount {
        /// The rejected amount
        amount: i64,
    },

    /// Malformed or out-of-domain request input.
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable reason
        message: String,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable reason
        message: String,
    },

    /// Underlying persistence failure.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure, e.g. binding the listener.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a missing wallet.
    #[must_use]
    pub const fn wallet_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: Resource::Wallet,
            id,
        }
    }

    /// Shorthand for a history that does not resolve under the addressed wallet.
    #[must_use]
    pub const fn history_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: Resource::History,
            id,
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
