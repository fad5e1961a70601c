//! Request and response bodies for the HTTP API.
//!
//! Timestamps go out as RFC 3339 with an explicit `+00:00` offset. Incoming
//! `history_at` values may carry any offset (converted to UTC) or none at all
//! (taken to already be UTC).

use crate::models::{self, HistoryFields, HistoryType};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a request timestamp into UTC.
pub fn parse_history_at(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(aware) = DateTime::parse_from_rfc3339(value) {
        return Ok(aware.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid datetime: {value:?}"))
}

/// Renders a timestamp as e.g. `2023-02-01T01:00:00+00:00`.
#[must_use]
pub fn format_history_at(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

fn serialize_history_at<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_history_at(value))
}

fn deserialize_history_at<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_history_at(&raw).map_err(serde::de::Error::custom)
}

/// A history as seen by API clients.
///
/// The owning wallet is implied by the request path and is not repeated.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    /// Unique identifier
    pub history_id: i64,
    /// Free-text description
    pub name: String,
    /// Positive amount; the direction comes from `type`
    pub amount: i64,
    /// `INCOME` or `OUTCOME`
    #[serde(rename = "type")]
    pub kind: HistoryType,
    /// When the entry happened (UTC)
    #[serde(serialize_with = "serialize_history_at")]
    pub history_at: DateTime<Utc>,
}

impl From<models::History> for HistoryResponse {
    fn from(history: models::History) -> Self {
        Self {
            history_id: history.history_id,
            name: history.name,
            amount: history.amount,
            kind: history.kind,
            history_at: history.history_at,
        }
    }
}

/// Body of `GET /wallets/{wallet_id}/histories`.
#[derive(Debug, Serialize)]
pub struct HistoriesResponse {
    /// Newest `history_at` first
    pub histories: Vec<HistoryResponse>,
}

/// A wallet with its derived balance.
///
/// `balance` is serialized as a plain JSON integer, which may fall outside
/// the `i64` range for very large ledgers.
#[derive(Debug, Clone, Serialize)]
pub struct WalletResponse {
    /// Unique identifier
    pub wallet_id: i64,
    /// Free-text display name
    pub name: String,
    /// Current balance: income minus outcome
    pub balance: i128,
}

impl From<&models::Wallet> for WalletResponse {
    fn from(wallet: &models::Wallet) -> Self {
        Self {
            wallet_id: wallet.wallet_id,
            name: wallet.name.clone(),
            balance: wallet.balance(),
        }
    }
}

/// A wallet together with the histories it owns.
#[derive(Debug, Serialize)]
pub struct WalletWithHistoriesResponse {
    /// Id, name and balance, inlined into the same object
    #[serde(flatten)]
    pub wallet: WalletResponse,
    /// Newest `history_at` first
    pub histories: Vec<HistoryResponse>,
}

impl From<models::Wallet> for WalletWithHistoriesResponse {
    fn from(wallet: models::Wallet) -> Self {
        Self {
            wallet: WalletResponse::from(&wallet),
            histories: wallet.histories.into_iter().map(Into::into).collect(),
        }
    }
}

/// Body of `GET /wallets`.
#[derive(Debug, Serialize)]
pub struct WalletsResponse {
    /// Every wallet, ordered by id; histories are left out
    pub wallets: Vec<WalletResponse>,
}

/// Body of wallet create and rename requests.
#[derive(Debug, Deserialize)]
pub struct WalletRequest {
    /// New display name
    pub name: String,
}

/// Body of history create and update requests.
///
/// Shape checks happen during deserialization (a non-integer amount, an
/// unknown `type` or an unparseable timestamp are rejected there); the
/// positive-amount rule is enforced by the core operation.
#[derive(Debug, Deserialize)]
pub struct HistoryRequest {
    /// Free-text description
    pub name: String,
    /// Must be a positive integer
    pub amount: i64,
    /// `INCOME` or `OUTCOME`
    #[serde(rename = "type")]
    pub kind: HistoryType,
    /// RFC 3339 with any offset, or a naive timestamp taken as UTC
    #[serde(deserialize_with = "deserialize_history_at")]
    pub history_at: DateTime<Utc>,
}

impl From<HistoryRequest> for HistoryFields {
    fn from(request: HistoryRequest) -> Self {
        Self {
            name: request.name,
            amount: request.amount,
            kind: request.kind,
            history_at: request.history_at,
        }
    }
}

/// Body of `POST /wallets/{wallet_id}/histories/{history_id}/move`.
#[derive(Debug, Deserialize)]
pub struct MoveHistoryRequest {
    /// Wallet that will own the history afterwards
    pub destination_id: i64,
}
