//! Wallet endpoints.

use crate::{
    api::{
        AppState,
        extract::{ApiJson, ApiPath},
        schemas::{WalletRequest, WalletResponse, WalletWithHistoriesResponse, WalletsResponse},
    },
    core::wallet,
    errors::Result,
};
use axum::{Json, extract::State, http::StatusCode};

/// `GET /api/v1/wallets`
pub async fn list_wallets(State(state): State<AppState>) -> Result<Json<WalletsResponse>> {
    let wallets = wallet::list_wallets(&state.db).await?;
    Ok(Json(WalletsResponse {
        wallets: wallets.iter().map(WalletResponse::from).collect(),
    }))
}

/// `POST /api/v1/wallets`
pub async fn create_wallet(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<WalletRequest>,
) -> Result<(StatusCode, Json<WalletResponse>)> {
    let created = wallet::create_wallet(&state.db, &request.name).await?;
    Ok((StatusCode::CREATED, Json(WalletResponse::from(&created))))
}

/// `GET /api/v1/wallets/{wallet_id}` - includes the wallet's histories.
pub async fn get_wallet(
    State(state): State<AppState>,
    ApiPath(wallet_id): ApiPath<i64>,
) -> Result<Json<WalletWithHistoriesResponse>> {
    let found = wallet::get_wallet(&state.db, wallet_id).await?;
    Ok(Json(found.into()))
}

/// `PUT /api/v1/wallets/{wallet_id}`
pub async fn update_wallet(
    State(state): State<AppState>,
    ApiPath(wallet_id): ApiPath<i64>,
    ApiJson(request): ApiJson<WalletRequest>,
) -> Result<Json<WalletResponse>> {
    let updated = wallet::update_wallet(&state.db, wallet_id, &request.name).await?;
    Ok(Json(WalletResponse::from(&updated)))
}

/// `DELETE /api/v1/wallets/{wallet_id}`
pub async fn delete_wallet(
    State(state): State<AppState>,
    ApiPath(wallet_id): ApiPath<i64>,
) -> Result<StatusCode> {
    wallet::delete_wallet(&state.db, wallet_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
