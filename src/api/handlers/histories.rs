//! History endpoints, nested under the owning wallet.

use crate::{
    api::{
        AppState,
        extract::{ApiJson, ApiPath},
        schemas::{HistoriesResponse, HistoryRequest, HistoryResponse, MoveHistoryRequest},
    },
    core::history,
    errors::Result,
};
use axum::{Json, extract::State, http::StatusCode};

/// `GET /api/v1/wallets/{wallet_id}/histories`
pub async fn list_histories(
    State(state): State<AppState>,
    ApiPath(wallet_id): ApiPath<i64>,
) -> Result<Json<HistoriesResponse>> {
    let histories = history::list_histories(&state.db, wallet_id).await?;
    Ok(Json(HistoriesResponse {
        histories: histories.into_iter().map(Into::into).collect(),
    }))
}

/// `GET /api/v1/wallets/{wallet_id}/histories/{history_id}`
pub async fn get_history(
    State(state): State<AppState>,
    ApiPath((wallet_id, history_id)): ApiPath<(i64, i64)>,
) -> Result<Json<HistoryResponse>> {
    let found = history::get_history(&state.db, wallet_id, history_id).await?;
    Ok(Json(found.into()))
}

/// `POST /api/v1/wallets/{wallet_id}/histories`
pub async fn create_history(
    State(state): State<AppState>,
    ApiPath(wallet_id): ApiPath<i64>,
    ApiJson(request): ApiJson<HistoryRequest>,
) -> Result<(StatusCode, Json<HistoryResponse>)> {
    let created = history::create_history(&state.db, wallet_id, request.into()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// `PUT /api/v1/wallets/{wallet_id}/histories/{history_id}`
pub async fn update_history(
    State(state): State<AppState>,
    ApiPath((wallet_id, history_id)): ApiPath<(i64, i64)>,
    ApiJson(request): ApiJson<HistoryRequest>,
) -> Result<Json<HistoryResponse>> {
    let updated =
        history::update_history(&state.db, wallet_id, history_id, request.into()).await?;
    Ok(Json(updated.into()))
}

/// `DELETE /api/v1/wallets/{wallet_id}/histories/{history_id}`
pub async fn delete_history(
    State(state): State<AppState>,
    ApiPath((wallet_id, history_id)): ApiPath<(i64, i64)>,
) -> Result<StatusCode> {
    history::delete_history(&state.db, wallet_id, history_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/v1/wallets/{wallet_id}/histories/{history_id}/move`
///
/// After a successful move the history answers 404 under its old wallet.
pub async fn move_history(
    State(state): State<AppState>,
    ApiPath((wallet_id, history_id)): ApiPath<(i64, i64)>,
    ApiJson(request): ApiJson<MoveHistoryRequest>,
) -> Result<Json<HistoryResponse>> {
    let moved =
        history::move_history(&state.db, wallet_id, history_id, request.destination_id).await?;
    Ok(Json(moved.into()))
}
