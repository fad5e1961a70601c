//! HTTP boundary - axum router over the core wallet and history operations.
//!
//! Everything under `/api/v1` requires the `APP-API-KEY` header. Handlers only
//! translate between wire shapes and core calls; domain errors are mapped to
//! status codes in [`error`].

pub mod auth;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod logging;
pub mod schemas;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use self::handlers::{histories, wallets};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool; each core operation opens its own transaction on it
    pub db: DatabaseConnection,
    /// Expected value of the `APP-API-KEY` header
    pub api_key: Arc<str>,
}

impl AppState {
    /// Wraps an open pool and the key requests must present.
    #[must_use]
    pub fn new(db: DatabaseConnection, api_key: &str) -> Self {
        Self {
            db,
            api_key: Arc::from(api_key),
        }
    }
}

/// Builds the full application router.
///
/// `/api/v1/*` sits behind the API-key layer; `/health` does not. Request
/// logging and tracing wrap both.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/wallets",
            get(wallets::list_wallets).post(wallets::create_wallet),
        )
        .route(
            "/wallets/:wallet_id",
            get(wallets::get_wallet)
                .put(wallets::update_wallet)
                .delete(wallets::delete_wallet),
        )
        .route(
            "/wallets/:wallet_id/histories",
            get(histories::list_histories).post(histories::create_history),
        )
        .route(
            "/wallets/:wallet_id/histories/:history_id",
            get(histories::get_history)
                .put(histories::update_history)
                .delete(histories::delete_history),
        )
        .route(
            "/wallets/:wallet_id/histories/:history_id/move",
            post(histories::move_history),
        )
        .route_layer(middleware::from_extractor_with_state::<auth::ApiKey, _>(
            state.clone(),
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1", api)
        .layer(middleware::from_fn(logging::log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
