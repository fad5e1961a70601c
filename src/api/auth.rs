//! Static API-key check applied to every `/api/v1` route.

use crate::api::AppState;
use axum::{
    Json, async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use serde_json::json;
use subtle::ConstantTimeEq;
use tracing::warn;

/// Header carrying the shared API key.
pub const API_KEY_HEADER: &str = "app-api-key";

/// Proof that the request presented the configured API key.
///
/// Used as a route layer through `middleware::from_extractor_with_state`.
#[derive(Debug, Clone, Copy)]
pub struct ApiKey;

#[async_trait]
impl FromRequestParts<AppState> for ApiKey {
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        match presented {
            Some(key) if key_matches(key, &state.api_key) => Ok(Self),
            Some(_) => {
                warn!(path = %parts.uri.path(), "Wrong API key");
                Err(forbidden())
            }
            None => {
                warn!(path = %parts.uri.path(), "Missing API key");
                Err(forbidden())
            }
        }
    }
}

/// Compares the presented key with the expected one in constant time.
fn key_matches(presented: &str, expected: &str) -> bool {
    bool::from(presented.as_bytes().ct_eq(expected.as_bytes()))
}

fn forbidden() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::FORBIDDEN, Json(json!({ "message": "Forbidden" })))
}
