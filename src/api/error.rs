//! Maps domain errors onto HTTP responses.

use crate::errors::Error;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use tracing::{error, warn};

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { resource, id } => {
                warn!(%resource, id, "Lookup failed");
                let mut details = Map::new();
                details.insert(resource.to_string(), Value::from(id));
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "Not Found", "details": details })),
                )
                    .into_response()
            }
            Self::InvalidAmount { .. } | Self::Validation { .. } => {
                warn!(error = %self, "Rejected request");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "message": "Unprocessable Entity",
                        "details": self.to_string(),
                    })),
                )
                    .into_response()
            }
            other => {
                error!(error = %other, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}
