use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::kernel::DirectoryError;

/// Errors surfaced by the API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("error communicating with external service")]
    Directory(#[from] DirectoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidParameter(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            ApiError::Directory(err) => {
                // Upstream status codes and bodies stay in the log.
                tracing::error!(error = %err, "external directory request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error communicating with external service".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
