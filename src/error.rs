use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

pub const MISSING_TOKEN_MESSAGE: &str =
    "Please provide an Authorization header to identify yourself (can be whatever you want)";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Missing Authorization header")]
    MissingToken,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Store(e @ StoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            AppError::Store(e @ StoreError::DuplicateId { .. }) => {
                (StatusCode::CONFLICT, e.to_string())
            }
            AppError::Store(e @ StoreError::InvalidVoteOption(_)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::MissingToken => (StatusCode::FORBIDDEN, MISSING_TOKEN_MESSAGE.to_string()),
        };

        tracing::debug!("Rejected request ({}): {}", status, self);

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
