use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DbError;
use serde_json::json;
use thiserror::Error;

/// Message for every request the client got wrong in a way we will not explain further.
pub const INVALID_PARAMS: &str = "Invalid params";
/// Message for every server-side failure. Internal detail only goes to the log.
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed path segment or request body. Always the client's fault.
    #[error("Invalid request parameters: {0}")]
    InvalidParams(String),
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// Converts our custom `AppError` into an HTTP response with a `{"message": ...}` body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidParams(reason) => {
                tracing::debug!(%reason, "Rejected request parameters.");
                (StatusCode::BAD_REQUEST, INVALID_PARAMS.to_string())
            }
            AppError::Database(DbError::NotFound(id)) => (
                StatusCode::BAD_REQUEST,
                format!("getAlbumById: Album not found for id {id}"),
            ),
            AppError::Database(DbError::Constraint(reason)) => {
                tracing::warn!(%reason, "Database rejected submitted values.");
                (StatusCode::BAD_REQUEST, INVALID_PARAMS.to_string())
            }
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UNEXPECTED_ERROR.to_string(),
                )
            }
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}
