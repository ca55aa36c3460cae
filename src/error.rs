use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Import schema error: {0}")]
    ImportSchema(String),

    #[error("Import parse error: {0}")]
    ImportParse(#[from] csv::Error),

    #[error("Not found")]
    NotFound,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ImportSchema(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::ImportParse(e) => {
                error!("csv error: {}", e);
                (StatusCode::BAD_REQUEST, format!("CSV error: {}", e))
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
