use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm_client::GenerationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Wire contract: client input errors are 400 `{ "error": msg }`; upstream
/// failures (PDF parsing, generation) are 500 `{ "error": msg, "details": msg }`
/// with the underlying error's message surfaced as `details`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("PDF extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Extraction(e) => {
                tracing::error!("PDF extraction error: {e}");
                server_error(e.to_string())
            }
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                server_error(e.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                server_error(e.to_string())
            }
        }
    }
}

fn server_error(details: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Failed to process resume",
            "details": details
        })),
    )
        .into_response()
}
