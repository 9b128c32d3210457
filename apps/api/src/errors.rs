use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::contracts::registry::INVALID_SELECTION_MESSAGE;
use crate::llm_client::LlmError;

/// Message returned by `GET /download` when nothing has been saved yet.
pub const MISSING_FILE_MESSAGE: &str = "다운로드할 파일이 없습니다.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Domain failures are reported in-band: HTTP 200 with `{"error": message}`.
/// Only `Internal` maps to a non-2xx status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", INVALID_SELECTION_MESSAGE)]
    InvalidSelection,

    #[error("OpenAI API 호출 실패: {0}")]
    Upstream(#[from] LlmError),

    #[error("{}", MISSING_FILE_MESSAGE)]
    MissingFile,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidSelection | AppError::MissingFile => (StatusCode::OK, self.to_string()),
            AppError::Upstream(e) => {
                tracing::warn!("LLM error: {e}");
                (StatusCode::OK, self.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
