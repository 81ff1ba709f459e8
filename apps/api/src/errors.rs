use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::recoverer::RecoverError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not recover analysis: {0}")]
    Recovery(#[from] RecoverError),

    #[error("Upstream model error: {0}")]
    Upstream(#[from] LlmError),
}

impl AppError {
    /// Human-readable message returned to the caller.
    pub fn detail(&self) -> String {
        match self {
            AppError::Recovery(RecoverError::Parse(e)) => {
                format!("Failed to parse API response: {e}")
            }
            AppError::Recovery(e @ RecoverError::MalformedResponse) => {
                format!("Error generating trends: {e}")
            }
            AppError::Upstream(e) => format!("Error generating trends: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Recovery(e) => tracing::error!("Response recovery failed: {e}"),
            AppError::Upstream(e) => tracing::error!("LLM error: {e}"),
        }

        let body = Json(json!({ "detail": self.detail() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
