use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::extraction::ExtractionError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to `500 {"error": "<message>"}`. Callers of the analysis
/// endpoint get no taxonomy beyond the message text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing form field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid multipart request: {0}")]
    Multipart(String),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Generation failures carry the collaborator's message through unchanged.
    #[error("{0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingField(_) | AppError::Multipart(_) => {
                tracing::warn!("Rejected analysis request: {self}");
            }
            AppError::Extraction(e) => tracing::error!("Extraction error: {e}"),
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }

        let body = Json(json!({ "error": self.to_string() }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
