use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Callers only ever see two messages: one for bad input, one for everything upstream.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Biosketch generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Prompt rendering failed: {0}")]
    Prompt(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFields => (StatusCode::BAD_REQUEST, "Missing required fields"),
            // Already logged with the request id where generation failed.
            AppError::Generation(_) | AppError::Prompt(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate biosketch",
            ),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
