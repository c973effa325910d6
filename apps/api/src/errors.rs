use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::error::GenerationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Export error: {0}")]
    Export(#[from] csv::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Generation(err) => generation_response(err),
            AppError::Export(e) => internal_response(e.to_string()),
            AppError::Internal(e) => internal_response(e.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

fn generation_response(err: GenerationError) -> (StatusCode, serde_json::Value) {
    match err {
        GenerationError::InvalidInput => {
            (StatusCode::BAD_REQUEST, json!({ "error": err.to_string() }))
        }
        GenerationError::MissingCredential => {
            (StatusCode::UNAUTHORIZED, json!({ "error": err.to_string() }))
        }
        GenerationError::Upstream { status, .. } => {
            tracing::error!("Inference endpoint failed: {err}");
            // Mirror the provider's status; anything unrepresentable becomes 502.
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, json!({ "error": err.to_string() }))
        }
        GenerationError::CountMismatch { .. } => {
            tracing::error!("{err}");
            (StatusCode::BAD_GATEWAY, json!({ "error": err.to_string() }))
        }
        GenerationError::Internal(message) => internal_response(message),
    }
}

fn internal_response(message: String) -> (StatusCode, serde_json::Value) {
    tracing::error!("Internal error: {message}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "Internal server error",
            "message": message
        }),
    )
}
