//! Axum route handlers for the Generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::generation::error::GenerationError;
use crate::generation::models::{GenerationRequest, GenerationResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: GenerationResult,
}

/// POST /api/generate
///
/// Validates input, then checks the credential, then runs one generation.
/// A body that does not fit the request contract counts as invalid input.
pub async fn handle_generate(
    State(state): State<AppState>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let Json(request) = body.map_err(|rejection| {
        debug!("Rejected generation body: {rejection}");
        GenerationError::InvalidInput
    })?;

    // Validation must precede the credential check; the service validates
    // again for callers that bypass this handler.
    request.validate()?;

    let generator = state
        .generator
        .as_ref()
        .ok_or(GenerationError::MissingCredential)?;

    let result = generator.generate(&request).await?;

    Ok(Json(GenerateResponse { result }))
}
