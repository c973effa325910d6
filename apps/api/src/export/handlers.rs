use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::export::records_to_csv;

/// Same shape as the generate response, so clients can post it back as-is.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub result: Vec<Value>,
}

/// POST /api/export
///
/// Returns the records as a `test-cases.csv` attachment.
pub async fn handle_export_csv(Json(request): Json<ExportRequest>) -> Result<Response, AppError> {
    let csv = records_to_csv(&request.result)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"test-cases.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
