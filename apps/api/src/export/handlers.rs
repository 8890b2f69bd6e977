//! Axum route handlers for the export API.
//!
//! Each export reads an immutable snapshot of the result the caller
//! already holds — no persistence, no shared state between exports.
//! The docx and pdf bodies are CPU-bound packaging and run under
//! `spawn_blocking`; the packaging must finish before the download
//! response (the caller's save step) is produced.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::export::docx::export_docx;
use crate::export::markdown::export_markdown;
use crate::export::pdf::export_pdf;
use crate::export::ExportFile;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// The form's company name — used for the markdown/docx filename
    /// and document title. The pdf export names itself after the
    /// dossier it requires.
    pub company_name: String,
    pub result: AnalysisResult,
}

/// POST /api/v1/export/markdown
pub async fn handle_export_markdown(
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let file = export_markdown(&request.result, &request.company_name);
    Ok(download_response(file))
}

/// POST /api/v1/export/docx
pub async fn handle_export_docx(Json(request): Json<ExportRequest>) -> Result<Response, AppError> {
    let file = tokio::task::spawn_blocking(move || {
        export_docx(&request.result, &request.company_name)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("docx packaging task failed: {e}")))??;

    Ok(download_response(file))
}

/// POST /api/v1/export/pdf
///
/// With no dossier in the payload there is nothing to name the file
/// after: the export silently does nothing and replies 204.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let config = state.page_config.clone();
    let exported = tokio::task::spawn_blocking(move || export_pdf(&request.result, &config))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("pdf rendering task failed: {e}")))??;

    match exported {
        Some(file) => Ok(download_response(file)),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

fn download_response(file: ExportFile) -> Response {
    (
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.bytes,
    )
        .into_response()
}
