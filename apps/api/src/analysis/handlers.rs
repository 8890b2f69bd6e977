//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};

use crate::analysis::generator::generate_company_analysis;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisFormInput, AnalysisResult};
use crate::state::AppState;

/// POST /api/v1/analysis
///
/// Runs one submission: validates the form input, makes the single
/// completion call, and returns the decoded result. The UI is expected
/// to disable resubmission while this request is in flight.
pub async fn handle_generate_analysis(
    State(state): State<AppState>,
    Json(input): Json<AnalysisFormInput>,
) -> Result<Json<AnalysisResult>, AppError> {
    if input.company_name.trim().is_empty() {
        return Err(AppError::Validation("Company Name is required.".to_string()));
    }

    let result = generate_company_analysis(&state.llm, &input).await?;

    Ok(Json(result))
}
