//! Company analysis generation — one completion call per submission.
//!
//! Flow: build prompt + output schema → single LLM call → decode the
//! reply as an `AnalysisResult`. No retries and no partial-result
//! salvage: the submission either yields a full result or a single
//! wrapped error message.

use tracing::info;

use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::analysis::schema::analysis_response_schema;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::analysis::{AnalysisFormInput, AnalysisResult};

const UNKNOWN_FAILURE_MESSAGE: &str =
    "An unknown error occurred while generating company analysis.";

/// Runs one analysis submission end to end.
///
/// The caller must have validated the company name already — this
/// function assumes a non-blank input and goes straight to the network.
pub async fn generate_company_analysis(
    llm: &LlmClient,
    input: &AnalysisFormInput,
) -> Result<AnalysisResult, AppError> {
    let prompt = build_analysis_prompt(input);
    let schema = analysis_response_schema(input.build_option);

    info!(
        "Generating '{}' analysis for company {:?}",
        input.build_option.label(),
        input.company_name
    );

    let result: AnalysisResult = llm
        .call_json(&prompt, ANALYSIS_SYSTEM, &schema)
        .await
        .map_err(|e| AppError::Analysis(failure_message(&e.to_string())))?;

    info!(
        "Analysis for {:?} complete: dossier={}, use_cases={}, outreach_templates={}",
        input.company_name,
        result.dossier.is_some(),
        result.use_cases.as_ref().map_or(0, Vec::len),
        result.outreach_templates.as_ref().map_or(0, Vec::len),
    );

    Ok(result)
}

/// Collapses any lower-level failure — transport, service error status,
/// empty reply, malformed JSON — into the single user-facing message. A
/// cause with no discoverable text gets the fallback wording instead.
fn failure_message(cause: &str) -> String {
    let cause = cause.trim();
    if cause.is_empty() {
        UNKNOWN_FAILURE_MESSAGE.to_string()
    } else {
        format!("Failed to generate company analysis: {cause}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    #[test]
    fn test_malformed_json_failure_carries_the_wrapped_prefix() {
        let parse_err = serde_json::from_str::<AnalysisResult>("not even json").unwrap_err();
        let message = failure_message(&LlmError::Parse(parse_err).to_string());
        assert!(
            message.starts_with("Failed to generate company analysis:"),
            "got: {message}"
        );
    }

    #[test]
    fn test_api_failure_keeps_the_service_message() {
        let err = LlmError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        };
        let message = failure_message(&err.to_string());
        assert_eq!(
            message,
            "Failed to generate company analysis: API error (status 503): model overloaded"
        );
    }

    #[test]
    fn test_empty_reply_is_still_a_wrapped_failure() {
        let message = failure_message(&LlmError::EmptyContent.to_string());
        assert_eq!(
            message,
            "Failed to generate company analysis: LLM returned empty content"
        );
    }

    #[test]
    fn test_blank_cause_falls_back_to_the_unknown_message() {
        assert_eq!(failure_message("  "), UNKNOWN_FAILURE_MESSAGE);
    }
}
