//! LLM prompt constants for the analysis module.
//! Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::STRICT_JSON_INSTRUCTION;
use crate::models::analysis::{AnalysisFormInput, BuildOption};

/// System prompt for company analysis — sets the persona and research
/// posture; the structured-output contract rides in the request schema.
pub const ANALYSIS_SYSTEM: &str =
    "You are a Senior Strategy Consultant generating an Account Dossier \
    for a target company. Your analysis must be sharp, insightful, and \
    geared towards tangible business outcomes. Conduct fresh and rigorous \
    research, prioritizing sources from the last 12 months.";

/// Analysis prompt template.
/// Replace: {company_name}, {requested_sections}, {strict_json_instruction}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"**Target Company:** {company_name}

**Task:**
Generate a detailed analysis of the company.

Your response MUST ALWAYS include a 'dossier' object containing the company's official name, industry, and employee count range.

Based on the user's request, please generate the following sections:
{requested_sections}

{strict_json_instruction}"#;

/// Bullet list of the sections implied by the build option. The dossier
/// header is not listed — it is demanded unconditionally by the template.
pub fn requested_sections(option: BuildOption) -> String {
    let mut sections = Vec::new();
    if option.wants_dossier_detail() {
        sections.push("- A full 'dossier' including overview, key contacts, and recent news.");
    }
    if option.wants_use_cases() {
        sections.push("- A list of relevant business 'useCases'.");
    }
    if option.wants_outreach_templates() {
        sections.push("- A list of personalized 'outreachTemplates'.");
    }
    sections.join("\n")
}

/// Builds the user-facing task description for one form submission.
pub fn build_analysis_prompt(input: &AnalysisFormInput) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{company_name}", &input.company_name)
        .replace("{requested_sections}", &requested_sections(input.build_option))
        .replace("{strict_json_instruction}", STRICT_JSON_INSTRUCTION)
}
