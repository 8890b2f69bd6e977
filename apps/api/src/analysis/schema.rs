//! The machine-checkable output contract sent alongside every analysis
//! prompt. The schema is the single source of truth for field names and
//! types; per-field guidance (cardinalities, date format) rides in
//! `description` text as advisory hints, not hard constraints.
//!
//! Sections not implied by the build option are omitted from the schema
//! entirely — not left as empty properties. This keeps both service
//! cost and response size in check.

use serde_json::{json, Map, Value};

use crate::models::analysis::BuildOption;

/// Builds the response schema for one form submission.
///
/// The dossier header (companyName/industry/employeeCount) is present
/// and required for every option; detail fields and the two list
/// sections appear only when the option requests them.
pub fn analysis_response_schema(option: BuildOption) -> Value {
    let mut properties = Map::new();
    properties.insert(
        "dossier".to_string(),
        dossier_schema(option.wants_dossier_detail()),
    );
    if option.wants_use_cases() {
        properties.insert("useCases".to_string(), use_cases_schema());
    }
    if option.wants_outreach_templates() {
        properties.insert("outreachTemplates".to_string(), outreach_templates_schema());
    }

    json!({
        "type": "OBJECT",
        "properties": Value::Object(properties),
        "required": ["dossier"],
    })
}

fn dossier_schema(include_detail: bool) -> Value {
    let mut properties = Map::new();
    properties.insert(
        "companyName".to_string(),
        json!({ "type": "STRING", "description": "The official name of the company." }),
    );
    properties.insert(
        "industry".to_string(),
        json!({ "type": "STRING", "description": "The primary industry the company operates in." }),
    );
    properties.insert(
        "employeeCount".to_string(),
        json!({ "type": "STRING", "description": "The approximate range of employees (e.g., 1001-5000)." }),
    );

    if include_detail {
        properties.insert(
            "overview".to_string(),
            json!({
                "type": "STRING",
                "description": "A detailed summary of the company's business model, revenue streams, products, customers, and recent performance or news.",
            }),
        );
        properties.insert(
            "keyContacts".to_string(),
            json!({
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "role": { "type": "STRING" },
                        "email": { "type": "STRING" },
                    },
                    "required": ["name", "role", "email"],
                },
                "description": "A list of 3-5 key contacts or executives at the company, including their name, role, and email.",
            }),
        );
        properties.insert(
            "recentNews".to_string(),
            json!({
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "summary": { "type": "STRING" },
                        "date": { "type": "STRING", "description": "Publication date in YYYY-MM-DD format." },
                        "source": { "type": "STRING", "description": "Name of the news source." },
                    },
                    "required": ["title", "summary", "date", "source"],
                },
                "description": "A list of 3-5 recent news articles or events related to the company from the last 12 months.",
            }),
        );
    }

    json!({
        "type": "OBJECT",
        "properties": Value::Object(properties),
        "required": ["companyName", "industry", "employeeCount"],
    })
}

fn use_cases_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING", "description": "A clear, descriptive title for the business use case." },
                "problem": { "type": "STRING", "description": "A summary of the specific business problem or pain point this use case addresses." },
                "solution": { "type": "STRING", "description": "A description of how a solution (e.g., managed Salesforce services) can solve the problem." },
                "businessValue": { "type": "STRING", "description": "The tangible business value or outcomes the company can expect." },
                "salesforceCapability": { "type": "STRING", "description": "The capabilities the proposed solution unlocks." },
                "serviceOfferings": { "type": "STRING", "description": "Relevant service offerings." },
                "successMetrics": { "type": "STRING", "description": "Key metrics to measure success (KPIs, ROI)." },
            },
            "required": [
                "title",
                "problem",
                "solution",
                "businessValue",
                "salesforceCapability",
                "serviceOfferings",
                "successMetrics",
            ],
        },
        "description": "A list of 2-3 relevant business use cases.",
    })
}

fn outreach_templates_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING", "description": "A descriptive title for the outreach template." },
                "channel": { "type": "STRING", "description": "The intended channel, e.g., 'Email' or 'LinkedIn InMail'." },
                "subject": { "type": "STRING", "description": "The subject line for the message." },
                "body": { "type": "STRING", "description": "The full body of the outreach message. Use placeholders like [Contact Name] and [Company Name]." },
            },
            "required": ["title", "channel", "subject", "body"],
        },
        "description": "A list of 2-3 personalized outreach templates.",
    })
}
