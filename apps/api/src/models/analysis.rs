//! Domain model for a company analysis: the form input, the dossier
//! sections, and the top-level result returned to the UI.
//!
//! Wire forms are camelCase to match what the browser client sends and
//! renders. A result is built fresh per submission and replaced
//! wholesale on the next one — nothing here is mutated in place.

use serde::{Deserialize, Serialize};

/// The user-selected scope controlling which sections are requested
/// from the completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildOption {
    #[serde(rename = "Account Dossier")]
    AccountDossier,
    #[serde(rename = "Use Cases")]
    UseCases,
    #[serde(rename = "Outreach Templates")]
    OutreachTemplates,
    All,
}

impl BuildOption {
    /// Dossier detail: overview, key contacts, recent news.
    /// The dossier *header* (name/industry/employee count) is always
    /// requested regardless of the option.
    pub fn wants_dossier_detail(&self) -> bool {
        matches!(self, BuildOption::AccountDossier | BuildOption::All)
    }

    pub fn wants_use_cases(&self) -> bool {
        matches!(self, BuildOption::UseCases | BuildOption::All)
    }

    pub fn wants_outreach_templates(&self) -> bool {
        matches!(self, BuildOption::OutreachTemplates | BuildOption::All)
    }

    /// The human-facing label, identical to the wire form.
    pub fn label(&self) -> &'static str {
        match self {
            BuildOption::AccountDossier => "Account Dossier",
            BuildOption::UseCases => "Use Cases",
            BuildOption::OutreachTemplates => "Outreach Templates",
            BuildOption::All => "All",
        }
    }
}

/// Validated form input. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFormInput {
    pub company_name: String,
    pub build_option: BuildOption,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyContact {
    pub name: String,
    pub role: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsEvent {
    pub title: String,
    pub summary: String,
    /// Publication date, YYYY-MM-DD by schema guidance. Treated as an
    /// opaque label everywhere downstream.
    pub date: String,
    pub source: String,
}

/// Company research record. The three header fields are always present
/// (the output schema marks them required); the detail fields appear
/// only when dossier detail was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDossier {
    pub company_name: String,
    pub industry: String,
    pub employee_count: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_contacts: Vec<KeyContact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_news: Vec<NewsEvent>,
}

impl AccountDossier {
    /// True when the dossier carries anything an export would render.
    /// Header fields alone do not count — exports never show them.
    pub fn has_renderable_content(&self) -> bool {
        self.overview.as_deref().is_some_and(|o| !o.is_empty())
            || !self.key_contacts.is_empty()
            || !self.recent_news.is_empty()
    }
}

/// A problem/solution pairing describing a sales opportunity.
/// All fields arrive together as a unit (the schema requires them all),
/// though exports intentionally render only a subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessUseCase {
    pub title: String,
    pub problem: String,
    pub solution: String,
    pub business_value: String,
    pub salesforce_capability: String,
    pub service_offerings: String,
    pub success_metrics: String,
}

/// A prewritten contact-channel message skeleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachTemplate {
    pub title: String,
    /// Free-text channel label, conventionally "Email" or "LinkedIn InMail".
    pub channel: String,
    pub subject: String,
    pub body: String,
}

/// Top-level analysis result. Each section is present only if it was
/// requested and the service returned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dossier: Option<AccountDossier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_cases: Option<Vec<BusinessUseCase>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outreach_templates: Option<Vec<OutreachTemplate>>,
}
