//! Report export: projects an `AnalysisResult` into three downloadable
//! artifacts (structured text, word-processor document, paginated
//! print document).
//!
//! All three formats share one section order and one content subset:
//! title, dossier block (overview → contacts → news), use cases,
//! outreach templates. Dossier header fields (industry, employee count)
//! are never rendered; use cases render only title/problem/solution/
//! business value. Exporters do not validate the result shape — absent
//! fields come out blank, the output contract upstream is what keeps
//! the data honest.

pub mod docx;
pub mod handlers;
pub mod markdown;
pub mod pdf;

use crate::models::analysis::{KeyContact, NewsEvent, OutreachTemplate};

/// A rendered artifact ready for download.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

// Section headings, identical across formats.
pub const DOSSIER_HEADING: &str = "Account Dossier";
pub const OVERVIEW_HEADING: &str = "Company Overview";
pub const CONTACTS_HEADING: &str = "Key Contacts";
pub const NEWS_HEADING: &str = "Recent News/Events";
pub const USE_CASES_HEADING: &str = "Salesforce Business Use Cases";
pub const OUTREACH_HEADING: &str = "Outreach Templates";

/// Document title, all formats.
pub fn title_line(company_name: &str) -> String {
    format!("Analysis for {company_name}")
}

/// "name - role (email)"
pub fn contact_line(contact: &KeyContact) -> String {
    format!("{} - {} ({})", contact.name, contact.role, contact.email)
}

/// "title (source - date)"
pub fn news_line(item: &NewsEvent) -> String {
    format!("{} ({} - {})", item.title, item.source, item.date)
}

/// "title (channel)"
pub fn template_heading(template: &OutreachTemplate) -> String {
    format!("{} ({})", template.title, template.channel)
}

/// "{companyName}_Dossier.{ext}" — markdown and docx downloads.
pub fn dossier_filename(company_name: &str, extension: &str) -> String {
    format!("{company_name}_Dossier.{extension}")
}

/// "{companyName}_POV.pdf" — the paginated print download.
pub fn pov_filename(company_name: &str) -> String {
    format!("{company_name}_POV.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_line_formats() {
        let contact = KeyContact {
            name: "Jane Roe".to_string(),
            role: "VP Operations".to_string(),
            email: "jane@acme.example".to_string(),
        };
        assert_eq!(
            contact_line(&contact),
            "Jane Roe - VP Operations (jane@acme.example)"
        );

        let item = NewsEvent {
            title: "X".to_string(),
            summary: "Y".to_string(),
            date: "2024-01-01".to_string(),
            source: "Z".to_string(),
        };
        assert_eq!(news_line(&item), "X (Z - 2024-01-01)");

        let template = OutreachTemplate {
            title: "Opener".to_string(),
            channel: "LinkedIn InMail".to_string(),
            subject: "s".to_string(),
            body: "b".to_string(),
        };
        assert_eq!(template_heading(&template), "Opener (LinkedIn InMail)");
    }

    #[test]
    fn test_filenames_embed_the_company_name() {
        assert_eq!(dossier_filename("Acme Corp", "md"), "Acme Corp_Dossier.md");
        assert_eq!(dossier_filename("Acme Corp", "docx"), "Acme Corp_Dossier.docx");
        assert_eq!(pov_filename("Acme Corp"), "Acme Corp_POV.pdf");
    }
}
