//! Structured-text export. Pure string rendering — the same result
//! always produces byte-identical output.

use crate::export::{
    dossier_filename, title_line, ExportFile, CONTACTS_HEADING, DOSSIER_HEADING, NEWS_HEADING,
    OUTREACH_HEADING, OVERVIEW_HEADING, USE_CASES_HEADING,
};
use crate::models::analysis::AnalysisResult;

/// Renders the result as markdown: H1 title, H2 sections, H3 sub-items,
/// bullets for contacts and news.
pub fn render_markdown(result: &AnalysisResult, company_name: &str) -> String {
    let mut md = format!("# {}\n\n", title_line(company_name));

    if let Some(dossier) = result.dossier.as_ref().filter(|d| d.has_renderable_content()) {
        md.push_str(&format!("## {DOSSIER_HEADING}\n\n"));
        if let Some(overview) = dossier.overview.as_deref().filter(|o| !o.is_empty()) {
            md.push_str(&format!("### {OVERVIEW_HEADING}\n"));
            md.push_str(&format!("{overview}\n\n"));
        }
        if !dossier.key_contacts.is_empty() {
            md.push_str(&format!("### {CONTACTS_HEADING}\n"));
            for contact in &dossier.key_contacts {
                md.push_str(&format!(
                    "* **{}** - {} ({})\n",
                    contact.name, contact.role, contact.email
                ));
            }
            md.push('\n');
        }
        if !dossier.recent_news.is_empty() {
            md.push_str(&format!("### {NEWS_HEADING}\n"));
            for item in &dossier.recent_news {
                md.push_str(&format!(
                    "* **{}** ({} - {})\n",
                    item.title, item.source, item.date
                ));
                md.push_str(&format!("  *{}*\n", item.summary));
            }
            md.push('\n');
        }
    }

    if let Some(use_cases) = result.use_cases.as_ref().filter(|u| !u.is_empty()) {
        md.push_str(&format!("## {USE_CASES_HEADING}\n\n"));
        for use_case in use_cases {
            md.push_str(&format!("### {}\n\n", use_case.title));
            md.push_str(&format!("**Problem:** {}\n\n", use_case.problem));
            md.push_str(&format!("**Solution:** {}\n\n", use_case.solution));
            md.push_str(&format!("**Business Value:** {}\n\n", use_case.business_value));
            md.push_str("---\n\n");
        }
    }

    if let Some(templates) = result.outreach_templates.as_ref().filter(|t| !t.is_empty()) {
        md.push_str(&format!("## {OUTREACH_HEADING}\n\n"));
        for template in templates {
            md.push_str(&format!(
                "### {} ({})\n\n",
                template.title, template.channel
            ));
            md.push_str(&format!("**Subject:** {}\n\n", template.subject));
            md.push_str(&format!("**Body:**\n{}\n\n", template.body));
            md.push_str("---\n\n");
        }
    }

    md
}

/// Renders and wraps the markdown as a downloadable UTF-8 file.
pub fn export_markdown(result: &AnalysisResult, company_name: &str) -> ExportFile {
    ExportFile {
        filename: dossier_filename(company_name, "md"),
        content_type: "text/markdown; charset=utf-8",
        bytes: render_markdown(result, company_name).into_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{
        AccountDossier, BusinessUseCase, KeyContact, NewsEvent, OutreachTemplate,
    };

    fn sample_dossier() -> AccountDossier {
        AccountDossier {
            company_name: "Acme Corp".to_string(),
            industry: "Manufacturing".to_string(),
            employee_count: "1001-5000".to_string(),
            overview: Some("Acme builds industrial tooling.".to_string()),
            key_contacts: vec![KeyContact {
                name: "Jane Roe".to_string(),
                role: "VP Operations".to_string(),
                email: "jane@acme.example".to_string(),
            }],
            recent_news: vec![NewsEvent {
                title: "Acme opens Austin plant".to_string(),
                summary: "A second US facility.".to_string(),
                date: "2024-03-18".to_string(),
                source: "Reuters".to_string(),
            }],
        }
    }

    fn sample_template() -> OutreachTemplate {
        OutreachTemplate {
            title: "Plant expansion opener".to_string(),
            channel: "Email".to_string(),
            subject: "Scaling service ops".to_string(),
            body: "Hi [Contact Name],\nCongrats on the expansion.".to_string(),
        }
    }

    #[test]
    fn test_full_result_renders_every_section_in_order() {
        let result = AnalysisResult {
            dossier: Some(sample_dossier()),
            use_cases: Some(vec![BusinessUseCase {
                title: "Unified field service".to_string(),
                problem: "Dispatch runs on spreadsheets.".to_string(),
                solution: "Managed Field Service rollout.".to_string(),
                business_value: "Fewer truck rolls.".to_string(),
                salesforce_capability: "Field Service".to_string(),
                service_offerings: "Managed services".to_string(),
                success_metrics: "MTTR".to_string(),
            }]),
            outreach_templates: Some(vec![sample_template()]),
        };

        let md = render_markdown(&result, "Acme Corp");

        assert!(md.starts_with("# Analysis for Acme Corp\n\n"));
        let dossier_at = md.find("## Account Dossier").unwrap();
        let use_cases_at = md.find("## Salesforce Business Use Cases").unwrap();
        let outreach_at = md.find("## Outreach Templates").unwrap();
        assert!(dossier_at < use_cases_at && use_cases_at < outreach_at);

        assert!(md.contains("* **Jane Roe** - VP Operations (jane@acme.example)"));
        assert!(md.contains("* **Acme opens Austin plant** (Reuters - 2024-03-18)"));
        assert!(md.contains("  *A second US facility.*"));
        assert!(md.contains("**Problem:** Dispatch runs on spreadsheets."));
        assert!(md.contains("**Body:**\nHi [Contact Name],\nCongrats on the expansion."));

        // The intentionally unexported use-case fields stay out.
        assert!(!md.contains("Managed services"));
        assert!(!md.contains("MTTR"));
    }

    #[test]
    fn test_outreach_only_result_omits_other_headings() {
        let result = AnalysisResult {
            dossier: None,
            use_cases: None,
            outreach_templates: Some(vec![sample_template()]),
        };

        let md = render_markdown(&result, "Acme Corp");

        assert!(md.contains("## Outreach Templates"));
        assert!(!md.contains("## Account Dossier"));
        assert!(!md.contains("## Salesforce Business Use Cases"));
    }

    #[test]
    fn test_header_only_dossier_renders_no_dossier_block() {
        let result = AnalysisResult {
            dossier: Some(AccountDossier {
                company_name: "Acme Corp".to_string(),
                industry: "Manufacturing".to_string(),
                employee_count: "1001-5000".to_string(),
                overview: None,
                key_contacts: vec![],
                recent_news: vec![],
            }),
            use_cases: None,
            outreach_templates: None,
        };

        let md = render_markdown(&result, "Acme Corp");
        assert_eq!(md, "# Analysis for Acme Corp\n\n");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let result = AnalysisResult {
            dossier: Some(sample_dossier()),
            use_cases: None,
            outreach_templates: Some(vec![sample_template()]),
        };
        let first = export_markdown(&result, "Acme Corp");
        let second = export_markdown(&result, "Acme Corp");
        assert_eq!(first.bytes, second.bytes);
        assert_eq!(first.filename, "Acme Corp_Dossier.md");
    }

    #[test]
    fn test_empty_lists_render_nothing() {
        let result = AnalysisResult {
            dossier: None,
            use_cases: Some(vec![]),
            outreach_templates: Some(vec![]),
        };
        let md = render_markdown(&result, "Acme Corp");
        assert_eq!(md, "# Analysis for Acme Corp\n\n");
    }
}
