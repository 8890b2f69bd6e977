//! Paginated print export.
//!
//! A greedy line-accumulator, not flow layout: text is word-wrapped to
//! the printable width with the static font metrics, a running vertical
//! cursor advances block by block, and a new page starts whenever the
//! cursor has passed page height minus the bottom buffer. The two major
//! list sections additionally force a page break when the remaining
//! space is under the section threshold, else take a smaller spacer.
//!
//! Requires a dossier (its company name becomes the filename); without
//! one the export is a silent no-op.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::errors::AppError;
use crate::export::{
    contact_line, news_line, pov_filename, template_heading, title_line, ExportFile,
    CONTACTS_HEADING, DOSSIER_HEADING, NEWS_HEADING, OUTREACH_HEADING, OVERVIEW_HEADING,
    USE_CASES_HEADING,
};
use crate::layout::{get_metrics, FontFace, PageConfig};
use crate::models::analysis::AnalysisResult;

const TITLE_SIZE: f32 = 18.0;
const SECTION_SIZE: f32 = 16.0;
const SUBSECTION_SIZE: f32 = 14.0;
const LABEL_SIZE: f32 = 11.0;
const BODY_SIZE: f32 = 10.0;
const FINE_SIZE: f32 = 9.0;

/// Extra advance after a heading block vs a body block.
const HEADING_GAP_MM: f32 = 6.0;
const BLOCK_GAP_MM: f32 = 4.0;
/// Spacer before a major section that still fits on the current page.
const SECTION_SPACER_MM: f32 = 10.0;

#[derive(Debug, Clone, Copy, Default)]
struct TextOptions {
    size: f32,
    bold: bool,
    /// Headings reserve the larger gap below themselves.
    heading: bool,
    /// Title only: first wrapped line is horizontally centered.
    centered: bool,
}

/// Running cursor over a growing page list.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
    config: &'a PageConfig,
    y_mm: f32,
}

impl PageCursor<'_> {
    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(self.config.page_width_mm), Mm(self.config.page_height_mm), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y_mm = self.config.margin_mm;
    }

    fn space(&mut self, mm: f32) {
        self.y_mm += mm;
    }

    /// Starts a major section: fresh page if the remaining space is
    /// below the threshold, a small spacer otherwise.
    fn begin_major_section(&mut self) {
        if self.y_mm > self.config.page_height_mm - self.config.section_break_mm {
            self.new_page();
        } else {
            self.space(SECTION_SPACER_MM);
        }
    }

    /// Wraps and draws one text block at the cursor, then advances past
    /// it. The page-break check happens once per block, so a long block
    /// may run past the buffer — greedy accumulation, by contract.
    fn add_text(&mut self, text: &str, options: TextOptions) {
        if self.y_mm > self.config.break_threshold_mm() {
            self.new_page();
        }

        let metrics = get_metrics(if options.bold {
            FontFace::HelveticaBold
        } else {
            FontFace::Helvetica
        });
        let font = if options.bold { self.bold } else { self.regular };
        let lines = metrics.wrap_text(text, options.size, self.config.max_line_width_mm());
        let line_height = self.config.line_height_mm(options.size);

        for (index, line) in lines.iter().enumerate() {
            let mut x = self.config.margin_mm;
            if options.centered && index == 0 {
                let width = metrics.text_width_mm(line, options.size);
                x = ((self.config.page_width_mm - width) / 2.0).max(self.config.margin_mm);
            }
            // Page origin is bottom-left; the cursor tracks distance from the top.
            let baseline = self.y_mm + (index as f32 + 1.0) * line_height;
            self.layer.use_text(
                line.clone(),
                options.size,
                Mm(x),
                Mm(self.config.page_height_mm - baseline),
                font,
            );
        }

        self.y_mm += lines.len() as f32 * line_height
            + if options.heading { HEADING_GAP_MM } else { BLOCK_GAP_MM };
    }
}

/// Renders the result into a paginated document. Returns `None` — no
/// file, no error — when the result has no dossier.
pub fn export_pdf(
    result: &AnalysisResult,
    config: &PageConfig,
) -> Result<Option<ExportFile>, AppError> {
    let Some(dossier) = result.dossier.as_ref() else {
        return Ok(None);
    };
    let company_name = dossier.company_name.clone();

    let (doc, page, layer) = PdfDocument::new(
        title_line(&company_name),
        Mm(config.page_width_mm),
        Mm(config.page_height_mm),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to load font: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to load font: {e}")))?;

    let mut cursor = PageCursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        regular: &regular,
        bold: &bold,
        config,
        y_mm: config.margin_mm,
    };

    cursor.add_text(
        &title_line(&company_name),
        TextOptions {
            size: TITLE_SIZE,
            bold: true,
            heading: true,
            centered: true,
        },
    );
    cursor.space(5.0);

    if dossier.has_renderable_content() {
        cursor.add_text(DOSSIER_HEADING, heading(SECTION_SIZE));
        if let Some(overview) = dossier.overview.as_deref().filter(|o| !o.is_empty()) {
            cursor.add_text(OVERVIEW_HEADING, heading(SUBSECTION_SIZE));
            cursor.add_text(overview, body(BODY_SIZE));
            cursor.space(5.0);
        }
        if !dossier.key_contacts.is_empty() {
            cursor.add_text(CONTACTS_HEADING, heading(SUBSECTION_SIZE));
            for contact in &dossier.key_contacts {
                cursor.add_text(&format!("• {}", contact_line(contact)), body(BODY_SIZE));
            }
            cursor.space(5.0);
        }
        if !dossier.recent_news.is_empty() {
            cursor.add_text(NEWS_HEADING, heading(SUBSECTION_SIZE));
            for item in &dossier.recent_news {
                cursor.add_text(
                    &format!("• {}", news_line(item)),
                    TextOptions {
                        size: BODY_SIZE,
                        bold: true,
                        ..Default::default()
                    },
                );
                cursor.add_text(&item.summary, body(FINE_SIZE));
            }
        }
    }

    if let Some(use_cases) = result.use_cases.as_ref().filter(|u| !u.is_empty()) {
        cursor.begin_major_section();
        cursor.add_text(USE_CASES_HEADING, heading(SECTION_SIZE));
        for use_case in use_cases {
            cursor.add_text(&use_case.title, heading(SUBSECTION_SIZE));
            cursor.add_text("Problem:", label());
            cursor.add_text(&use_case.problem, body(BODY_SIZE));
            cursor.add_text("Solution:", label());
            cursor.add_text(&use_case.solution, body(BODY_SIZE));
            cursor.add_text("Business Value:", label());
            cursor.add_text(&use_case.business_value, body(BODY_SIZE));
            cursor.space(10.0);
        }
    }

    if let Some(templates) = result.outreach_templates.as_ref().filter(|t| !t.is_empty()) {
        cursor.begin_major_section();
        cursor.add_text(OUTREACH_HEADING, heading(SECTION_SIZE));
        for template in templates {
            cursor.add_text(&template_heading(template), heading(SUBSECTION_SIZE));
            cursor.add_text("Subject:", label());
            cursor.add_text(&template.subject, body(BODY_SIZE));
            cursor.add_text("Body:", label());
            cursor.add_text(&template.body, body(BODY_SIZE));
            cursor.space(10.0);
        }
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to serialize document: {e}")))?;

    Ok(Some(ExportFile {
        filename: pov_filename(&company_name),
        content_type: "application/pdf",
        bytes,
    }))
}

fn heading(size: f32) -> TextOptions {
    TextOptions {
        size,
        bold: true,
        heading: true,
        centered: false,
    }
}

fn body(size: f32) -> TextOptions {
    TextOptions {
        size,
        ..Default::default()
    }
}

fn label() -> TextOptions {
    TextOptions {
        size: LABEL_SIZE,
        bold: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_page_config;
    use crate::models::analysis::{AccountDossier, BusinessUseCase, KeyContact, NewsEvent};

    fn full_result() -> AnalysisResult {
        AnalysisResult {
            dossier: Some(AccountDossier {
                company_name: "Acme Corp".to_string(),
                industry: "Manufacturing".to_string(),
                employee_count: "1001-5000".to_string(),
                overview: Some(
                    "Acme builds industrial tooling for mid-market factories. ".repeat(20),
                ),
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
            }),
            use_cases: Some(vec![
                BusinessUseCase {
                    title: "Unified field service".to_string(),
                    problem: "Dispatch runs on spreadsheets. ".repeat(10),
                    solution: "Managed Field Service rollout. ".repeat(10),
                    business_value: "Fewer truck rolls. ".repeat(10),
                    salesforce_capability: "Field Service".to_string(),
                    service_offerings: "Managed services".to_string(),
                    success_metrics: "MTTR".to_string(),
                };
                3
            ]),
            outreach_templates: None,
        }
    }

    #[test]
    fn test_no_dossier_is_a_silent_no_op() {
        let result = AnalysisResult::default();
        let exported = export_pdf(&result, &default_page_config()).unwrap();
        assert!(exported.is_none());
    }

    #[test]
    fn test_full_result_produces_a_pdf_named_after_the_dossier() {
        let file = export_pdf(&full_result(), &default_page_config())
            .unwrap()
            .expect("dossier present, file expected");
        assert_eq!(file.filename, "Acme Corp_POV.pdf");
        assert_eq!(file.content_type, "application/pdf");
        assert_eq!(&file.bytes[..5], b"%PDF-");
    }

    #[test]
    fn test_output_is_deterministic_for_the_same_result() {
        let config = default_page_config();
        let result = full_result();
        let first = export_pdf(&result, &config).unwrap().unwrap();
        let second = export_pdf(&result, &config).unwrap().unwrap();
        assert_eq!(first.bytes.len(), second.bytes.len());
    }
}
