//! Word-processor export.
//!
//! Two stages: a pure projection of the result into an ordered block
//! list, then a mapping of that list onto a `docx-rs` document. The
//! block list is what carries the section-order and content contract;
//! the mapping is mechanical.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, Start, Style, StyleType,
};

use crate::errors::AppError;
use crate::export::{
    contact_line, dossier_filename, news_line, template_heading, title_line, ExportFile,
    CONTACTS_HEADING, DOSSIER_HEADING, NEWS_HEADING, OUTREACH_HEADING, OVERVIEW_HEADING,
    USE_CASES_HEADING,
};
use crate::models::analysis::AnalysisResult;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The id of the single bullet numbering definition.
const BULLET_NUMBERING: usize = 1;

/// One paragraph-level element of the exported document, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum DocBlock {
    /// Heading 1-3; only the document title is centered.
    Heading {
        level: u8,
        text: String,
        centered: bool,
    },
    /// A bulleted list entry.
    Bullet(String),
    /// A plain body paragraph.
    Paragraph(String),
    /// A paragraph opening with a bold label ("Problem: ") followed by text.
    Labeled { label: &'static str, text: String },
    /// A paragraph holding only a bold label ("Body: ").
    Label(&'static str),
    /// An empty spacer paragraph.
    Empty,
}

/// Projects the result into the shared section order. Outreach bodies
/// are split line-by-line so every source line becomes its own paragraph.
pub fn document_blocks(result: &AnalysisResult, company_name: &str) -> Vec<DocBlock> {
    let mut blocks = vec![DocBlock::Heading {
        level: 1,
        text: title_line(company_name),
        centered: true,
    }];

    if let Some(dossier) = result.dossier.as_ref().filter(|d| d.has_renderable_content()) {
        blocks.push(heading(2, DOSSIER_HEADING));
        if let Some(overview) = dossier.overview.as_deref().filter(|o| !o.is_empty()) {
            blocks.push(heading(3, OVERVIEW_HEADING));
            blocks.push(DocBlock::Paragraph(overview.to_string()));
        }
        if !dossier.key_contacts.is_empty() {
            blocks.push(heading(3, CONTACTS_HEADING));
            for contact in &dossier.key_contacts {
                blocks.push(DocBlock::Bullet(contact_line(contact)));
            }
        }
        if !dossier.recent_news.is_empty() {
            blocks.push(heading(3, NEWS_HEADING));
            for item in &dossier.recent_news {
                blocks.push(DocBlock::Bullet(news_line(item)));
                blocks.push(DocBlock::Paragraph(item.summary.clone()));
            }
        }
    }

    if let Some(use_cases) = result.use_cases.as_ref().filter(|u| !u.is_empty()) {
        blocks.push(heading(2, USE_CASES_HEADING));
        for use_case in use_cases {
            blocks.push(heading(3, &use_case.title));
            blocks.push(DocBlock::Labeled {
                label: "Problem: ",
                text: use_case.problem.clone(),
            });
            blocks.push(DocBlock::Labeled {
                label: "Solution: ",
                text: use_case.solution.clone(),
            });
            blocks.push(DocBlock::Labeled {
                label: "Business Value: ",
                text: use_case.business_value.clone(),
            });
            blocks.push(DocBlock::Empty);
        }
    }

    if let Some(templates) = result.outreach_templates.as_ref().filter(|t| !t.is_empty()) {
        blocks.push(heading(2, OUTREACH_HEADING));
        for template in templates {
            blocks.push(heading(3, &template_heading(template)));
            blocks.push(DocBlock::Labeled {
                label: "Subject: ",
                text: template.subject.clone(),
            });
            blocks.push(DocBlock::Label("Body: "));
            for line in template.body.split('\n') {
                blocks.push(DocBlock::Paragraph(line.to_string()));
            }
            blocks.push(DocBlock::Empty);
        }
    }

    blocks
}

fn heading(level: u8, text: &str) -> DocBlock {
    DocBlock::Heading {
        level,
        text: text.to_string(),
        centered: false,
    }
}

/// Maps the block list onto a styled document.
fn build_docx(blocks: &[DocBlock]) -> Docx {
    let mut docx = Docx::new()
        .add_style(
            Style::new("Heading1", StyleType::Paragraph)
                .name("Heading 1")
                .size(36)
                .bold(),
        )
        .add_style(
            Style::new("Heading2", StyleType::Paragraph)
                .name("Heading 2")
                .size(30)
                .bold(),
        )
        .add_style(
            Style::new("Heading3", StyleType::Paragraph)
                .name("Heading 3")
                .size(26)
                .bold(),
        )
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )))
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING));

    for block in blocks {
        let paragraph = match block {
            DocBlock::Heading {
                level,
                text,
                centered,
            } => {
                let style = match level {
                    1 => "Heading1",
                    2 => "Heading2",
                    _ => "Heading3",
                };
                let mut p = Paragraph::new()
                    .add_run(Run::new().add_text(text.as_str()))
                    .style(style);
                if *centered {
                    p = p.align(AlignmentType::Center);
                }
                p
            }
            DocBlock::Bullet(text) => Paragraph::new()
                .add_run(Run::new().add_text(text.as_str()))
                .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0)),
            DocBlock::Paragraph(text) => {
                Paragraph::new().add_run(Run::new().add_text(text.as_str()))
            }
            DocBlock::Labeled { label, text } => Paragraph::new()
                .add_run(Run::new().add_text(*label).bold())
                .add_run(Run::new().add_text(text.as_str())),
            DocBlock::Label(label) => {
                Paragraph::new().add_run(Run::new().add_text(*label).bold())
            }
            DocBlock::Empty => Paragraph::new(),
        };
        docx = docx.add_paragraph(paragraph);
    }

    docx
}

/// Builds and packages the document in memory. Packaging is CPU-bound
/// zip work — callers on the async runtime wrap this in
/// `tokio::task::spawn_blocking`.
pub fn export_docx(result: &AnalysisResult, company_name: &str) -> Result<ExportFile, AppError> {
    let blocks = document_blocks(result, company_name);
    let docx = build_docx(&blocks);

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to package document: {e}")))?;

    Ok(ExportFile {
        filename: dossier_filename(company_name, "docx"),
        content_type: DOCX_CONTENT_TYPE,
        bytes: cursor.into_inner(),
    })
}
