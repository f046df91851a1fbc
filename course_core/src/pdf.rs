//! # PDF Generation Module
//!
//! Renders a [`FinancialReport`] to PDF using Typst.
//!
//! ## Architecture
//!
//! - The page setup is an embedded Typst preamble
//! - Tables are generated from the report model; every cell is emitted as a
//!   Typst string literal so user text never reaches markup mode
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use course_core::pdf::{render_plan_pdf, DEFAULT_EXPORT_FILE_NAME};
//! use course_core::plan::PlanConfig;
//! use course_core::report::ReportMeta;
//!
//! let pdf_bytes = render_plan_pdf(&PlanConfig::default(), ReportMeta::default()).unwrap();
//! std::fs::write(DEFAULT_EXPORT_FILE_NAME, pdf_bytes).unwrap();
//! ```

use chrono::{Datelike, Utc};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::errors::{CalcError, CalcResult};
use crate::plan::PlanConfig;
use crate::report::{FinancialReport, ReportMeta, ReportRow, ReportTable};

/// File name offered when saving the export
pub const DEFAULT_EXPORT_FILE_NAME: &str = "DotProjects_Financial_Projection.pdf";

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Available fonts
    fonts: Vec<Font>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        let fonts = Self::load_fonts();
        let book = FontBook::from_fonts(&fonts);

        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(book),
            fonts,
            library: LazyHash::new(Library::default()),
        }
    }

    fn load_fonts() -> Vec<Font> {
        let mut fonts = Vec::new();
        for font_bytes in typst_assets::fonts() {
            let buffer = Bytes::new(font_bytes.to_vec());
            for font in Font::iter(buffer) {
                fonts.push(font);
            }
        }
        fonts
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(now.year(), now.month() as u8, now.day() as u8)
    }
}

// ============================================================================
// Template
// ============================================================================

/// Page setup and title banner. Placeholders are replaced before compiling.
const REPORT_PREAMBLE: &str = r##"
#set page(
  paper: "a4",
  margin: (top: 0.8in, bottom: 0.9in, left: 0.8in, right: 0.8in),
  footer: context [
    #line(length: 100%, stroke: 0.5pt + gray)
    #v(4pt)
    #grid(
      columns: (1fr, 1fr),
      align(left)[#text(size: 8pt, fill: gray)[{{ORGANIZATION}}]],
      align(right)[#text(size: 8pt, fill: gray)[Page #counter(page).display()]],
    )
  ]
)

#set text(font: "Libertinus Serif", size: 10pt)

#block(width: 100%, fill: rgb("#1f2937"), inset: 16pt, radius: 2pt)[
  #text(size: 24pt, weight: "bold", fill: white)[{{ORGANIZATION}}]
  #v(2pt)
  #text(size: 14pt, fill: white)[{{SUBTITLE}}]
]

#align(right)[#text(size: 9pt, fill: rgb("#646464"))[Generated on: {{DATE}}]]
"##;

/// Colours for one table: header fill, footer fill, footer text
struct TableStyle {
    header: &'static str,
    footer: &'static str,
    footer_text: &'static str,
}

const REVENUE_STYLE: TableStyle = TableStyle { header: "#7c3aed", footer: "#10b981", footer_text: "#ffffff" };
const EXPENSE_STYLE: TableStyle = TableStyle { header: "#dc2626", footer: "#1f2937", footer_text: "#ffffff" };
const SPLIT_STYLE: TableStyle = TableStyle { header: "#059669", footer: "#f3f4f6", footer_text: "#059669" };
const PROJECTION_STYLE: TableStyle = TableStyle { header: "#4b5563", footer: "#f3f4f6", footer_text: "#000000" };

// ============================================================================
// PDF Rendering Functions
// ============================================================================

/// Render a report to PDF.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(CalcError::Internal)` - If Typst compilation or PDF export fails
pub fn render_report_pdf(report: &FinancialReport) -> CalcResult<Vec<u8>> {
    let source = build_source(report);

    let world = PdfWorld::new(source);
    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors
            .iter()
            .map(|e| e.message.to_string())
            .collect();
        CalcError::internal(format!("Typst compilation failed: {}", error_msgs.join("; ")))
    })?;

    let pdf_bytes = typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        CalcError::internal(format!("PDF rendering failed: {}", error_msgs.join("; ")))
    })?;

    log::info!("rendered financial report: {} bytes", pdf_bytes.len());
    Ok(pdf_bytes)
}

/// Sanitize, compute, lay out and render a plan in one call.
pub fn render_plan_pdf(config: &PlanConfig, meta: ReportMeta) -> CalcResult<Vec<u8>> {
    render_report_pdf(&FinancialReport::from_config(config, meta))
}

/// Assemble the full Typst source for a report
fn build_source(report: &FinancialReport) -> String {
    let meta = &report.meta;
    let organization = escape_typst(&meta.organization);
    let subtitle = escape_typst(&meta.subtitle);
    let date = meta.generated_on.format("%d/%m/%Y").to_string();
    let mut source = fill_placeholders(
        REPORT_PREAMBLE,
        &[("ORGANIZATION", &organization), ("SUBTITLE", &subtitle), ("DATE", &date)],
    );

    let styled = [
        (&report.revenue, &REVENUE_STYLE),
        (&report.expenses, &EXPENSE_STYLE),
        (&report.profit_split, &SPLIT_STYLE),
        (&report.projections, &PROJECTION_STYLE),
    ];
    for (table, style) in styled {
        source.push_str(&render_table(table, style));
    }

    source.push_str(&format!(
        r##"
#v(40pt)
#line(length: 35%, stroke: 0.8pt)
#v(2pt)
#text(size: 12pt, weight: "bold")[{signatory}] \
#text(size: 11pt)[{title}] \
#text(size: 10pt)[(Signature)]
"##,
        signatory = escape_typst(&meta.signatory),
        title = escape_typst(&meta.signatory_title),
    ));

    source
}

/// Replace `{{NAME}}` placeholders in one pass over `template`.
///
/// Substituted text is never rescanned. Unknown placeholders are kept as is.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Render one report table as a Typst heading plus `#table(...)` call
fn render_table(table: &ReportTable, style: &TableStyle) -> String {
    let mut out = format!("\n#v(10pt)\n#heading(level: 2, {})\n", typst_str(&table.title));

    if let Some(note) = &table.note {
        out.push_str(&format!(
            "#text(size: 9pt, style: \"italic\", fill: rgb(\"#646464\"), {})\n",
            typst_str(note)
        ));
    }

    let header_cells = table
        .header
        .iter()
        .map(|h| format!("text(fill: white, weight: \"bold\", {})", typst_str(h)))
        .collect::<Vec<_>>()
        .join(", ");

    let body_rows = table
        .rows
        .iter()
        .map(|row| format!("  {},", row_cells(row, None)))
        .collect::<Vec<_>>()
        .join("\n");

    let footer_index = table.rows.len() + 1;
    let footer = table
        .footer
        .as_ref()
        .map(|row| format!("  table.footer({}),\n", row_cells(row, Some(style.footer_text))))
        .unwrap_or_default();

    out.push_str(&format!(
        r##"#table(
  columns: (2fr, 1.3fr, 1.2fr, 1.3fr),
  inset: 6pt,
  stroke: 0.5pt + rgb("#d1d5db"),
  align: (left, left, left, right),
  fill: (_, y) => if y == 0 {{ rgb("{header}") }} else if y == {footer_index} {{ rgb("{footer_fill}") }} else if calc.even(y) {{ rgb("#f9fafb") }},
  table.header({header_cells}),
{body_rows}
{footer})
"##,
        header = style.header,
        footer_fill = style.footer,
        footer_index = footer_index,
        header_cells = header_cells,
        body_rows = body_rows,
        footer = footer,
    ));

    out
}

/// Comma-separated Typst expressions for a row's cells
fn row_cells(row: &ReportRow, emphasis: Option<&str>) -> String {
    row.cells
        .iter()
        .map(|cell| {
            let text = typst_str(&cell.rendered());
            match emphasis {
                Some(color) => format!("text(weight: \"bold\", fill: rgb(\"{}\"), {})", color, text),
                None => text,
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quote text as a Typst string literal
fn typst_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escape special Typst characters in user-provided text
fn escape_typst(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '*' => "\\*".to_string(),
            '_' => "\\_".to_string(),
            '#' => "\\#".to_string(),
            '$' => "\\$".to_string(),
            '@' => "\\@".to_string(),
            '<' => "\\<".to_string(),
            '>' => "\\>".to_string(),
            '[' => "\\[".to_string(),
            ']' => "\\]".to_string(),
            '\\' => "\\\\".to_string(),
            '`' => "\\`".to_string(),
            '/' => "\\/".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::compute;

    #[test]
    fn test_pdf_generation() {
        let pdf = render_plan_pdf(&PlanConfig::default(), ReportMeta::default());

        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());

        let pdf_bytes = pdf.unwrap();
        assert!(pdf_bytes.starts_with(b"%PDF"), "Output is not a valid PDF");
        assert!(pdf_bytes.len() > 1000, "PDF seems too small");
    }

    #[test]
    fn test_pdf_generation_with_loss_and_odd_text() {
        let config = PlanConfig::default().with_enrollment(1, 1, 0);
        let meta = ReportMeta {
            organization: "Dot #Projects* [Kochi]".to_string(),
            signatory: "A \"Quoted\" // Name".to_string(),
            ..ReportMeta::default()
        };
        let pdf = render_plan_pdf(&config, meta);
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());
    }

    #[test]
    fn test_source_contains_every_table() {
        let config = PlanConfig::default();
        let result = compute(&config);
        let report = FinancialReport::build(&config, &result, ReportMeta::default());
        let source = build_source(&report);

        assert_eq!(source.matches("#table(").count(), 4);
        assert!(source.contains("\"TOTAL GROSS REVENUE\""));
        assert!(source.contains("\"Rs. 14,29,960\""));
        assert!(source.contains("\"NET SURPLUS PROFIT\""));
        assert!(source.contains("\"Annual (4 Cycles)\""));
        assert!(source.contains("(Signature)"));
    }

    #[test]
    fn test_placeholders_filled_once() {
        let filled = fill_placeholders(
            "[{{ORGANIZATION}}] [{{SUBTITLE}}] {{UNKNOWN}}",
            &[("ORGANIZATION", "Acme {{SUBTITLE}}"), ("SUBTITLE", "Plan")],
        );
        assert_eq!(filled, "[Acme {{SUBTITLE}}] [Plan] {{UNKNOWN}}");
        assert_eq!(fill_placeholders("open {{ end", &[]), "open {{ end");
    }

    #[test]
    fn test_organization_text_is_not_expanded() {
        let config = PlanConfig::default();
        let result = compute(&config);
        let meta = ReportMeta {
            organization: "Studio {{DATE}}".to_string(),
            ..ReportMeta::default()
        };
        let report = FinancialReport::build(&config, &result, meta);
        let source = build_source(&report);
        assert!(source.contains("Studio {{DATE}}"));
        assert!(!source.contains("{{ORGANIZATION}}"));
    }

    #[test]
    fn test_typst_str_quotes() {
        assert_eq!(typst_str("plain"), "\"plain\"");
        assert_eq!(typst_str("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("#1 *bold*"), "\\#1 \\*bold\\*");
        assert_eq!(escape_typst("a // b"), "a \\/\\/ b");
    }
}
