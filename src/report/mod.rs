//! Report export: sections → pages → PDF or plain text.
//!
//! # Example
//!
//! ```ignore
//! use txa::report::{export, ReportFormat};
//!
//! let path = export(&result, &input_text, Path::new("."), None, ReportFormat::Pdf)?;
//! println!("Saved {}", path.display());
//! ```

pub mod builder;
mod error;
pub mod layout;
pub mod paginator;
pub mod pdf;

pub use builder::{DocumentBuilder, TextBuilder};
pub use error::ExportError;
pub use layout::{Helvetica, Monospace, PageLayout, TextMeasure};
pub use paginator::{paginate, render, LineStyle, Page, PaginatedDocument, PlacedLine};
pub use pdf::PdfBuilder;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::model::AnalysisResult;
use crate::serializer::sections;

pub const REPORT_TITLE: &str = "Text Analysis Report";
pub const REPORT_FILE_NAME: &str = "text-analysis-report.pdf";
pub const TEXT_REPORT_FILE_NAME: &str = "text-analysis-report.txt";

/// Output flavour of an exported report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Pdf,
    Text,
}

impl ReportFormat {
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => REPORT_FILE_NAME,
            ReportFormat::Text => TEXT_REPORT_FILE_NAME,
        }
    }

    pub fn layout(&self) -> PageLayout {
        match self {
            ReportFormat::Pdf => PageLayout::A4,
            ReportFormat::Text => PageLayout::TEXT,
        }
    }

    fn metrics(&self) -> &'static dyn TextMeasure {
        match self {
            ReportFormat::Pdf => &Helvetica,
            ReportFormat::Text => &Monospace,
        }
    }
}

/// The timestamp line under the report title.
pub fn generated_line(at: &DateTime<Local>) -> String {
    format!("Generated: {}", at.format("%Y-%m-%d %H:%M:%S"))
}

/// Paginate one result in the given format.
pub fn paginate_result(
    result: &AnalysisResult,
    input_text: &str,
    generated: &str,
    format: ReportFormat,
) -> PaginatedDocument {
    paginate(
        REPORT_TITLE,
        generated,
        &sections(result, input_text),
        &format.layout(),
        format.metrics(),
    )
}

/// Render one result to bytes.
pub fn render_result(
    result: &AnalysisResult,
    input_text: &str,
    generated: &str,
    format: ReportFormat,
) -> Result<Vec<u8>, ExportError> {
    let layout = format.layout();
    let document = paginate_result(result, input_text, generated, format);
    let mut builder: Box<dyn DocumentBuilder> = match format {
        ReportFormat::Pdf => Box::new(PdfBuilder::new(&layout, REPORT_TITLE)),
        ReportFormat::Text => Box::new(TextBuilder::new()),
    };
    render(&document, &layout, builder.as_mut())
}

/// Render and write a report into `directory`.
///
/// `file_name` defaults to the format's standard name. Returns the path
/// written.
pub fn export(
    result: &AnalysisResult,
    input_text: &str,
    directory: &Path,
    file_name: Option<&str>,
    format: ReportFormat,
) -> Result<PathBuf, ExportError> {
    let generated = generated_line(&Local::now());
    let bytes = render_result(result, input_text, &generated, format)?;

    let path = directory.join(file_name.unwrap_or(format.default_file_name()));
    fs::write(&path, bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), ?format, "exported report");
    Ok(path)
}
