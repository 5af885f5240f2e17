//! Analyze command handler
//!
//! Runs one request through the lifecycle controller, prints the result,
//! then optionally copies a category and exports a report.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use txa::cli::OutputFormat;
use txa::client::{AnalysisClient, HttpAnalysisClient};
use txa::clipboard::copy::Copy;
use txa::clipboard::ClipboardSink;
use txa::controller::{RequestLifecycleController, SubmitError};
use txa::model::AnalysisResult;
use txa::report::{self, ReportFormat};
use txa::serializer::{clipboard_text, display_text, Category};
use txa::tui::theme::Theme;
use txa::Config;

use super::{paint, read_input};

/// What to do with the result besides printing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeOptions {
    pub copy: Option<Category>,
    /// `Some("")` exports to the configured location.
    pub export: Option<String>,
    pub text_export: bool,
    /// Colour the category headings.
    pub colour: bool,
}

/// Analyze a file or standard input against the configured service.
#[cfg(not(tarpaulin_include))]
pub async fn handle(
    config: &Config,
    file: Option<&str>,
    format: OutputFormat,
    options: &AnalyzeOptions,
) -> Result<()> {
    let text = read_input(file)?;
    let options = AnalyzeOptions {
        colour: io::stdout().is_terminal(),
        ..options.clone()
    };
    let client = HttpAnalysisClient::from_config(&config.service)?;
    let mut clipboard = Copy::new();
    let stdout = io::stdout();
    execute(
        &client,
        &mut clipboard,
        config,
        &text,
        format,
        &options,
        &mut stdout.lock(),
    )
    .await
}

/// Everything after input and collaborators are in place.
pub async fn execute(
    client: &dyn AnalysisClient,
    clipboard: &mut dyn ClipboardSink,
    config: &Config,
    text: &str,
    format: OutputFormat,
    options: &AnalyzeOptions,
    out: &mut dyn Write,
) -> Result<()> {
    let mut controller = RequestLifecycleController::new(config.analysis.min_text_length);
    match controller.run(client, text).await {
        Ok(_) => {}
        Err(SubmitError::Invalid(err)) => bail!(err.user_message()),
        Err(err) => return Err(err.into()),
    }
    if let Some(message) = controller.state().error() {
        bail!("{}", message);
    }
    let Some(result) = controller.result() else {
        bail!("The service returned no result");
    };

    match format {
        OutputFormat::Text => write!(out, "{}", render_text(result, options.colour))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(result)?)?,
    }

    if let Some(category) = options.copy {
        let Some(copied) = clipboard_text(result, category) else {
            bail!("Nothing to copy: {} is empty for this text", category.label());
        };
        let outcome = clipboard.copy_text(&copied)?;
        eprintln!("{}", paint(&outcome.message(&category.label()), Theme::success_text));
    }

    if let Some(target) = &options.export {
        let format = if options.text_export {
            ReportFormat::Text
        } else {
            ReportFormat::Pdf
        };
        let (directory, file_name) = export_location(config, target, format);
        let input_text = controller.input_text().unwrap_or(text);
        let path = report::export(result, input_text, &directory, file_name.as_deref(), format)
            .with_context(|| format!("Failed to export report to {}", directory.display()))?;
        eprintln!(
            "{}",
            paint(&format!("Report saved to {}", path.display()), Theme::success_text)
        );
    }

    Ok(())
}

/// Every available category as a heading followed by its indented body.
pub fn render_text(result: &AnalysisResult, colour: bool) -> String {
    let theme = txa::tui::current_theme();
    let mut out = String::new();
    for category in Category::available(result) {
        if !out.is_empty() {
            out.push('\n');
        }
        let label = category.label();
        if colour {
            out.push_str(&theme.accent_text(&label));
        } else {
            out.push_str(&label);
        }
        out.push('\n');
        for line in display_text(result, category).unwrap_or_default().lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

/// Directory and file name for an export target.
///
/// An empty target uses the configured directory and file name. A target
/// that is an existing directory gets the format's default file name.
pub fn export_location(
    config: &Config,
    target: &str,
    format: ReportFormat,
) -> (PathBuf, Option<String>) {
    if target.is_empty() {
        let file_name = match format {
            ReportFormat::Pdf => Some(config.export.file_name.clone()),
            ReportFormat::Text => None,
        };
        return (config.export.directory_path(), file_name);
    }

    let path = Path::new(target);
    if path.is_dir() {
        return (path.to_path_buf(), None);
    }
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    (directory, file_name)
}
