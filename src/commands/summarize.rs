//! Summarize command handler

use std::io::{self, Write};

use anyhow::{bail, Result};

use txa::cli::OutputFormat;
use txa::client::HttpAnalysisClient;
use txa::model::{SummarizeRequest, SummarizeResponse, SummaryMethod};
use txa::Config;

use super::read_input;

/// Ask the service for an extractive summary and print it.
#[cfg(not(tarpaulin_include))]
pub async fn handle(
    config: &Config,
    file: Option<&str>,
    sentences: u8,
    method: SummaryMethod,
    format: OutputFormat,
) -> Result<()> {
    let text = read_input(file)?;
    let request = build_request(&text, config.analysis.min_text_length, sentences, method)?;

    let client = HttpAnalysisClient::from_config(&config.service)?;
    let response = match client.summarize(&request).await {
        Ok(response) => response,
        Err(err) => bail!(err.user_message()),
    };

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => write!(stdout, "{}", render_text(&response))?,
        OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string_pretty(&response)?)?,
    }
    Ok(())
}

/// Validate locally and build the request body.
pub fn build_request(
    text: &str,
    min_length: usize,
    sentences: u8,
    method: SummaryMethod,
) -> Result<SummarizeRequest> {
    let trimmed = text.trim();
    let length = trimmed.chars().count();
    if length < min_length {
        bail!("Please enter at least {} characters.", min_length);
    }
    Ok(SummarizeRequest::new(trimmed)
        .sentences(sentences)
        .method(method))
}

/// The summary followed by the word-count comparison.
pub fn render_text(response: &SummarizeResponse) -> String {
    format!(
        "{}\n\nWords: {} -> {} ({:.1}% shorter)\n",
        response.summary.trim(),
        response.original_word_count,
        response.summary_word_count,
        response.reduction_percentage
    )
}
