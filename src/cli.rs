//! CLI definitions for txa
//!
//! The clap structure lives here, apart from main.rs, so the commands and
//! tests can share it.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};

use crate::model::{SummaryMethod, SUMMARY_SENTENCES_MAX, SUMMARY_SENTENCES_MIN};
use crate::serializer::Category;

/// Clap styles matching the TUI accent colour.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "txa")]
#[command(about = "[ Text Analyzer ] - readability, tense, passive voice and word statistics")]
#[command(
    long_about = "Text Analyzer (txa) - a client for the text analysis service.

Submit text, read the results per category, copy any category to the
clipboard and export a paginated PDF report.

QUICK START:
    txa                              Open the interactive analyzer
    txa analyze notes.txt            Analyze a file and print the results
    cat notes.txt | txa analyze -    Analyze standard input
    txa health                       Check the service is reachable

The service address is read from ~/.config/txa/config.toml."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Override the configured service URL
    #[arg(long, global = true, value_name = "URL")]
    pub service_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive analyzer (default)
    #[command(long_about = "Open the interactive terminal analyzer.

KEYS:
    Ctrl+S / F5      Analyze the text
    Ctrl+L           Clear text and results
    Tab / Shift+Tab  Select a result category
    Ctrl+Y           Copy the selected category
    Ctrl+E           Export a PDF report
    PgUp / PgDn      Scroll the results
    Esc / Ctrl+C     Quit

Log output goes to ~/.config/txa/txa.log while the analyzer is open.")]
    Tui,

    /// Analyze text and print the results
    #[command(long_about = "Send text to the analysis service and print the results.

Reads FILE, or standard input when FILE is '-' or omitted. Text shorter
than the configured minimum is rejected without contacting the service.

EXAMPLES:
    txa analyze essay.txt
    txa analyze essay.txt --format json
    txa analyze essay.txt --copy frequency
    txa analyze essay.txt --export
    txa analyze essay.txt --export reports/essay.pdf
    txa analyze essay.txt --export --text-export")]
    Analyze {
        /// File to analyze ('-' for standard input)
        #[arg(value_name = "FILE")]
        file: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Copy one category to the clipboard (e.g. stats, past, frequency, nouns)
        #[arg(long, value_name = "CATEGORY")]
        copy: Option<Category>,

        /// Export a report; PATH defaults to the configured export location
        #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
        export: Option<String>,

        /// Export a plain-text report instead of a PDF
        #[arg(long, requires = "export")]
        text_export: bool,
    },

    /// Summarize text with the service's extractive summarizer
    #[command(long_about = "Ask the service for an extractive summary.

EXAMPLES:
    txa summarize article.txt
    txa summarize article.txt --sentences 5 --method lexrank")]
    Summarize {
        /// File to summarize ('-' for standard input)
        #[arg(value_name = "FILE")]
        file: Option<String>,

        /// Number of sentences in the summary
        #[arg(
            long,
            default_value_t = 3,
            value_parser = clap::value_parser!(u8).range(
                SUMMARY_SENTENCES_MIN as i64..=SUMMARY_SENTENCES_MAX as i64
            )
        )]
        sentences: u8,

        /// Summarization method: smart, lsa, lexrank or textrank
        #[arg(long, default_value = "smart")]
        method: SummaryMethod,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check that the analysis service is up
    Health,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Write the default configuration file
    #[command(long_about = "Write the default configuration to ~/.config/txa/config.toml.

Refuses to overwrite an existing file unless --force is given.")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file path
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
