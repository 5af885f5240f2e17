//! Text Analyzer (txa) - CLI entry point

mod commands;

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;

use txa::cli::{Cli, Commands, ConfigCommands};
use txa::logging::{init_logging, LogConfig, LOG_FILE_NAME};
use txa::Config;

use commands::analyze::AnalyzeOptions;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&log_config(&cli))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(cli))
}

/// The TUI owns the terminal, so it logs to a file.
fn log_config(cli: &Cli) -> LogConfig {
    let config = LogConfig::from_verbosity(cli.verbose).with_ansi(io::stderr().is_terminal());
    match cli.command {
        None | Some(Commands::Tui) => {
            config.with_log_file(Config::config_dir().ok().map(|dir| dir.join(LOG_FILE_NAME)))
        }
        _ => config,
    }
}

async fn run(cli: Cli) -> Result<()> {
    let service_url = cli.service_url.as_deref();

    match cli.command {
        None | Some(Commands::Tui) => {
            let config = commands::load_config(service_url)?;
            commands::tui::handle(&config).await
        }
        Some(Commands::Analyze {
            file,
            format,
            copy,
            export,
            text_export,
        }) => {
            let config = commands::load_config(service_url)?;
            let options = AnalyzeOptions {
                copy,
                export,
                text_export,
                colour: false,
            };
            commands::analyze::handle(&config, file.as_deref(), format, &options).await
        }
        Some(Commands::Summarize {
            file,
            sentences,
            method,
            format,
        }) => {
            let config = commands::load_config(service_url)?;
            commands::summarize::handle(&config, file.as_deref(), sentences, method, format).await
        }
        Some(Commands::Health) => {
            let config = commands::load_config(service_url)?;
            commands::health::handle(&config).await
        }
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(service_url),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
            ConfigCommands::Path => commands::config::handle_path(),
        },
    }
}
