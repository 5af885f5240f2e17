//! Command handlers for the txa CLI.
//!
//! Each submodule handles one subcommand. Dispatch lives in main.rs.

pub mod analyze;
pub mod config;
pub mod health;
pub mod summarize;
pub mod tui;

use std::fs;
use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};

use txa::tui::theme::Theme;
use txa::tui::current_theme;
use txa::Config;

/// Load the config file and apply command-line overrides.
pub fn load_config(service_url: Option<&str>) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(url) = service_url {
        config.service.base_url = url.to_string();
        config.validate().context("Invalid --service-url")?;
    }
    Ok(config)
}

/// Read the text to work on: a file, or standard input for `-` or nothing.
pub fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            Ok(text)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
    }
}

/// Apply a theme colour when stdout is a terminal.
pub fn paint(text: &str, style: fn(&Theme, &str) -> String) -> String {
    if io::stdout().is_terminal() {
        style(&current_theme(), text)
    } else {
        text.to_string()
    }
}
