//! Config subcommands handler

use anyhow::{bail, Result};

use txa::tui::theme::Theme;
use txa::Config;

use super::{load_config, paint};

/// Print the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(service_url: Option<&str>) -> Result<()> {
    let config = load_config(service_url)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}\nUse --force to overwrite it.",
            path.display()
        );
    }
    Config::default().save_to(&path)?;
    println!(
        "{}",
        paint(&format!("Wrote {}", path.display()), Theme::success_text)
    );
    Ok(())
}

/// Print where the configuration file lives.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
