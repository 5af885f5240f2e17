//! Health command handler

use anyhow::{bail, Result};

use txa::client::HttpAnalysisClient;
use txa::tui::theme::Theme;
use txa::Config;

use super::paint;

/// Query the service health endpoint.
///
/// Succeeds only when the service answers `{"status": "healthy"}`.
#[cfg(not(tarpaulin_include))]
pub async fn handle(config: &Config) -> Result<()> {
    let client = HttpAnalysisClient::from_config(&config.service)?;
    let url = client.base_url().to_string();

    match client.health().await {
        Ok(status) if status.is_healthy() => {
            println!(
                "{}",
                paint(&format!("Service at {} is healthy", url), Theme::success_text)
            );
            Ok(())
        }
        Ok(status) => bail!("Service at {} reported status '{}'", url, status.status),
        Err(err) => {
            tracing::debug!(error = ?err, "health check failed");
            bail!("Service at {} is unreachable: {}", url, err)
        }
    }
}
