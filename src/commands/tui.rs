//! Interactive analyzer handler

use std::sync::Arc;

use anyhow::Result;

use txa::client::HttpAnalysisClient;
use txa::clipboard::copy::Copy;
use txa::tui::AnalyzerApp;
use txa::Config;

/// Open the analyzer against the configured service.
#[cfg(not(tarpaulin_include))]
pub async fn handle(config: &Config) -> Result<()> {
    let client = Arc::new(HttpAnalysisClient::from_config(&config.service)?);
    tracing::info!(base_url = client.base_url(), "starting analyzer");
    let (app, rx) = AnalyzerApp::new(client, Box::new(Copy::new()), config);
    app.run(rx).await
}
