//! HTTP implementation of the analysis client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{extract_detail, AnalysisClient};
use crate::config::ServiceConfig;
use crate::error::AnalysisError;
use crate::model::{AnalysisRequest, AnalysisResult, SummarizeRequest, SummarizeResponse};

const USER_AGENT_VALUE: &str = concat!("txa/", env!("CARGO_PKG_VERSION"));

const ANALYZE_PATH: &str = "api/analyze/";
const SUMMARIZE_PATH: &str = "api/summarize/";
const HEALTH_PATH: &str = "health";

/// Response of the service health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Talks JSON to the analysis service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpAnalysisClient {
    /// Create a client for the service at `base_url`.
    ///
    /// `timeout` bounds each whole request, connect included.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AnalysisError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| AnalysisError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, AnalysisError> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Request an extractive summary.
    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResponse, AnalysisError> {
        self.post_json(SUMMARIZE_PATH, request).await
    }

    /// Query the health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, AnalysisError> {
        let url = self.endpoint(HEALTH_PATH);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        handle_response(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AnalysisError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let result = handle_response(response).await;
        if let Err(err) = &result {
            tracing::warn!(%url, error = %err, "analysis service request failed");
        }
        result
    }

    fn classify(&self, err: reqwest::Error) -> AnalysisError {
        if err.is_timeout() {
            AnalysisError::timeout(self.timeout)
        } else {
            err.into()
        }
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        self.post_json(ANALYZE_PATH, request).await
    }
}

/// Check the status and decode the body.
async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AnalysisError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(AnalysisError::Service {
            status: status.as_u16(),
            detail: extract_detail(&body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}
