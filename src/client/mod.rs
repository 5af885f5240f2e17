//! Access to the remote analysis service.
//!
//! The `AnalysisClient` trait is the seam between the request lifecycle and
//! the network: the controller and the TUI only ever see the trait, tests
//! substitute scripted implementations.

mod http;

pub use http::{HealthStatus, HttpAnalysisClient};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AnalysisError;
use crate::model::{AnalysisRequest, AnalysisResult};

/// The analysis collaborator.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Analyze one request. Exactly one call per dispatched request.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}

/// Pull a readable message out of an error body.
///
/// Handles `{"detail": "..."}` and request-validation bodies of the form
/// `{"detail": [{"msg": "..."}, ...]}`. Returns `None` for anything else.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .map(|msg| msg.strip_prefix("Value error, ").unwrap_or(msg))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
