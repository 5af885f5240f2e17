//! User-facing error handling for analysis requests.
//!
//! Every variant ends up as the single `Error(message)` request state; the
//! variants only exist so callers and logs can tell the failure modes apart.

use std::time::Duration;
use thiserror::Error;

/// Shown when the service gave no usable detail.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while analyzing the text.";

/// Errors that can occur while submitting text for analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Input too short. Raised locally, nothing is sent.
    #[error("Please enter at least {min_length} characters.")]
    Validation { min_length: usize, actual: usize },

    /// Connection failure or timeout.
    #[error("Could not reach the analysis service: {0}")]
    Transport(String),

    /// Non-success status from the service.
    #[error("Analysis service returned {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Service { status: u16, detail: Option<String> },

    /// Success status but the body did not match the result schema.
    #[error("Malformed response from analysis service: {0}")]
    MalformedResponse(String),
}

impl AnalysisError {
    pub fn timeout(after: Duration) -> Self {
        AnalysisError::Transport(format!("request timed out after {}s", after.as_secs()))
    }

    /// Message for the `Error` request state.
    ///
    /// Validation errors explain themselves; service errors use the
    /// service's own detail when it sent one; everything else gets the
    /// generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::Validation { .. } => self.to_string(),
            AnalysisError::Service {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AnalysisError::Validation { .. })
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AnalysisError::MalformedResponse(err.to_string())
        } else if err.is_timeout() {
            AnalysisError::Transport("request timed out".to_string())
        } else {
            AnalysisError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::MalformedResponse(err.to_string())
    }
}
