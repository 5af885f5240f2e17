//! Copy orchestrator for clipboard operations.

use super::error::{ClipboardError, MAX_CONTENT_SIZE};
use super::result::CopyResult;
use super::tool::{CopyTool, CopyToolError};
use super::tools::platform_tools;
use super::ClipboardSink;

/// Orchestrates clipboard copies using available tools.
///
/// Tools are tried in order; the first available tool that succeeds wins.
pub struct Copy {
    tools: Vec<Box<dyn CopyTool>>,
}

impl Copy {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn CopyTool>>) -> Self {
        Self { tools }
    }

    /// Put `text` on the clipboard.
    pub fn text(&self, text: &str) -> Result<CopyResult, ClipboardError> {
        if text.len() > MAX_CONTENT_SIZE {
            return Err(ClipboardError::TooLarge {
                size_mb: text.len() as f64 / (1024.0 * 1024.0),
                max_mb: MAX_CONTENT_SIZE / (1024 * 1024),
            });
        }

        let mut last_error: Option<String> = None;
        for tool in self.tools.iter().filter(|tool| tool.is_available()) {
            match tool.try_copy_text(text) {
                Ok(()) => {
                    tracing::debug!(tool = tool.name(), bytes = text.len(), "copied to clipboard");
                    return Ok(CopyResult::new(tool.method(), text.len()));
                }
                Err(CopyToolError::NotSupported) | Err(CopyToolError::NotFound) => continue,
                Err(CopyToolError::Failed(msg)) => {
                    tracing::warn!(tool = tool.name(), error = %msg, "clipboard tool failed, trying next");
                    last_error = Some(msg);
                }
            }
        }

        match last_error {
            Some(err) => {
                tracing::warn!(last_error = %err, "all clipboard tools failed");
                Err(ClipboardError::Failed(err))
            }
            None => Err(ClipboardError::NoToolAvailable),
        }
    }
}

impl Default for Copy {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for Copy {
    fn copy_text(&mut self, text: &str) -> Result<CopyResult, ClipboardError> {
        self.text(text)
    }
}
