//! Clipboard operation errors.

/// Maximum text size handed to a clipboard tool (10 MB).
pub const MAX_CONTENT_SIZE: usize = 10 * 1024 * 1024;

/// Errors that can occur during clipboard operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available. On Linux, install xclip, xsel, or wl-copy.")]
    NoToolAvailable,

    /// Every available tool ran and failed; carries the last failure.
    #[error("Clipboard copy failed: {0}")]
    Failed(String),

    #[error("Text too large for clipboard ({size_mb:.1} MB). Maximum is {max_mb} MB.")]
    TooLarge { size_mb: f64, max_mb: usize },
}
