//! Clipboard support for copying result categories.
//!
//! Text is piped into the first working platform tool (pbcopy on macOS,
//! wl-copy, xclip or xsel on Linux).
//!
//! # Example
//!
//! ```ignore
//! use txa::clipboard::copy_text_to_clipboard;
//!
//! let result = copy_text_to_clipboard("the: 3\ncat: 1")?;
//! println!("{}", result.message("Word Frequency"));
//! ```

pub mod copy;
mod error;
mod result;
pub mod tool;
pub mod tools;

pub use error::{ClipboardError, MAX_CONTENT_SIZE};
pub use result::{CopyMethod, CopyResult};

use copy::Copy;

/// Anything that can receive copied text.
///
/// The TUI and the `analyze --copy` command write through this so tests
/// can capture what would have reached the system clipboard.
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> Result<CopyResult, ClipboardError>;
}

/// Records copied text in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub contents: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.contents.last().map(String::as_str)
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<CopyResult, ClipboardError> {
        self.contents.push(text.to_string());
        Ok(CopyResult::new(CopyMethod::Memory, text.len()))
    }
}

/// Copy text to the system clipboard.
///
/// # Errors
/// - `ClipboardError::NoToolAvailable` - no clipboard tool found
/// - `ClipboardError::Failed` - a tool was found but every attempt failed
/// - `ClipboardError::TooLarge` - text exceeds the size limit
pub fn copy_text_to_clipboard(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}
