//! Clipboard tool abstraction.

use super::result::CopyMethod;

/// Why a single tool could not copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// The tool cannot handle this kind of copy.
    NotSupported,
    /// The tool binary is not installed.
    NotFound,
    /// The tool ran and failed.
    Failed(String),
}

/// One external program that can put text on the system clipboard.
pub trait CopyTool: Send + Sync {
    fn method(&self) -> CopyMethod;

    /// Display name; defaults to the method name.
    fn name(&self) -> &'static str {
        self.method().name()
    }

    /// Whether the tool can be used on this machine right now.
    fn is_available(&self) -> bool;

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;
}
