//! Outcome types for clipboard copies.

/// The program that performed a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Pbcopy,
    WlCopy,
    Xclip,
    Xsel,
    /// In-process buffer, no system clipboard involved.
    Memory,
}

impl CopyMethod {
    pub fn name(&self) -> &'static str {
        match self {
            CopyMethod::Pbcopy => "pbcopy",
            CopyMethod::WlCopy => "wl-copy",
            CopyMethod::Xclip => "xclip",
            CopyMethod::Xsel => "xsel",
            CopyMethod::Memory => "memory",
        }
    }
}

/// A successful copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyResult {
    pub tool: CopyMethod,
    pub size_bytes: usize,
}

impl CopyResult {
    pub fn new(tool: CopyMethod, size_bytes: usize) -> Self {
        Self { tool, size_bytes }
    }

    /// Human-readable confirmation, e.g. "Copied Word Frequency to clipboard".
    pub fn message(&self, label: &str) -> String {
        format!("Copied {} to clipboard", label)
    }
}
