//! Wayland wl-copy clipboard tool.

use super::pipe_text;
use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{CopyTool, CopyToolError};

/// Wayland clipboard via `wl-copy` (wl-clipboard).
///
/// Only offered inside a Wayland session.
#[derive(Debug, Default)]
pub struct WlCopy;

impl WlCopy {
    pub fn new() -> Self {
        Self
    }

    fn in_wayland_session() -> bool {
        std::env::var_os("WAYLAND_DISPLAY").is_some()
    }
}

impl CopyTool for WlCopy {
    fn method(&self) -> CopyMethod {
        CopyMethod::WlCopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && Self::in_wayland_session()
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_text("wl-copy", &["--type", "text/plain;charset=utf-8"], text)
    }
}
