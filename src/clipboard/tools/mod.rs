//! Platform clipboard tools.

mod pbcopy;
mod wl_copy;
mod xclip;
mod xsel;

pub use pbcopy::Pbcopy;
pub use wl_copy::WlCopy;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use super::tool::{CopyTool, CopyToolError};

/// Tools for the current platform, in priority order.
///
/// Wayland comes before X11 so a session running both prefers the native
/// clipboard.
pub fn platform_tools() -> Vec<Box<dyn CopyTool>> {
    vec![
        Box::new(Pbcopy::new()),
        Box::new(WlCopy::new()),
        Box::new(Xclip::new()),
        Box::new(Xsel::new()),
    ]
}

/// Run `program args...` with `text` on stdin and wait for it to exit.
///
/// Output is not captured: xclip and xsel fork a daemon that keeps the
/// selection alive and inherits the tool's stdio, so reading to EOF would
/// block until another program takes the selection. A program that is not
/// installed maps to `NotFound`.
pub(crate) fn pipe_text(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(format!("{}: {}", program, e)),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            drop(stdin);
            // reap the child so it does not linger as a zombie
            let _ = child.wait();
            return Err(CopyToolError::Failed(format!("{}: {}", program, e)));
        }
        // stdin drops here so the tool sees EOF
    }

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(format!("{}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!("{} exited with {}", program, status)))
    }
}
