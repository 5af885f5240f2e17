//! Clipboard orchestration with stand-in tools

use std::sync::{Arc, Mutex};

use txa::clipboard::copy::Copy;
use txa::clipboard::tool::{CopyTool, CopyToolError};
use txa::clipboard::{ClipboardError, ClipboardSink, CopyMethod, MemoryClipboard, MAX_CONTENT_SIZE};
use txa::serializer::{clipboard_text, Category};

use crate::helpers::sample_result;

/// Records what it was asked to copy.
struct Recording {
    method: CopyMethod,
    available: bool,
    outcome: Result<(), CopyToolError>,
    copied: Arc<Mutex<Vec<String>>>,
}

impl Recording {
    fn boxed(
        method: CopyMethod,
        available: bool,
        outcome: Result<(), CopyToolError>,
        copied: &Arc<Mutex<Vec<String>>>,
    ) -> Box<dyn CopyTool> {
        Box::new(Self {
            method,
            available,
            outcome,
            copied: copied.clone(),
        })
    }
}

impl CopyTool for Recording {
    fn method(&self) -> CopyMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        self.copied.lock().unwrap().push(text.to_string());
        self.outcome.clone()
    }
}

#[test]
fn category_text_reaches_the_first_working_tool() {
    let copied = Arc::new(Mutex::new(Vec::new()));
    let mut copy = Copy::with_tools(vec![
        Recording::boxed(CopyMethod::Pbcopy, false, Ok(()), &copied),
        Recording::boxed(
            CopyMethod::WlCopy,
            true,
            Err(CopyToolError::Failed("no display".into())),
            &copied,
        ),
        Recording::boxed(CopyMethod::Xclip, true, Ok(()), &copied),
    ]);

    let text = clipboard_text(&sample_result(), Category::WordFrequency).unwrap();
    let result = copy.copy_text(&text).unwrap();

    assert_eq!(result.tool, CopyMethod::Xclip);
    assert_eq!(result.size_bytes, "the: 3\ncat: 1".len());
    // wl-copy was tried and failed, xclip succeeded
    assert_eq!(
        copied.lock().unwrap().as_slice(),
        ["the: 3\ncat: 1", "the: 3\ncat: 1"]
    );
}

#[test]
fn oversized_text_is_refused_before_any_tool_runs() {
    let copied = Arc::new(Mutex::new(Vec::new()));
    let copy = Copy::with_tools(vec![Recording::boxed(
        CopyMethod::Xsel,
        true,
        Ok(()),
        &copied,
    )]);

    let big = "x".repeat(MAX_CONTENT_SIZE + 1);
    assert!(matches!(
        copy.text(&big),
        Err(ClipboardError::TooLarge { max_mb: 10, .. })
    ));
    assert!(copied.lock().unwrap().is_empty());
}

#[test]
fn no_tools_means_no_tool_available() {
    let copy = Copy::with_tools(Vec::new());
    assert_eq!(copy.text("anything"), Err(ClipboardError::NoToolAvailable));
}

#[test]
fn memory_clipboard_keeps_history() {
    let mut clipboard = MemoryClipboard::new();
    let result = sample_result();
    for category in [Category::Statistics, Category::PassiveVoice] {
        let text = clipboard_text(&result, category).unwrap();
        clipboard.copy_text(&text).unwrap();
    }
    assert_eq!(clipboard.contents.len(), 2);
    assert_eq!(clipboard.last(), Some("The mat was sat on by the cat."));
}
