//! Analyzer app tests driven through its event channel

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;

use txa::client::AnalysisClient;
use txa::clipboard::{ClipboardError, ClipboardSink, CopyMethod, CopyResult};
use txa::error::AnalysisError;
use txa::model::{AnalysisRequest, AnalysisResult};
use txa::serializer::Category;
use txa::tui::event::AppEvent;
use txa::tui::AnalyzerApp;
use txa::Config;

use crate::helpers::{sample_result, SAMPLE_TEXT};

struct Scripted;

#[async_trait]
impl AnalysisClient for Scripted {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        Ok(sample_result())
    }
}

#[derive(Clone, Default)]
struct SharedClipboard(Arc<Mutex<Vec<String>>>);

impl ClipboardSink for SharedClipboard {
    fn copy_text(&mut self, text: &str) -> Result<CopyResult, ClipboardError> {
        self.0.lock().unwrap().push(text.to_string());
        Ok(CopyResult::new(CopyMethod::Memory, text.len()))
    }
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// App with `SAMPLE_TEXT` analyzed.
async fn analyzed_app() -> (AnalyzerApp, UnboundedReceiver<AppEvent>, SharedClipboard) {
    let clipboard = SharedClipboard::default();
    let (mut app, mut rx) = AnalyzerApp::new(
        Arc::new(Scripted),
        Box::new(clipboard.clone()),
        &Config::default(),
    );
    for c in SAMPLE_TEXT.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(ctrl('s'));
    let event = rx.recv().await.unwrap();
    assert!(matches!(event, AppEvent::Analyzed { .. }));
    app.handle_event(event);
    (app, rx, clipboard)
}

fn screen(app: &AnalyzerApp) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..40 {
        for x in 0..80 {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[tokio::test(start_paused = true)]
async fn copy_badge_disappears_after_two_seconds() {
    let (mut app, mut rx, clipboard) = analyzed_app().await;

    app.handle_key(ctrl('y'));
    let copied_at = Instant::now();
    assert_eq!(app.copied_category(), Some(Category::Statistics));
    assert_eq!(clipboard.0.lock().unwrap().len(), 1);
    assert!(screen(&app).contains("Copied!"));

    tokio::time::advance(Duration::from_millis(1999)).await;
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());
    assert_eq!(app.copied_category(), Some(Category::Statistics));

    let event = rx.recv().await.unwrap();
    assert!(matches!(event, AppEvent::FeedbackExpired(_)));
    assert!(copied_at.elapsed() >= Duration::from_millis(2000));
    app.handle_event(event);

    assert_eq!(app.copied_category(), None);
    assert!(!screen(&app).contains("Copied!"));
}

#[tokio::test(start_paused = true)]
async fn copying_again_restarts_the_badge_timer() {
    let (mut app, mut rx, clipboard) = analyzed_app().await;

    app.handle_key(ctrl('y'));
    tokio::time::advance(Duration::from_millis(1500)).await;

    app.handle_key(key(KeyCode::Tab));
    app.handle_key(ctrl('y'));
    let second_copy = Instant::now();
    assert_eq!(app.copied_category(), Some(Category::Readability));
    assert_eq!(clipboard.0.lock().unwrap().len(), 2);

    // the first timer would have fired here
    tokio::time::advance(Duration::from_millis(1000)).await;
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());
    assert_eq!(app.copied_category(), Some(Category::Readability));

    let event = rx.recv().await.unwrap();
    assert!(second_copy.elapsed() >= Duration::from_millis(2000));
    app.handle_event(event);
    assert_eq!(app.copied_category(), None);
}

#[tokio::test(start_paused = true)]
async fn clear_hides_the_badge_and_the_results() {
    let (mut app, mut rx, _) = analyzed_app().await;

    app.handle_key(ctrl('y'));
    app.handle_key(ctrl('l'));
    assert_eq!(app.copied_category(), None);
    assert!(app.state().result().is_none());

    tokio::time::advance(Duration::from_millis(2500)).await;
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn results_pane_lists_the_sample_categories() {
    let (app, _rx, _) = analyzed_app().await;
    let screen = screen(&app);

    assert!(screen.contains("Text Statistics"));
    assert!(screen.contains("Words: 14"));
    assert!(screen.contains("Very Easy"));
}
