//! Interactive analyzer
//!
//! One screen: a text editor on top, the result pane below, a status line
//! and a footer with key hints. Analysis requests run as tokio tasks and
//! report back through the app's event channel, so typing, scrolling,
//! copying and clearing all keep working while a request is in flight.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::app::App;
use super::event::{AppEvent, EventHandler};
use super::theme::current_theme;
use super::widgets::{InputWidget, ResultsView, TextInput};
use crate::client::AnalysisClient;
use crate::clipboard::ClipboardSink;
use crate::config::{Config, ExportConfig};
use crate::controller::{RequestLifecycleController, RequestState, SubmitError};
use crate::feedback::CopyFeedback;
use crate::report::{self, ExportError, ReportFormat};
use crate::serializer::{clipboard_text, Category};

/// How often the terminal thread sends a tick when idle.
const TICK_RATE: Duration = Duration::from_millis(250);

const INPUT_PLACEHOLDER: &str = "Enter the text to analyze...";

/// Message shown on the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Success(String),
    Error(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Info(text) | Status::Success(text) | Status::Error(text) => text,
        }
    }
}

/// Analyzer application state
pub struct AnalyzerApp {
    controller: RequestLifecycleController,
    input: TextInput,
    client: Arc<dyn AnalysisClient>,
    clipboard: Box<dyn ClipboardSink>,
    feedback: CopyFeedback<AppEvent>,
    tx: UnboundedSender<AppEvent>,
    /// Index into the categories available for the current result
    selected: usize,
    scroll: u16,
    status: Option<Status>,
    export: ExportConfig,
    should_quit: bool,
}

impl AnalyzerApp {
    /// Create the app and the receiving end of its event channel.
    pub fn new(
        client: Arc<dyn AnalysisClient>,
        clipboard: Box<dyn ClipboardSink>,
        config: &Config,
    ) -> (Self, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = Self {
            controller: RequestLifecycleController::new(config.analysis.min_text_length),
            input: TextInput::new(),
            client,
            clipboard,
            feedback: CopyFeedback::new(tx.clone()),
            tx,
            selected: 0,
            scroll: 0,
            status: None,
            export: config.export.clone(),
            should_quit: false,
        };
        (app, rx)
    }

    pub fn state(&self) -> &RequestState {
        self.controller.state()
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Category the copy key acts on.
    pub fn selected_category(&self) -> Option<Category> {
        let result = self.controller.result()?;
        Category::available(result).get(self.selected).copied()
    }

    /// Category currently showing the "Copied!" badge.
    pub fn copied_category(&self) -> Option<Category> {
        self.feedback.active().map(|active| active.category)
    }

    /// Run the event loop until the user quits.
    pub async fn run(mut self, mut rx: UnboundedReceiver<AppEvent>) -> Result<()> {
        let mut terminal = App::new()?;
        let _events = EventHandler::new(self.tx.clone(), TICK_RATE);

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            let Some(event) = rx.recv().await else {
                break;
            };
            if matches!(event, AppEvent::Resize(..)) {
                terminal.invalidate()?;
            }
            self.handle_event(event);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Analyzed { ticket, outcome } => {
                let succeeded = outcome.is_ok();
                if self.controller.resolve(ticket, outcome) && succeeded {
                    self.selected = 0;
                    self.scroll = 0;
                }
            }
            AppEvent::FeedbackExpired(expired) => {
                self.feedback.on_expired(expired);
            }
            AppEvent::Resize(..) | AppEvent::Tick => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::F(5) => self.submit(),
            KeyCode::Char('l') if ctrl => self.clear(),
            KeyCode::Char('y') if ctrl => self.copy_selected(),
            KeyCode::Char('e') if ctrl => self.export_report(),
            KeyCode::Tab => self.select_next(1),
            KeyCode::BackTab => self.select_next(-1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(5),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(5),

            // Editing
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.input.insert(c)
            }
            KeyCode::Enter => self.input.insert('\n'),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        let text = self.input.text().to_string();
        match self.controller.submit(&text) {
            Ok(dispatch) => {
                self.status = None;
                let client = self.client.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let outcome = client.analyze(&dispatch.request).await;
                    let _ = tx.send(AppEvent::Analyzed {
                        ticket: dispatch.ticket,
                        outcome,
                    });
                });
            }
            Err(SubmitError::Busy) => {
                self.status = Some(Status::Info(
                    "An analysis is already running.".to_string(),
                ));
            }
            // the result pane shows the validation message
            Err(SubmitError::Invalid(_)) => self.status = None,
        }
    }

    fn clear(&mut self) {
        self.controller.clear();
        self.input.clear();
        self.feedback.cancel();
        self.selected = 0;
        self.scroll = 0;
        self.status = None;
    }

    fn select_next(&mut self, step: isize) {
        let Some(result) = self.controller.result() else {
            return;
        };
        let count = Category::available(result).len() as isize;
        if count == 0 {
            return;
        }
        self.selected = (self.selected as isize + step).rem_euclid(count) as usize;
        if let Some(category) = self.selected_category() {
            let row = ResultsView::heading_row(self.controller.state(), category).unwrap_or(0);
            self.scroll = u16::try_from(row).unwrap_or(u16::MAX);
        }
    }

    fn copy_selected(&mut self) {
        let Some(category) = self.selected_category() else {
            self.status = Some(Status::Info("Nothing to copy yet.".to_string()));
            return;
        };
        let Some(text) = self
            .controller
            .result()
            .and_then(|result| clipboard_text(result, category))
        else {
            return;
        };

        match self.clipboard.copy_text(&text) {
            Ok(_) => {
                self.status = None;
                self.feedback.activate(category);
            }
            Err(e) => {
                tracing::warn!(%category, error = %e, "copy failed");
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    fn export_report(&mut self) {
        let outcome = match self.controller.result() {
            Some(result) => report::export(
                result,
                self.controller.input_text().unwrap_or_default(),
                &self.export.directory_path(),
                Some(self.export.file_name.as_str()),
                ReportFormat::Pdf,
            ),
            None => Err(ExportError::NoResult),
        };
        self.status = Some(match outcome {
            Ok(path) => Status::Success(format!("Report saved to {}", path.display())),
            Err(e) => Status::Error(e.to_string()),
        });
    }

    /// Render the whole screen.
    pub fn draw(&self, frame: &mut Frame) {
        let theme = current_theme();
        let [title_area, input_area, results_area, status_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Percentage(35),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" Text Analyzer", theme.accent_bold_style()),
                Span::styled(
                    format!("  {}", self.controller.state().name()),
                    theme.text_secondary_style(),
                ),
            ])),
            title_area,
        );

        let length = self.input.text().trim().chars().count();
        let input_block = Block::bordered()
            .title(" Text ")
            .title_bottom(format!(
                " {} characters (minimum {}) ",
                length,
                self.controller.min_length()
            ))
            .border_style(theme.accent_style());
        let input = InputWidget::new(&self.input)
            .block(input_block)
            .placeholder(INPUT_PLACEHOLDER);
        frame.set_cursor_position(input.cursor_position(input_area));
        frame.render_widget(input, input_area);

        let results = ResultsView::new(self.controller.state())
            .selected(self.selected_category())
            .copied(self.copied_category())
            .scroll(self.scroll)
            .block(
                Block::bordered()
                    .title(" Results ")
                    .border_style(theme.text_secondary_style()),
            );
        frame.render_widget(results, results_area);

        self.draw_status(frame, status_area);
        Self::draw_footer(frame, footer_area);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let theme = current_theme();
        let line = match &self.status {
            Some(Status::Info(text)) => Line::styled(format!(" {}", text), theme.text_style()),
            Some(Status::Success(text)) => {
                Line::styled(format!(" {}", text), theme.success_style())
            }
            Some(Status::Error(text)) => Line::styled(format!(" {}", text), theme.error_style()),
            None => Line::default(),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_footer(frame: &mut Frame, area: Rect) {
        let theme = current_theme();
        let hints = [
            ("Ctrl+S", " analyze  "),
            ("Ctrl+L", " clear  "),
            ("Tab", " select  "),
            ("Ctrl+Y", " copy  "),
            ("Ctrl+E", " export  "),
            ("Esc", " quit"),
        ];
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled(key, theme.accent_bold_style()));
            spans.push(Span::styled(label, theme.text_secondary_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
