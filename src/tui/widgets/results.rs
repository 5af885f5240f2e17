//! Result pane
//!
//! Renders the request state: a hint while idle, a pending line while
//! loading, the error message, or every available category with its
//! on-screen text. The selected category is highlighted and the category
//! last copied carries a "Copied!" badge until its feedback expires.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::controller::RequestState;
use crate::serializer::{display_text, Category};
use crate::tui::theme::current_theme;

pub const IDLE_HINT: &str = "Type or paste text above, then press Ctrl+S to analyze.";
pub const LOADING_TEXT: &str = "Analyzing...";
pub const COPIED_BADGE: &str = "Copied!";

pub struct ResultsView<'a> {
    state: &'a RequestState,
    selected: Option<Category>,
    copied: Option<Category>,
    scroll: u16,
    block: Option<Block<'a>>,
}

impl<'a> ResultsView<'a> {
    pub fn new(state: &'a RequestState) -> Self {
        Self {
            state,
            selected: None,
            copied: None,
            scroll: 0,
            block: None,
        }
    }

    pub fn selected(mut self, category: Option<Category>) -> Self {
        self.selected = category;
        self
    }

    pub fn copied(mut self, category: Option<Category>) -> Self {
        self.copied = category;
        self
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Lines for the current state, before wrapping.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let theme = current_theme();
        match self.state {
            RequestState::Idle => vec![Line::styled(IDLE_HINT, theme.text_secondary_style())],
            RequestState::Loading => vec![Line::styled(LOADING_TEXT, theme.pending_style())],
            RequestState::Error(message) => {
                vec![Line::styled(message.clone(), theme.error_style())]
            }
            RequestState::Success(result) => {
                let mut lines = Vec::new();
                for category in Category::available(result) {
                    if !lines.is_empty() {
                        lines.push(Line::default());
                    }

                    let heading_style = if self.selected == Some(category) {
                        theme.highlight_style()
                    } else {
                        theme.accent_bold_style()
                    };
                    let mut heading = vec![Span::styled(category.label(), heading_style)];
                    if self.copied == Some(category) {
                        heading.push(Span::raw("  "));
                        heading.push(Span::styled(COPIED_BADGE, theme.success_style()));
                    }
                    lines.push(Line::from(heading));

                    let body = display_text(result, category).unwrap_or_default();
                    for line in body.lines() {
                        lines.push(Line::styled(format!("  {}", line), theme.text_style()));
                    }
                }
                lines
            }
        }
    }

    /// Row of the heading for `category` in the unwrapped line list.
    pub fn heading_row(state: &RequestState, category: Category) -> Option<usize> {
        let result = state.result()?;
        let mut row = 0;
        for candidate in Category::available(result) {
            if row > 0 {
                row += 1;
            }
            if candidate == category {
                return Some(row);
            }
            let body = display_text(result, candidate).unwrap_or_default();
            row += 1 + body.lines().count();
        }
        None
    }
}

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let mut paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}
