//! Multi-line text input
//!
//! `TextInput` is the editing state; `InputWidget` draws it hard-wrapped to
//! the available width and reports where the cursor ended up.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Editable text with a cursor measured in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole text and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert(c);
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Move to the start of the current line.
    pub fn move_home(&mut self) {
        let before: Vec<char> = self.text.chars().take(self.cursor).collect();
        let line_start = before
            .iter()
            .rposition(|c| *c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        self.cursor = line_start;
    }

    /// Move to the end of the current line.
    pub fn move_end(&mut self) {
        let rest = self
            .text
            .chars()
            .skip(self.cursor)
            .position(|c| c == '\n')
            .unwrap_or(self.char_count() - self.cursor);
        self.cursor += rest;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Hard-wrap into rows of at most `width` columns.
    ///
    /// Returns the rows and the cursor as (row, column).
    pub fn wrapped(&self, width: usize) -> (Vec<String>, (usize, usize)) {
        let width = width.max(1);
        let mut rows = vec![String::new()];
        let mut col = 0;
        let mut cursor = None;

        for (index, c) in self.text.chars().enumerate() {
            let w = c.width().unwrap_or(0);
            if c != '\n' && col > 0 && col + w > width {
                rows.push(String::new());
                col = 0;
            }
            if index == self.cursor {
                cursor = Some((rows.len() - 1, col));
            }
            if c == '\n' {
                rows.push(String::new());
                col = 0;
                continue;
            }
            if let Some(row) = rows.last_mut() {
                row.push(c);
            }
            col += w;
        }

        let cursor = cursor.unwrap_or((rows.len() - 1, col.min(width.saturating_sub(1))));
        (rows, cursor)
    }
}

/// Draws a `TextInput` inside an optional block.
pub struct InputWidget<'a> {
    input: &'a TextInput,
    block: Option<Block<'a>>,
    placeholder: &'a str,
}

impl<'a> InputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            block: None,
            placeholder: "",
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Screen position of the cursor when rendered into `area`.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner = self.inner(area);
        let (_, (row, col)) = self.input.wrapped(inner.width as usize);
        let scroll = Self::scroll(row, inner.height as usize);
        Position::new(inner.x + col as u16, inner.y + (row - scroll) as u16)
    }

    fn inner(&self, area: Rect) -> Rect {
        match &self.block {
            Some(block) => block.inner(area),
            None => area,
        }
    }

    /// First visible row so the cursor row stays on screen.
    fn scroll(cursor_row: usize, height: usize) -> usize {
        if height == 0 {
            return 0;
        }
        (cursor_row + 1).saturating_sub(height)
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = self.inner(area);
        if let Some(block) = self.block.clone() {
            block.render(area, buf);
        }

        let theme = crate::tui::theme::current_theme();
        if self.input.is_empty() {
            Paragraph::new(self.placeholder)
                .style(theme.text_secondary_style())
                .render(inner, buf);
            return;
        }

        let (rows, (row, _)) = self.input.wrapped(inner.width as usize);
        let scroll = Self::scroll(row, inner.height as usize);
        let lines: Vec<Line> = rows
            .into_iter()
            .skip(scroll)
            .take(inner.height as usize)
            .map(Line::from)
            .collect();
        Paragraph::new(lines)
            .style(theme.text_style())
            .render(inner, buf);
    }
}
