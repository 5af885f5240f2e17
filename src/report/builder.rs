//! Output backends for paginated documents.

use super::error::ExportError;

/// Minimal drawing surface the paginator renders into.
///
/// Coordinates are in layout units with `y` measured from the top of the
/// page; the first page exists implicitly.
pub trait DocumentBuilder {
    fn add_heading(&mut self, text: &str, x: f32, y: f32, font_size: f32);

    fn add_line(&mut self, text: &str, x: f32, y: f32, font_size: f32);

    fn new_page(&mut self);

    /// Finish the document and return its bytes.
    fn save(&mut self) -> Result<Vec<u8>, ExportError>;
}

/// Separates pages in plain text output.
pub const PAGE_SEPARATOR: &str = "\u{c}\n";

/// Renders onto a character grid; one layout unit is one cell.
///
/// Headings are underlined on the row below them.
#[derive(Debug, Default)]
pub struct TextBuilder {
    pages: Vec<Vec<String>>,
}

impl TextBuilder {
    pub fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
        }
    }

    fn put(&mut self, text: &str, x: f32, y: f32) {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let Some(rows) = self.pages.last_mut() else {
            return;
        };

        let row = y.round().max(0.0) as usize;
        if rows.len() <= row {
            rows.resize(row + 1, String::new());
        }
        let indent = x.round().max(0.0) as usize;
        rows[row] = format!("{}{}", " ".repeat(indent), text);
    }
}

impl DocumentBuilder for TextBuilder {
    fn add_heading(&mut self, text: &str, x: f32, y: f32, _font_size: f32) {
        self.put(text, x, y);
        let underline = "-".repeat(unicode_width::UnicodeWidthStr::width(text));
        self.put(&underline, x, y + 1.0);
    }

    fn add_line(&mut self, text: &str, x: f32, y: f32, _font_size: f32) {
        self.put(text, x, y);
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn save(&mut self) -> Result<Vec<u8>, ExportError> {
        let pages: Vec<String> = self
            .pages
            .iter()
            .map(|rows| {
                let mut page = rows
                    .iter()
                    .map(|row| row.trim_end())
                    .collect::<Vec<_>>()
                    .join("\n");
                page.truncate(page.trim_end().len());
                page.push('\n');
                page
            })
            .collect();
        Ok(pages.join(PAGE_SEPARATOR).into_bytes())
    }
}
