//! Lays out report sections onto fixed-size pages.
//!
//! # Algorithm
//!
//! 1. The title and generation line are placed at the top of page 1.
//! 2. Each section starts on a new page when less than the section
//!    threshold is left on the current one, so a heading never ends up
//!    alone at the bottom of a page.
//! 3. Body strings are wrapped independently; a line that would fall below
//!    the content bottom moves to the top margin of a new page.
//!
//! The result is plain data. `render` replays it into a `DocumentBuilder`.

use super::builder::DocumentBuilder;
use super::error::ExportError;
use super::layout::{wrap_text, PageLayout, TextMeasure};
use crate::serializer::Section;

/// How a placed line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Timestamp,
    Heading,
    Body,
}

/// A line of text at a fixed position on its page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    /// Baseline, measured from the top edge of the page.
    pub y: f32,
    pub style: LineStyle,
    /// Index of the owning section; `None` for the document header.
    pub section: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub lines: Vec<PlacedLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDocument {
    pub pages: Vec<Page>,
}

impl PaginatedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every placed line with its page number, in document order.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &PlacedLine)> {
        self.pages
            .iter()
            .flat_map(|page| page.lines.iter().map(move |line| (page.number, line)))
    }

    /// Section headings in document order.
    pub fn headings(&self) -> Vec<&str> {
        self.lines()
            .filter(|(_, line)| line.style == LineStyle::Heading)
            .map(|(_, line)| line.text.as_str())
            .collect()
    }

    /// Wrapped body lines of one section, ignoring page boundaries.
    pub fn section_body(&self, section: usize) -> Vec<&str> {
        self.lines()
            .filter(|(_, line)| line.style == LineStyle::Body && line.section == Some(section))
            .map(|(_, line)| line.text.as_str())
            .collect()
    }
}

/// Cursor over the pages being produced.
struct Layouter<'a> {
    layout: &'a PageLayout,
    pages: Vec<Page>,
    y: f32,
}

impl<'a> Layouter<'a> {
    fn new(layout: &'a PageLayout) -> Self {
        Self {
            layout,
            pages: vec![Page {
                number: 1,
                lines: Vec::new(),
            }],
            y: layout.margin,
        }
    }

    fn remaining(&self) -> f32 {
        self.layout.content_bottom() - self.y
    }

    fn new_page(&mut self) {
        let number = self.pages.len() + 1;
        self.pages.push(Page {
            number,
            lines: Vec::new(),
        });
        self.y = self.layout.margin;
    }

    fn emit(&mut self, text: String, style: LineStyle, section: Option<usize>) {
        let line = PlacedLine {
            text,
            x: self.layout.margin,
            y: self.y,
            style,
            section,
        };
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
    }

    fn finish(self) -> PaginatedDocument {
        PaginatedDocument { pages: self.pages }
    }
}

/// Lay out a titled document.
///
/// `layout` is expected to pass `PageLayout::validate`.
pub fn paginate(
    title: &str,
    generated: &str,
    sections: &[Section],
    layout: &PageLayout,
    metrics: &dyn TextMeasure,
) -> PaginatedDocument {
    let mut cursor = Layouter::new(layout);

    cursor.emit(title.to_string(), LineStyle::Title, None);
    cursor.y += layout.timestamp_offset;
    cursor.emit(generated.to_string(), LineStyle::Timestamp, None);
    cursor.y = layout.margin + layout.header_height;

    for (index, section) in sections.iter().enumerate() {
        if cursor.remaining() < layout.section_threshold {
            cursor.new_page();
        }

        cursor.emit(section.title.clone(), LineStyle::Heading, Some(index));
        cursor.y += layout.heading_advance;

        for body in &section.lines {
            for line in wrap_text(body, layout.max_line_width, layout.body_size, metrics) {
                if cursor.y > layout.content_bottom() {
                    cursor.new_page();
                }
                cursor.emit(line, LineStyle::Body, Some(index));
                cursor.y += layout.line_height;
            }
        }

        cursor.y += layout.section_gap;
    }

    tracing::debug!(
        sections = sections.len(),
        pages = cursor.pages.len(),
        "paginated report"
    );
    cursor.finish()
}

/// Replay a paginated document into a builder and return the saved bytes.
pub fn render(
    document: &PaginatedDocument,
    layout: &PageLayout,
    builder: &mut dyn DocumentBuilder,
) -> Result<Vec<u8>, ExportError> {
    for page in &document.pages {
        if page.number > 1 {
            builder.new_page();
        }
        for line in &page.lines {
            match line.style {
                LineStyle::Title => builder.add_heading(&line.text, line.x, line.y, layout.title_size),
                LineStyle::Heading => {
                    builder.add_heading(&line.text, line.x, line.y, layout.heading_size)
                }
                LineStyle::Timestamp | LineStyle::Body => {
                    builder.add_line(&line.text, line.x, line.y, layout.body_size)
                }
            }
        }
    }
    builder.save()
}
