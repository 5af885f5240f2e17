//! Page geometry, font metrics and word wrapping.
//!
//! Lengths are in the layout's own unit (millimetres for the PDF layout,
//! character cells for the plain text layout); font sizes are in points.
//! A `TextMeasure` converts a string at a font size into layout units.

use thiserror::Error;
use unicode_width::UnicodeWidthStr;

/// Points per millimetre.
pub const MM_TO_PT: f32 = 72.0 / 25.4;

/// Fixed page geometry for the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    /// Top, left and bottom margin.
    pub margin: f32,
    pub line_height: f32,
    pub max_line_width: f32,
    /// Minimum space left on a page to start a new section there.
    pub section_threshold: f32,
    /// Cursor advance after a section heading.
    pub heading_advance: f32,
    /// Extra space after the last line of a section.
    pub section_gap: f32,
    /// Vertical space taken by the document header on the first page.
    pub header_height: f32,
    /// Offset of the timestamp line below the title.
    pub timestamp_offset: f32,
    pub title_size: f32,
    pub heading_size: f32,
    pub body_size: f32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("{0} must be positive")]
    NotPositive(&'static str),

    #[error("line width {width} does not fit between the margins ({available} available)")]
    TooWide { width: f32, available: f32 },

    #[error("section threshold {threshold} cannot hold a heading and its first line ({needed})")]
    ThresholdTooSmall { threshold: f32, needed: f32 },

    #[error("header ({header}) leaves no room on the first page")]
    HeaderTooTall { header: f32 },
}

impl PageLayout {
    /// A4 portrait in millimetres.
    pub const A4: PageLayout = PageLayout {
        page_width: 210.0,
        page_height: 297.0,
        margin: 20.0,
        line_height: 7.0,
        max_line_width: 170.0,
        section_threshold: 30.0,
        heading_advance: 10.0,
        section_gap: 5.0,
        header_height: 25.0,
        timestamp_offset: 10.0,
        title_size: 20.0,
        heading_size: 14.0,
        body_size: 11.0,
    };

    /// 80-column plain text pages, in character cells.
    pub const TEXT: PageLayout = PageLayout {
        page_width: 80.0,
        page_height: 60.0,
        margin: 2.0,
        line_height: 1.0,
        max_line_width: 76.0,
        section_threshold: 4.0,
        heading_advance: 2.0,
        section_gap: 1.0,
        header_height: 4.0,
        timestamp_offset: 2.0,
        title_size: 1.0,
        heading_size: 1.0,
        body_size: 1.0,
    };

    /// Lowest cursor position a line may be placed at.
    pub fn content_bottom(&self) -> f32 {
        self.page_height - self.margin
    }

    /// Check the geometric invariants the paginator relies on.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (name, value) in [
            ("page width", self.page_width),
            ("page height", self.page_height),
            ("line height", self.line_height),
            ("max line width", self.max_line_width),
            ("body font size", self.body_size),
        ] {
            if value <= 0.0 {
                return Err(LayoutError::NotPositive(name));
            }
        }

        let available = self.page_width - 2.0 * self.margin;
        if self.max_line_width > available {
            return Err(LayoutError::TooWide {
                width: self.max_line_width,
                available,
            });
        }

        let needed = self.heading_advance + self.line_height;
        if self.section_threshold < needed {
            return Err(LayoutError::ThresholdTooSmall {
                threshold: self.section_threshold,
                needed,
            });
        }

        if self.margin + self.header_height + self.section_threshold > self.content_bottom() {
            return Err(LayoutError::HeaderTooTall {
                header: self.header_height,
            });
        }

        Ok(())
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::A4
    }
}

/// Measures rendered text width in layout units.
pub trait TextMeasure {
    fn width(&self, text: &str, font_size: f32) -> f32;
}

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Width used for characters outside the table.
const HELVETICA_DEFAULT_WIDTH: u16 = 556;

/// Standard Helvetica metrics, measured in millimetres.
#[derive(Debug, Clone, Copy, Default)]
pub struct Helvetica;

impl Helvetica {
    fn glyph_width(c: char) -> u16 {
        let code = c as u32;
        if (32..=126).contains(&code) {
            HELVETICA_WIDTHS[(code - 32) as usize]
        } else {
            HELVETICA_DEFAULT_WIDTH
        }
    }
}

impl TextMeasure for Helvetica {
    fn width(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(Self::glyph_width(c))).sum();
        units as f32 / 1000.0 * font_size / MM_TO_PT
    }
}

/// Fixed-pitch metrics: one unit per terminal column, font size ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Monospace;

impl TextMeasure for Monospace {
    fn width(&self, text: &str, _font_size: f32) -> f32 {
        text.width() as f32
    }
}

/// Wrap `text` at word boundaries so no line is wider than `max_width`.
///
/// Newlines are hard breaks and blank paragraphs become empty lines. Runs
/// of whitespace collapse to one space at the joins. A word wider than the
/// whole line is split between characters.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font_size: f32,
    metrics: &dyn TextMeasure,
) -> Vec<String> {
    let fits = |candidate: &str| metrics.width(candidate, font_size) <= max_width;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut has_words = false;

        for word in paragraph.split_whitespace() {
            has_words = true;

            if !current.is_empty() {
                let candidate = format!("{} {}", current, word);
                if fits(&candidate) {
                    current = candidate;
                    continue;
                }
                lines.push(std::mem::take(&mut current));
            }

            if fits(word) {
                current.push_str(word);
                continue;
            }

            for c in word.chars() {
                current.push(c);
                if !fits(&current) && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(c);
                }
            }
        }

        if has_words {
            if !current.is_empty() {
                lines.push(current);
            }
        } else {
            lines.push(String::new());
        }
    }

    lines
}
