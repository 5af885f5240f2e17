//! PDF backend built on lopdf.
//!
//! Uses the standard Helvetica fonts with WinAnsi encoding, so no font
//! files are embedded. Characters outside WinAnsi are written as `?`.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::builder::DocumentBuilder;
use super::error::ExportError;
use super::layout::{PageLayout, MM_TO_PT};

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// Collects text operations per page and assembles the PDF on save.
#[derive(Debug)]
pub struct PdfBuilder {
    width_mm: f32,
    height_mm: f32,
    title: String,
    pages: Vec<Vec<Operation>>,
}

impl PdfBuilder {
    pub fn new(layout: &PageLayout, title: impl Into<String>) -> Self {
        Self {
            width_mm: layout.page_width,
            height_mm: layout.page_height,
            title: title.into(),
            pages: vec![Vec::new()],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn text(&mut self, font: &str, text: &str, x: f32, y: f32, font_size: f32) {
        let x_pt = x * MM_TO_PT;
        let y_pt = (self.height_mm - y) * MM_TO_PT;
        let operations = [
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.into(), font_size.into()]),
            Operation::new("Td", vec![x_pt.into(), y_pt.into()]),
            Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(text))]),
            Operation::new("ET", vec![]),
        ];
        if let Some(page) = self.pages.last_mut() {
            page.extend(operations);
        }
    }
}

impl DocumentBuilder for PdfBuilder {
    fn add_heading(&mut self, text: &str, x: f32, y: f32, font_size: f32) {
        self.text(BOLD_FONT, text, x, y, font_size);
    }

    fn add_line(&mut self, text: &str, x: f32, y: f32, font_size: f32) {
        self.text(REGULAR_FONT, text, x, y, font_size);
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn save(&mut self) -> Result<Vec<u8>, ExportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                REGULAR_FONT => regular_id,
                BOLD_FONT => bold_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in &self.pages {
            let content = Content {
                operations: operations.clone(),
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let media_box: Vec<Object> = vec![
            0_i64.into(),
            0_i64.into(),
            (self.width_mm * MM_TO_PT).into(),
            (self.height_mm * MM_TO_PT).into(),
        ];
        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => media_box,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(encode_win_ansi(&self.title)),
            "Producer" => Object::string_literal(concat!("txa ", env!("CARGO_PKG_VERSION"))),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        Ok(bytes)
    }
}

/// Encode text for a WinAnsi (cp1252) font.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '\t' => b' ',
            _ => b'?',
        })
        .collect()
}
