//! Report pagination invariants

use txa::report::{
    paginate, paginate_result, render, Helvetica, LineStyle, Monospace, PageLayout, PdfBuilder,
    ReportFormat, TextBuilder, TextMeasure, REPORT_TITLE,
};
use txa::serializer::{sections, Section};

use crate::helpers::{frequency_result, sample_result, SAMPLE_TEXT};

const GENERATED: &str = "Generated: 2026-01-02 03:04:05";

fn assert_within_page(layout: &PageLayout, format: ReportFormat) {
    let document = paginate_result(&frequency_result(150), SAMPLE_TEXT, GENERATED, format);
    for (_, line) in document.lines() {
        assert!(line.y >= layout.margin, "{:?} above the top margin", line);
        assert!(line.y <= layout.content_bottom(), "{:?} below the content area", line);
    }
}

#[test]
fn every_line_is_inside_the_content_area() {
    assert_within_page(&PageLayout::A4, ReportFormat::Pdf);
    assert_within_page(&PageLayout::TEXT, ReportFormat::Text);
}

#[test]
fn header_is_only_on_the_first_page() {
    let document = paginate_result(&frequency_result(150), SAMPLE_TEXT, GENERATED, ReportFormat::Pdf);
    assert!(document.page_count() > 1);

    let first = &document.pages[0].lines;
    assert_eq!(first[0].text, REPORT_TITLE);
    assert_eq!(first[0].style, LineStyle::Title);
    assert_eq!(first[1].text, GENERATED);

    for page in &document.pages[1..] {
        assert!(page
            .lines
            .iter()
            .all(|line| !matches!(line.style, LineStyle::Title | LineStyle::Timestamp)));
        assert_eq!(page.lines[0].y, PageLayout::A4.margin);
    }
}

#[test]
fn sections_keep_their_order_and_lines() {
    let result = frequency_result(150);
    let expected = sections(&result, SAMPLE_TEXT);
    let document = paginate_result(&result, SAMPLE_TEXT, GENERATED, ReportFormat::Pdf);

    let titles: Vec<&str> = expected.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(document.headings(), titles);

    let frequency = titles.iter().position(|t| *t == "Word Frequency").unwrap();
    let body = document.section_body(frequency);
    assert_eq!(body.len(), 150);
    assert_eq!(body[0], "word0: 150");
    assert_eq!(body[149], "word149: 1");
}

#[test]
fn one_passive_sentence_is_one_report_line() {
    let result = sample_result();
    let document = paginate_result(&result, SAMPLE_TEXT, GENERATED, ReportFormat::Pdf);

    let passive = document
        .headings()
        .iter()
        .position(|t| *t == "Passive Voice Detection")
        .unwrap();
    assert_eq!(
        document.section_body(passive),
        ["The mat was sat on by the cat."]
    );
}

#[test]
fn heading_is_never_the_last_line_of_a_page() {
    let document = paginate_result(&frequency_result(150), SAMPLE_TEXT, GENERATED, ReportFormat::Pdf);
    for page in &document.pages {
        let last = page.lines.last().unwrap();
        assert_ne!(last.style, LineStyle::Heading, "orphaned heading on page {}", page.number);
    }
}

#[test]
fn long_input_wraps_within_the_line_width() {
    let input = "lorem ipsum dolor sit amet ".repeat(40);
    let document = paginate(
        REPORT_TITLE,
        GENERATED,
        &[Section::new("Input Text", vec![input.clone()])],
        &PageLayout::A4,
        &Helvetica,
    );
    let body = document.section_body(0);
    assert!(body.len() > 1);
    for line in &body {
        assert!(Helvetica.width(line, PageLayout::A4.body_size) <= PageLayout::A4.max_line_width);
    }
    assert_eq!(body.join(" "), input.trim_end());
}

#[test]
fn text_layout_uses_terminal_columns() {
    let document = paginate(
        REPORT_TITLE,
        GENERATED,
        &[Section::new("Input Text", vec!["word ".repeat(50)])],
        &PageLayout::TEXT,
        &Monospace,
    );
    for line in document.section_body(0) {
        assert!(Monospace.width(line, 1.0) <= PageLayout::TEXT.max_line_width);
    }
}

#[test]
fn layouts_are_valid() {
    PageLayout::A4.validate().unwrap();
    PageLayout::TEXT.validate().unwrap();
}

#[test]
fn pdf_has_one_page_per_paginated_page() {
    let result = frequency_result(150);
    let document = paginate_result(&result, SAMPLE_TEXT, GENERATED, ReportFormat::Pdf);
    let layout = PageLayout::A4;
    let mut builder = PdfBuilder::new(&layout, REPORT_TITLE);
    let bytes = render(&document, &layout, &mut builder).unwrap();

    let pdf = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(pdf.get_pages().len(), document.page_count());
}

#[test]
fn text_render_separates_pages() {
    let result = frequency_result(150);
    let document = paginate_result(&result, SAMPLE_TEXT, GENERATED, ReportFormat::Text);
    let mut builder = TextBuilder::new();
    let bytes = render(&document, &PageLayout::TEXT, &mut builder).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    assert_eq!(text.matches('\x0c').count(), document.page_count() - 1);
    assert!(text.contains("word149: 1"));
}
