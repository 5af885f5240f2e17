//! Report export tests

use std::fs;

use txa::report::{export, ExportError, ReportFormat, REPORT_TITLE};

use crate::helpers::{sample_result, SAMPLE_TEXT};

#[test]
fn pdf_export_uses_the_default_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = export(&sample_result(), SAMPLE_TEXT, dir.path(), None, ReportFormat::Pdf).unwrap();

    assert_eq!(path, dir.path().join("text-analysis-report.pdf"));
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn pdf_export_is_a_loadable_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = export(&sample_result(), SAMPLE_TEXT, dir.path(), None, ReportFormat::Pdf).unwrap();

    let document = lopdf::Document::load_mem(&fs::read(&path).unwrap()).unwrap();
    assert!(!document.get_pages().is_empty());
}

#[test]
fn text_export_contains_title_timestamp_and_sentinels() {
    let dir = tempfile::tempdir().unwrap();
    let path = export(&sample_result(), SAMPLE_TEXT, dir.path(), None, ReportFormat::Text).unwrap();

    assert_eq!(path, dir.path().join("text-analysis-report.txt"));
    let report = fs::read_to_string(&path).unwrap();
    assert!(report.contains(REPORT_TITLE));
    assert!(report.contains("Generated: "));
    assert!(report.contains(SAMPLE_TEXT));
    assert!(report.contains("Future: None"));
}

#[test]
fn custom_file_name_is_respected() {
    let dir = tempfile::tempdir().unwrap();
    let path = export(
        &sample_result(),
        SAMPLE_TEXT,
        dir.path(),
        Some("essay.pdf"),
        ReportFormat::Pdf,
    )
    .unwrap();

    assert_eq!(path, dir.path().join("essay.pdf"));
    assert!(path.exists());
}

#[test]
fn missing_directory_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = export(&sample_result(), SAMPLE_TEXT, &missing, None, ReportFormat::Pdf).unwrap_err();
    match err {
        ExportError::Write { path, .. } => {
            assert_eq!(path, missing.join("text-analysis-report.pdf"));
        }
        other => panic!("expected a write error, got {:?}", other),
    }
}
