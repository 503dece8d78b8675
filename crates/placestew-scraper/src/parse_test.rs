use std::io::Write;

use super::*;

const WENDYS_HTML: &str = include_str!("../tests/fixtures/wendys.html");

fn wendys_record() -> PlaceRecord {
    PlaceRecord {
        name: Some("Wendy's".to_string()),
        rating: Some(3.9),
        review_count: Some(1107),
        price_level: Some("$".to_string()),
        category: Some("Fast food restaurant".to_string()),
        address: Some("3801 Blake Rd SW, Albuquerque, NM 87121".to_string()),
        phone: Some("(505) 873-2233".to_string()),
        hours: Some("Open \u{b7} Closes 1 AM".to_string()),
        website: Some(
            "https://locations.wendys.com/united-states/nm/albuquerque/3801-blake-road-sw"
                .to_string(),
        ),
        description: Some(
            "Fast-food burger chain serving sides such as chili & baked potatoes.".to_string(),
        ),
    }
}

#[test]
fn parse_html_extracts_full_wendys_record() {
    assert_eq!(parse_html(WENDYS_HTML), wendys_record());
}

#[test]
fn parse_html_empty_string_yields_all_absent() {
    let record = parse_html("");
    assert_eq!(record, PlaceRecord::default());
    assert!(record.is_empty());
}

#[test]
fn parse_html_unrelated_markup_yields_all_absent() {
    let record = parse_html("<html><body><p>Nothing to see</p></body></html>");
    assert!(record.is_empty());
}

#[test]
fn parse_html_is_idempotent() {
    let first = parse_html(WENDYS_HTML);
    let second = parse_html(WENDYS_HTML);
    assert_eq!(first, second);
}

#[test]
fn parse_document_matches_parse_html() {
    let doc = Document::parse(WENDYS_HTML);
    assert_eq!(parse_document(&doc), parse_html(WENDYS_HTML));
}

#[test]
fn parse_html_keeps_partial_results() {
    let html = r#"<h1>Corner Cafe</h1><span aria-hidden="true">N/A</span>"#;
    let record = parse_html(html);
    assert_eq!(record.name.as_deref(), Some("Corner Cafe"));
    assert!(record.rating.is_none());
    assert_eq!(record.field_count(), 1);
}

#[test]
fn parse_file_reads_and_parses() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(WENDYS_HTML.as_bytes()).expect("write fixture");
    let record = parse_file(file.path()).expect("parse file");
    assert_eq!(record, wendys_record());
}

#[test]
fn parse_file_missing_path_is_input_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("nope.html");
    let err = parse_file(&missing).unwrap_err();
    assert!(
        matches!(err, ScraperError::InputNotFound { ref path } if path == &missing),
        "expected InputNotFound, got: {err:?}"
    );
}

#[test]
fn parse_file_non_utf8_is_read_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(&[0x3c, 0x68, 0x31, 0x3e, 0xff, 0xfe, 0xfd])
        .expect("write bytes");
    let err = parse_file(file.path()).unwrap_err();
    assert!(
        matches!(err, ScraperError::Read { .. }),
        "expected Read, got: {err:?}"
    );
}

#[test]
fn parse_file_directory_is_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = parse_file(dir.path()).unwrap_err();
    assert!(
        matches!(err, ScraperError::Read { .. }),
        "expected Read, got: {err:?}"
    );
}
