//! Tests for the supplier feed: archive extraction and worksheet parsing.

use std::io::Write;
use std::time::Duration;

use calamine::{Data, Range};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn text(s: &str) -> Data {
    Data::String(s.to_string())
}

/// Builds a worksheet shaped like the supplier export: letterhead rows, the
/// header, a brand heading without code, then stock rows.
fn supplier_sheet() -> Range<Data> {
    let rows: Vec<Vec<Data>> = vec![
        vec![text("Остатки на складе"), Data::Empty, Data::Empty, Data::Empty, Data::Empty, Data::Empty],
        vec![Data::Empty, Data::Empty, Data::Empty, Data::Empty, Data::Empty, Data::Empty],
        vec![
            text("Код"),
            text("Наименование товара"),
            text("Изображение"),
            text("Цена"),
            text("Количество"),
            text("Заказ"),
        ],
        vec![Data::Empty, text("CASIO Baby-G"), Data::Empty, Data::Empty, Data::Empty, Data::Empty],
        vec![
            Data::Float(71301.0),
            text("BA-110BE-4A"),
            text("Показать"),
            text("19'990.00 руб."),
            Data::Float(6.0),
            Data::Empty,
        ],
        vec![
            text("71302"),
            text("BA-110XBE-7A"),
            text("Показать"),
            text("5'990.00 руб."),
            text(">10"),
            Data::Empty,
        ],
    ];

    let mut range = Range::new((0, 0), (rows.len() as u32 - 1, 5));
    for (r, row) in rows.into_iter().enumerate() {
        for (c, cell) in row.into_iter().enumerate() {
            range.set_value((r as u32, c as u32), cell);
        }
    }
    range
}

fn zip_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Stored);
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

// ── cell_to_string ───────────────────────────────────────────────────

#[test]
fn whole_floats_lose_fraction() {
    assert_eq!(cell_to_string(&Data::Float(71301.0)), "71301");
    assert_eq!(cell_to_string(&Data::Float(1.0)), "1");
}

#[test]
fn fractional_floats_are_kept() {
    assert_eq!(cell_to_string(&Data::Float(19990.5)), "19990.5");
}

#[test]
fn text_is_trimmed_and_empty_is_blank() {
    assert_eq!(cell_to_string(&text("  >10 ")), ">10");
    assert_eq!(cell_to_string(&Data::Empty), "");
    assert_eq!(cell_to_string(&Data::Int(42)), "42");
}

// ── parse_stock_rows ─────────────────────────────────────────────────

#[test]
fn parses_rows_after_header() {
    let records = parse_stock_rows(&supplier_sheet()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].code, "71301");
    assert_eq!(records[0].quantity, "6");
    assert_eq!(records[0].price, "19'990.00 руб.");
    assert_eq!(records[0].name.as_deref(), Some("BA-110BE-4A"));
    assert_eq!(records[1].code, "71302");
    assert_eq!(records[1].quantity, ">10");
}

#[test]
fn quantity_one_stays_literal() {
    let mut range = Range::new((0, 0), (1, 2));
    range.set_value((0, 0), text("Код"));
    range.set_value((0, 1), text("Цена"));
    range.set_value((0, 2), text("Количество"));
    range.set_value((1, 0), text("A"));
    range.set_value((1, 1), text("1'000.00 руб."));
    range.set_value((1, 2), Data::Float(1.0));

    let records = parse_stock_rows(&range).unwrap();
    assert_eq!(records[0].quantity, "1");
    assert_eq!(records[0].name, None);
}

#[test]
fn missing_header_is_feed_error() {
    let mut range = Range::new((0, 0), (1, 1));
    range.set_value((0, 0), text("Артикул"));
    range.set_value((1, 0), text("71301"));

    let result = parse_stock_rows(&range);
    assert!(matches!(result, Err(SyncError::Feed(_))));
}

#[test]
fn header_only_sheet_has_no_records() {
    let mut range = Range::new((0, 0), (0, 2));
    range.set_value((0, 0), text("Код"));
    range.set_value((0, 1), text("Цена"));
    range.set_value((0, 2), text("Количество"));

    assert!(parse_stock_rows(&range).unwrap().is_empty());
}

// ── extract_workbook ─────────────────────────────────────────────────

#[test]
fn extracts_first_spreadsheet_entry() {
    let archive = zip_with(&[("readme.txt", b"hello".as_slice()), ("ostatki.xls", b"workbook-bytes".as_slice())]);
    let data = extract_workbook(&archive).unwrap();
    assert_eq!(data, b"workbook-bytes".as_slice());
}

#[test]
fn extension_match_is_case_insensitive() {
    let archive = zip_with(&[("OSTATKI.XLSX", b"xlsx".as_slice())]);
    assert_eq!(extract_workbook(&archive).unwrap(), b"xlsx".as_slice());
}

#[test]
fn archive_without_spreadsheet_is_feed_error() {
    let archive = zip_with(&[("readme.txt", b"hello".as_slice())]);
    let result = extract_workbook(&archive);
    assert!(matches!(result, Err(SyncError::Feed(_))));
}

#[test]
fn garbage_is_not_an_archive() {
    let result = extract_workbook(b"definitely not a zip".as_slice());
    assert!(matches!(result, Err(SyncError::Feed(_))));
}

#[test]
fn unreadable_workbook_is_feed_error() {
    let result = parse_workbook(b"not a workbook".to_vec());
    assert!(matches!(result, Err(SyncError::Feed(_))));
}

// ── fetch_records ────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_records_maps_missing_file_to_http_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/upload/files/ostatki.zip"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let feed = SupplierFeed::new(
        format!("{}/upload/files/ostatki.zip", mock_server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();

    match feed.fetch_records().await.unwrap_err() {
        SyncError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("Expected HttpStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_records_rejects_archive_without_spreadsheet() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ostatki.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(zip_with(&[("info.txt", b"x".as_slice())])))
        .mount(&mock_server)
        .await;

    let feed = SupplierFeed::new(
        format!("{}/ostatki.zip", mock_server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();

    let result = feed.fetch_records().await;
    assert!(matches!(result, Err(SyncError::Feed(_))));
}
