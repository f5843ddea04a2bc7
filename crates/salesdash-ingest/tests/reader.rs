//! Integration tests for file-based ingestion.

use salesdash_ingest::{read_table, read_table_file};
use salesdash_model::{FileFormat, IngestError};

#[test]
fn csv_file_round_trips_row_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ventes.csv");
    std::fs::write(&path, "Produit,Quantité,Coût\nA,2,10 Dhs\nB,1,5 Dhs\n").unwrap();

    let (frame, format) = read_table_file(&path).unwrap();
    assert_eq!(format, FileFormat::Csv);
    assert_eq!(frame.height(), 2);
    assert_eq!(frame.width(), 3);
    assert!(frame.column("Produit").is_ok());
}

#[test]
fn tsv_file_uses_tab_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.tsv");
    std::fs::write(&path, "SKU\tTotal\nA\t20\nB\t5\nC\t7\n").unwrap();

    let (frame, format) = read_table_file(&path).unwrap();
    assert_eq!(format, FileFormat::Tsv);
    assert_eq!(frame.height(), 3);
}

#[test]
fn unsupported_extension_is_rejected_before_reading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sales.pdf");
    std::fs::write(&path, "not a table").unwrap();

    let error = read_table_file(&path).unwrap_err();
    assert!(matches!(
        error,
        IngestError::UnsupportedFormat { extension } if extension == "pdf"
    ));
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let error = read_table_file(&path).unwrap_err();
    assert!(matches!(error, IngestError::Io { .. }));
}

#[test]
fn empty_csv_is_rejected() {
    let error = read_table(b"", FileFormat::Csv).unwrap_err();
    assert!(matches!(error, IngestError::EmptyInput));

    let error = read_table(b"SKU,Total\n", FileFormat::Csv).unwrap_err();
    assert!(matches!(error, IngestError::EmptyInput));
}

#[test]
fn garbage_xlsx_bytes_are_malformed() {
    let error = read_table(b"definitely not a zip archive", FileFormat::Xlsx).unwrap_err();
    assert!(matches!(error, IngestError::MalformedInput { .. }));
}

#[test]
fn quoted_fields_and_bom_are_handled() {
    let data = "\u{feff}SKU,Name\nA,\"Widget, large\"\n";
    let frame = read_table(data.as_bytes(), FileFormat::Csv).unwrap();
    assert!(frame.column("SKU").is_ok());
    let name = frame.column("Name").unwrap();
    let value = name.get(0).unwrap();
    assert_eq!(value.to_string().trim_matches('"'), "Widget, large");
}
