//! CSV export tests, including the export/re-ingest round-trip.

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};
use salesdash_ingest::read_table;
use salesdash_model::FileFormat;
use salesdash_report::{csv_bytes, write_csv};

fn normalized_df() -> DataFrame {
    DataFrame::new(vec![
        Series::new("SKU".into(), vec!["A".to_string(), "B".to_string()]).into_column(),
        Series::new("Quantity".into(), vec![2.0f64, 1.0]).into_column(),
        Series::new("Price".into(), vec![10.0f64, 5.0]).into_column(),
        Series::new("Margin".into(), vec![16.0f64, 20.0]).into_column(),
        Series::new("Total".into(), vec![20.0f64, 5.5]).into_column(),
    ])
    .unwrap()
}

#[test]
fn export_preserves_headers_and_omits_row_index() {
    let bytes = csv_bytes(&normalized_df()).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some("SKU,Quantity,Price,Margin,Total"));
    assert_eq!(lines.next(), Some("A,2,10,16,20"));
    assert_eq!(lines.next(), Some("B,1,5,20,5.5"));
    assert_eq!(lines.next(), None);
}

#[test]
fn export_reingest_round_trip_preserves_values() {
    let df = normalized_df();
    let bytes = csv_bytes(&df).unwrap();

    let round = read_table(&bytes, FileFormat::Csv).unwrap();
    assert_eq!(round.height(), df.height());

    // Values come back as strings; check they parse to the originals.
    let total = round.column("Total").unwrap();
    assert_eq!(total.get(0).unwrap(), AnyValue::String("20"));
    assert_eq!(total.get(1).unwrap(), AnyValue::String("5.5"));
}

#[test]
fn write_csv_produces_utf8_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.csv");

    write_csv(&normalized_df(), &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("SKU,Quantity"));
}

#[test]
fn null_cells_export_as_empty_fields() {
    let df = DataFrame::new(vec![
        Series::new("SKU".into(), vec!["A".to_string(), "B".to_string()]).into_column(),
        Series::new("Name".into(), vec![Some("Widget".to_string()), None]).into_column(),
    ])
    .unwrap();

    let text = String::from_utf8(csv_bytes(&df).unwrap()).unwrap();
    let mut lines = text.lines();
    lines.next();
    assert_eq!(lines.next(), Some("A,Widget"));
    assert_eq!(lines.next(), Some("B,"));
}
