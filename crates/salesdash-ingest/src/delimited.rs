//! Delimited-text reading (CSV and TSV).

use std::io::Read;

use csv::ReaderBuilder;
use salesdash_model::IngestError;
use tracing::debug;

use crate::raw::{RawTable, normalize_cell, normalize_header};

/// Read a delimited-text stream into a [`RawTable`].
///
/// The reader is flexible about ragged rows: short rows are padded to the
/// header width, long rows truncated. Fully empty rows are skipped. Failure
/// to tokenize (bad quoting, invalid UTF-8) is a [`IngestError::MalformedInput`].
pub fn read_delimited(input: impl Read, delimiter: u8) -> Result<RawTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(input);

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::MalformedInput {
            message: error.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }

    if raw_rows.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let headers: Vec<String> = raw_rows[0].iter().map(|cell| normalize_header(cell)).collect();
    let mut rows = Vec::with_capacity(raw_rows.len() - 1);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(value.to_string());
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    debug!(
        column_count = headers.len(),
        row_count = rows.len(),
        "delimited table read"
    );
    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_headers_and_rows() {
        let data = "SKU,Quantity\nA,2\nB,1\n";
        let table = read_delimited(data.as_bytes(), b',').unwrap();
        assert_eq!(table.headers, vec!["SKU", "Quantity"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["A", "2"]);
    }

    #[test]
    fn skips_blank_lines_and_pads_short_rows() {
        let data = "SKU,Quantity,Total\nA,2\n\nB,1,5\n";
        let table = read_delimited(data.as_bytes(), b',').unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["A", "2", ""]);
    }

    #[test]
    fn tab_delimiter_is_honored() {
        let data = "SKU\tTotal\nA\t20\n";
        let table = read_delimited(data.as_bytes(), b'\t').unwrap();
        assert_eq!(table.headers, vec!["SKU", "Total"]);
        assert_eq!(table.rows[0], vec!["A", "20"]);
    }

    #[test]
    fn header_only_input_is_empty() {
        let error = read_delimited("SKU,Quantity\n".as_bytes(), b',').unwrap_err();
        assert!(matches!(error, IngestError::EmptyInput));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let bytes: &[u8] = &[b'S', b'K', b'U', b'\n', 0xff, 0xfe, b'\n'];
        let error = read_delimited(bytes, b',').unwrap_err();
        assert!(matches!(error, IngestError::MalformedInput { .. }));
    }
}
