//! Excel workbook reading via calamine.
//!
//! The first worksheet is the table: first row headers, remaining rows data.
//! Numeric cells are rendered to strings here and re-typed by the coercion
//! pass, so both input families flow through the same normalization path.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use salesdash_model::IngestError;
use tracing::debug;

use crate::raw::{RawTable, normalize_header};
use crate::values::format_numeric;

/// Read the first worksheet of an Excel workbook (`.xls` or `.xlsx`).
pub fn read_workbook(bytes: &[u8]) -> Result<RawTable, IngestError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|error| IngestError::MalformedInput {
            message: error.to_string(),
        })?;

    let sheet_names = workbook.sheet_names().to_vec();
    let Some(sheet_name) = sheet_names.first() else {
        return Err(IngestError::EmptyInput);
    };

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(IngestError::unknown)?;

    let mut row_iter = range.rows();
    let Some(header_row) = row_iter.next() else {
        return Err(IngestError::EmptyInput);
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| normalize_header(&cell_to_string(cell)))
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in row_iter {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let cell = record.get(idx).unwrap_or(&Data::Empty);
            row.push(cell_to_string(cell).trim().to_string());
        }
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(IngestError::EmptyInput);
    }
    debug!(
        sheet = %sheet_name,
        column_count = headers.len(),
        row_count = rows.len(),
        "worksheet read"
    );
    Ok(RawTable { headers, rows })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => format_numeric(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_render_without_trailing_zeros() {
        assert_eq!(cell_to_string(&Data::Float(12.50)), "12.5");
        assert_eq!(cell_to_string(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
    }

    #[test]
    fn empty_and_error_cells_render_blank() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(
            cell_to_string(&Data::Error(calamine::CellErrorType::Div0)),
            ""
        );
    }

    #[test]
    fn garbage_bytes_are_malformed() {
        let error = read_workbook(b"this is not a workbook").unwrap_err();
        assert!(matches!(error, IngestError::MalformedInput { .. }));
    }
}
