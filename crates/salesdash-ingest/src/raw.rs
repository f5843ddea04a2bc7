//! Raw tabular form shared by the delimited-text and Excel readers.
//!
//! Every reader produces a [`RawTable`] of trimmed strings: one header row
//! plus data rows padded to the header width. Type coercion happens later,
//! in the transform stage, never here.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use salesdash_model::IngestError;

/// A parsed but untyped table: headers and string cells.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Number of data rows (the header row is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Build a string-typed DataFrame, one Utf8 column per header.
    ///
    /// Empty cells become nulls. Duplicate or blank headers are disambiguated
    /// the way spreadsheet tools do (`Name`, `Name_1`, `Unnamed_2`) so the
    /// frame constructor never sees a name collision.
    pub fn into_frame(self) -> Result<DataFrame, IngestError> {
        let names = unique_column_names(&self.headers);
        let mut columns: Vec<Column> = Vec::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            let mut values: Vec<Option<String>> = Vec::with_capacity(self.rows.len());
            for row in &self.rows {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                if cell.is_empty() {
                    values.push(None);
                } else {
                    values.push(Some(cell.to_string()));
                }
            }
            columns.push(Series::new(name.as_str().into(), values).into());
        }
        DataFrame::new(columns).map_err(IngestError::unknown)
    }
}

/// Collapse interior whitespace and strip a BOM from a header cell.
pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn unique_column_names(headers: &[String]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(headers.len());
    for (idx, header) in headers.iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed_{idx}")
        } else {
            header.clone()
        };
        let mut candidate = base.clone();
        let mut suffix = 1usize;
        while names.contains(&candidate) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        names.push(candidate);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization_collapses_whitespace() {
        assert_eq!(normalize_header("  Unit   Price "), "Unit Price");
        assert_eq!(normalize_header("\u{feff}SKU"), "SKU");
    }

    #[test]
    fn duplicate_headers_are_disambiguated() {
        let headers = vec!["Name".to_string(), "Name".to_string(), String::new()];
        assert_eq!(
            unique_column_names(&headers),
            vec!["Name", "Name_1", "Unnamed_2"]
        );
    }

    #[test]
    fn into_frame_nullifies_empty_cells() {
        let table = RawTable {
            headers: vec!["SKU".to_string(), "Total".to_string()],
            rows: vec![
                vec!["A".to_string(), "20".to_string()],
                vec!["B".to_string(), String::new()],
            ],
        };
        let df = table.into_frame().unwrap();
        assert_eq!(df.height(), 2);
        let total = df.column("Total").unwrap();
        assert_eq!(total.null_count(), 1);
    }
}
