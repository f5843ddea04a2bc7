//! CSV re-export of the current (possibly filtered) table.
//!
//! The export is always UTF-8, preserves the frame's column headers, and
//! omits the row index. Floats are rendered without trailing zeros so a
//! re-ingest of the export sees the same values.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};
use salesdash_ingest::any_to_string;

/// Serialize the frame to CSV bytes.
pub fn csv_bytes(df: &DataFrame) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let names = df.get_column_names_owned();
    writer
        .write_record(names.iter().map(|name| name.as_str()))
        .context("write csv header")?;

    let columns: Vec<_> = names
        .iter()
        .map(|name| df.column(name.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .context("resolve export columns")?;
    for row in 0..df.height() {
        let record: Vec<String> = columns
            .iter()
            .map(|column| any_to_string(&column.get(row).unwrap_or(AnyValue::Null)))
            .collect();
        writer.write_record(&record).context("write csv row")?;
    }

    writer
        .into_inner()
        .map_err(|error| anyhow::anyhow!("flush csv writer: {error}"))
}

/// Write the frame to a CSV file at `path`.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let bytes = csv_bytes(df)?;
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
