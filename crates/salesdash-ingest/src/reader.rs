//! Top-level ingestion entry points.

use std::path::Path;

use polars::prelude::DataFrame;
use salesdash_model::{FileFormat, IngestError};
use tracing::debug;

use crate::delimited::read_delimited;
use crate::excel::read_workbook;

/// Parse raw file bytes under a declared format into an untyped DataFrame.
///
/// The frame's columns are the source headers verbatim (after whitespace/BOM
/// hygiene); every cell is a string or null. Renaming and coercion are the
/// transform stage's job.
pub fn read_table(bytes: &[u8], format: FileFormat) -> Result<DataFrame, IngestError> {
    let table = match format.delimiter() {
        Some(delimiter) => read_delimited(bytes, delimiter)?,
        None => read_workbook(bytes)?,
    };
    debug!(format = %format, rows = table.row_count(), "table ingested");
    table.into_frame()
}

/// Read a file from disk, resolving the format from its extension.
pub fn read_table_file(path: &Path) -> Result<(DataFrame, FileFormat), IngestError> {
    let format = FileFormat::from_path(path)?;
    let bytes = std::fs::read(path).map_err(|source| IngestError::io(path, source))?;
    let frame = read_table(&bytes, format)?;
    Ok((frame, format))
}
