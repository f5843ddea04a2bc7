//! File-format identification for uploaded sales exports.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::IngestError;

/// Supported input formats, chosen by declared file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    /// Comma-separated text.
    Csv,
    /// Tab-separated text.
    Tsv,
    /// Legacy Excel workbook.
    Xls,
    /// OOXML Excel workbook.
    Xlsx,
}

impl FileFormat {
    /// All accepted formats, in display order.
    pub const ALL: [FileFormat; 4] = [
        FileFormat::Csv,
        FileFormat::Tsv,
        FileFormat::Xls,
        FileFormat::Xlsx,
    ];

    /// Resolve a format from a bare extension (without the dot).
    ///
    /// The allow-list is case-insensitive; anything outside it fails with
    /// [`IngestError::UnsupportedFormat`].
    pub fn from_extension(extension: &str) -> Result<Self, IngestError> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Ok(FileFormat::Csv),
            "tsv" => Ok(FileFormat::Tsv),
            "xls" => Ok(FileFormat::Xls),
            "xlsx" => Ok(FileFormat::Xlsx),
            other => Err(IngestError::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }

    /// Resolve a format from a file path's extension.
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension)
    }

    /// Returns true for the delimited-text formats.
    pub fn is_delimited(&self) -> bool {
        matches!(self, FileFormat::Csv | FileFormat::Tsv)
    }

    /// Field delimiter for delimited-text formats.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            FileFormat::Csv => Some(b','),
            FileFormat::Tsv => Some(b'\t'),
            FileFormat::Xls | FileFormat::Xlsx => None,
        }
    }

    /// Canonical extension string.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Tsv => "tsv",
            FileFormat::Xls => "xls",
            FileFormat::Xlsx => "xlsx",
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
