#![deny(unsafe_code)]

use std::path::PathBuf;

/// Errors raised while turning an uploaded file into a normalized sales table.
///
/// Every variant is fatal for the current file: the caller reports the message
/// and waits for a corrected upload. There is no partial-success mode.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file format: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("the file contains no data rows")]
    EmptyInput,

    #[error("the file could not be parsed: {message}")]
    MalformedInput { message: String },

    #[error("required column missing after renaming: {column}")]
    MissingRequiredColumn { column: String },

    #[error("ingestion failed: {message}")]
    Unknown { message: String },
}

impl IngestError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap an arbitrary parser failure, preserving its message.
    pub fn unknown(error: impl std::fmt::Display) -> Self {
        Self::Unknown {
            message: error.to_string(),
        }
    }
}
