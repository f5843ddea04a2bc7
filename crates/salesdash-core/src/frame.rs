//! The normalized sales table and its provenance.

use std::path::PathBuf;

use polars::prelude::DataFrame;
use salesdash_model::FileFormat;

/// A normalized sales table plus where it came from.
///
/// Built once per ingested file; immutable afterwards except for the
/// filtered views derived from it. Aggregates are always recomputed from the
/// current frame, never cached.
#[derive(Debug, Clone)]
pub struct SalesFrame {
    pub data: DataFrame,
    /// Source file path, when the frame was read from disk.
    pub source_file: Option<PathBuf>,
    /// Declared input format.
    pub format: Option<FileFormat>,
}

impl SalesFrame {
    pub fn new(data: DataFrame) -> Self {
        Self {
            data,
            source_file: None,
            format: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, path: PathBuf, format: FileFormat) -> Self {
        self.source_file = Some(path);
        self.format = Some(format);
        self
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// Display name of the source, for logs and summaries.
    pub fn source_name(&self) -> String {
        self.source_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<memory>".to_string())
    }
}
