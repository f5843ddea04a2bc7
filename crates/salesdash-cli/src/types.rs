use std::path::PathBuf;

use salesdash_core::{OverallSummary, ProductAggregate};
use salesdash_model::{Currency, FileFormat, Language, SortMetric};
use salesdash_report::ColumnStats;

#[derive(Debug)]
pub struct ReportResult {
    pub source: PathBuf,
    pub format: FileFormat,
    /// Rows in the source file before filtering.
    pub input_count: usize,
    /// Rows in the (possibly filtered) table.
    pub row_count: usize,
    pub summary: OverallSummary,
    /// Compact top-seller list for the overview card.
    pub top_overview: Vec<String>,
    pub ranked: Vec<ProductAggregate>,
    pub metric: SortMetric,
    pub language: Language,
    pub currency: Currency,
    pub diagnostics: Vec<String>,
    pub stats: Option<Vec<ColumnStats>>,
    pub export_path: Option<PathBuf>,
}
