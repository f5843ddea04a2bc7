//! One-invocation pipeline: ingest, normalize, coerce, filter.
//!
//! Each user interaction triggers exactly one run producing one immutable
//! frame; there is no implicit re-execution and no state shared between
//! runs. Stages run strictly in order within the calling thread.

use std::path::Path;
use std::time::Instant;

use polars::prelude::DataFrame;
use salesdash_ingest::read_table_file;
use salesdash_model::{FileFormat, IngestError, ReportOptions};
use salesdash_transform::{coerce_numeric_columns, filter_by_skus, normalize_columns};
use tracing::{debug, info, info_span};

use crate::frame::SalesFrame;

/// Result of one pipeline run.
#[derive(Debug)]
pub struct LoadedFrame {
    /// The normalized, coerced, optionally filtered table.
    pub frame: SalesFrame,
    /// Data rows in the source file, before filtering.
    pub input_count: usize,
    /// Non-fatal coercion diagnostics, for display next to the results.
    pub diagnostics: Vec<String>,
}

/// Run the full load pipeline for one file.
///
/// Fails with the [`IngestError`] taxonomy; callers report the message to
/// the user and wait for a corrected upload. A failed run leaves nothing
/// behind — there is no partial table.
pub fn load_sales_frame(path: &Path, options: &ReportOptions) -> Result<LoadedFrame, IngestError> {
    let source = path.display().to_string();
    let pipeline_span = info_span!("load_sales_frame", source = %source);
    let _pipeline_guard = pipeline_span.enter();
    let pipeline_start = Instant::now();

    let (mut df, format) = info_span!("ingest").in_scope(|| read_table_file(path))?;
    let input_count = df.height();
    debug!(
        source = %source,
        format = %format,
        input_rows = input_count,
        "ingest complete"
    );

    let diagnostics = info_span!("normalize").in_scope(|| -> Result<_, IngestError> {
        let start = Instant::now();
        normalize_columns(&mut df)?;
        let diagnostics = coerce_numeric_columns(&mut df)?;
        debug!(
            source = %source,
            diagnostic_count = diagnostics.len(),
            duration_ms = start.elapsed().as_millis(),
            "normalization complete"
        );
        Ok(diagnostics)
    })?;

    let filtered = info_span!("filter").in_scope(|| -> Result<DataFrame, IngestError> {
        filter_by_skus(&df, &options.selected_skus)
    })?;
    let filtered_count = filtered.height();

    info!(
        source = %source,
        input_rows = input_count,
        output_rows = filtered_count,
        duration_ms = pipeline_start.elapsed().as_millis(),
        "pipeline complete"
    );

    Ok(LoadedFrame {
        frame: SalesFrame::new(filtered).with_source(path.to_path_buf(), format),
        input_count,
        diagnostics,
    })
}

/// Formats accepted by [`load_sales_frame`], for help text and listings.
pub fn supported_formats() -> &'static [FileFormat] {
    &FileFormat::ALL
}
