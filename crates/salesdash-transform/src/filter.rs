//! Row filtering by product identifier.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};
use salesdash_ingest::any_to_string;
use salesdash_model::{IngestError, columns};

/// Keep the rows whose SKU is in `selection`, preserving original order.
///
/// An empty selection is the "no filter" convention of a cleared
/// multi-select: the full table comes back. The result always has a fresh
/// contiguous row index.
pub fn filter_by_skus(
    df: &DataFrame,
    selection: &BTreeSet<String>,
) -> Result<DataFrame, IngestError> {
    if selection.is_empty() {
        return Ok(df.clone());
    }
    let sku_column = df.column(columns::SKU).map_err(IngestError::unknown)?;
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = any_to_string(&sku_column.get(idx).unwrap_or(AnyValue::Null));
        keep.push(selection.contains(value.trim()));
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    df.filter(&mask).map_err(IngestError::unknown)
}
