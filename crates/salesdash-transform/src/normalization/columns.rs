//! Source-locale header renaming and required-column validation.

use polars::prelude::DataFrame;
use salesdash_model::{IngestError, columns};
use tracing::debug;

/// Fixed rename table from observed source vocabularies to canonical names.
///
/// Two header generations exist in the wild: a French-labelled export and a
/// later one that already uses canonical-like names. The mapping is the
/// superset, so both load through the same path; canonical headers simply
/// find nothing to rename.
pub const RENAME_MAP: [(&str, &str); 5] = [
    ("Produit", columns::SKU),
    ("Quantité", columns::QUANTITY),
    ("Coût", columns::PRICE),
    ("Marge", columns::MARGIN),
    ("Nom", columns::NAME),
];

/// Rename known source headers in place and enforce the product-identifier
/// gate.
///
/// Columns outside the mapping pass through unchanged. A source column is
/// left untouched when its canonical name already exists, so a file carrying
/// both never produces a duplicate. The only hard failure is a missing
/// [`columns::SKU`] after renaming; every other canonical column is optional.
pub fn normalize_columns(df: &mut DataFrame) -> Result<(), IngestError> {
    let mut renamed = 0usize;
    for (source, canonical) in RENAME_MAP {
        if df.column(source).is_ok() && df.column(canonical).is_err() {
            df.rename(source, canonical.into())
                .map_err(IngestError::unknown)?;
            renamed += 1;
        }
    }
    debug!(renamed, "headers normalized");

    if df.column(columns::SKU).is_err() {
        return Err(IngestError::MissingRequiredColumn {
            column: columns::SKU.to_string(),
        });
    }
    Ok(())
}
