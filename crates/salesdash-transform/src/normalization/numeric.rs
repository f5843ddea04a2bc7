//! Best-effort numeric coercion for dirty spreadsheet values.
//!
//! Real exports mix plain numbers with `"1,234.50 Dhs"`, `"16%"`, `"N/A"`,
//! and blanks in the same column. Coercion sanitizes all of them to plain
//! floats and never fails: unparseable cells degrade to 0.0 with a warn-level
//! diagnostic. Applying the pass twice is a no-op, since floats pass through
//! untouched.

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};
use salesdash_model::{IngestError, columns};
use tracing::warn;

/// Values meaning "not applicable". Matched case-sensitively after trimming.
const NOT_APPLICABLE: [&str; 4] = ["N/A", "", "NaN", "nan"];

/// Currency markers removed before parsing. `Dhs` must precede `DH` so the
/// longer token is consumed first.
const CURRENCY_TOKENS: [&str; 5] = ["Dhs", "MAD", "DH", "$", "€"];

/// Coerce a raw string cell to a float.
///
/// Returns `Some(0.0)` for the not-applicable sentinels, `Some(v)` when a
/// number survives symbol stripping, and `None` when nothing parseable
/// remains (the caller decides how to diagnose).
pub fn coerce_str(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if NOT_APPLICABLE.contains(&trimmed) {
        return Some(0.0);
    }
    let stripped = strip_markers(trimmed);
    match stripped.parse::<f64>() {
        // A parsed NaN is still "not a number"; keep the zero fallback so a
        // second pass over the column sees the same value.
        Ok(value) if value.is_nan() => Some(0.0),
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

fn strip_markers(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    for token in CURRENCY_TOKENS {
        cleaned = cleaned.replace(token, "");
    }
    cleaned.retain(|ch| ch != ',' && ch != '%');
    cleaned.trim().to_string()
}

/// Coerce one cell to a float, never failing.
///
/// Precedence: numeric passthrough, null/NaN to 0.0, sentinel strings to
/// 0.0, symbol-stripped parse, then the zero fallback for everything else.
/// The returned flag is false when the fallback fired.
pub fn coerce_value(value: &AnyValue<'_>) -> (f64, bool) {
    match value {
        AnyValue::Null => (0.0, true),
        AnyValue::Float64(v) if v.is_nan() => (0.0, true),
        AnyValue::Float32(v) if v.is_nan() => (0.0, true),
        AnyValue::Float64(v) => (*v, true),
        AnyValue::Float32(v) => (f64::from(*v), true),
        AnyValue::Int8(v) => (f64::from(*v), true),
        AnyValue::Int16(v) => (f64::from(*v), true),
        AnyValue::Int32(v) => (f64::from(*v), true),
        AnyValue::Int64(v) => (*v as f64, true),
        AnyValue::UInt8(v) => (f64::from(*v), true),
        AnyValue::UInt16(v) => (f64::from(*v), true),
        AnyValue::UInt32(v) => (f64::from(*v), true),
        AnyValue::UInt64(v) => (*v as f64, true),
        AnyValue::String(s) => match coerce_str(s) {
            Some(v) => (v, true),
            None => (0.0, false),
        },
        AnyValue::StringOwned(s) => match coerce_str(s) {
            Some(v) => (v, true),
            None => (0.0, false),
        },
        _ => (0.0, false),
    }
}

/// Coerce every canonical numeric column present in the frame to Float64.
///
/// Replaced columns carry no nulls by construction; a residual-null check
/// still runs afterwards and reports through the returned diagnostics rather
/// than failing, since the pipeline's policy for dirty numerics is
/// best-effort, not reject.
pub fn coerce_numeric_columns(df: &mut DataFrame) -> Result<Vec<String>, IngestError> {
    let mut diagnostics = Vec::new();
    for name in columns::NUMERIC_COLUMNS {
        if df.column(name).is_err() {
            continue;
        }
        let fallback_count = coerce_column(df, name)?;
        if fallback_count > 0 {
            let message =
                format!("{name}: {fallback_count} value(s) could not be parsed, defaulted to 0");
            warn!(column = name, fallback_count, "numeric coercion fell back");
            diagnostics.push(message);
        }
    }

    let residual: usize = columns::NUMERIC_COLUMNS
        .iter()
        .filter_map(|name| df.column(name).ok())
        .map(|column| column.null_count())
        .sum();
    if residual > 0 {
        let message = format!("{residual} null(s) survived numeric coercion");
        warn!(residual, "nulls present after coercion fill");
        diagnostics.push(message);
    }

    Ok(diagnostics)
}

fn coerce_column(df: &mut DataFrame, name: &str) -> Result<usize, IngestError> {
    let column = df.column(name).map_err(IngestError::unknown)?;
    let mut values: Vec<f64> = Vec::with_capacity(df.height());
    let mut fallback_count = 0usize;
    for idx in 0..df.height() {
        let cell = column.get(idx).unwrap_or(AnyValue::Null);
        let (value, parsed) = coerce_value(&cell);
        if !parsed {
            fallback_count += 1;
        }
        values.push(value);
    }
    let series = Series::new(name.into(), values);
    df.with_column(series).map_err(IngestError::unknown)?;
    Ok(fallback_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_decorated_string_parses() {
        assert_eq!(coerce_str("1,234.50 Dhs"), Some(1234.50));
        assert_eq!(coerce_str("10 Dhs"), Some(10.0));
        assert_eq!(coerce_str("250 MAD"), Some(250.0));
        assert_eq!(coerce_str("$99.99"), Some(99.99));
    }

    #[test]
    fn percentage_string_parses() {
        assert_eq!(coerce_str("16%"), Some(16.0));
        assert_eq!(coerce_str(" 20 % "), Some(20.0));
    }

    #[test]
    fn sentinels_map_to_zero() {
        for sentinel in ["N/A", "", "NaN", "nan"] {
            assert_eq!(coerce_str(sentinel), Some(0.0), "sentinel {sentinel:?}");
        }
    }

    #[test]
    fn sentinel_match_is_case_sensitive() {
        // "n/a" is not in the sentinel set and has no digits either way.
        assert_eq!(coerce_str("n/a"), None);
    }

    #[test]
    fn unparseable_text_yields_none() {
        assert_eq!(coerce_str("unknown"), None);
        assert_eq!(coerce_str("12.3.4"), None);
    }

    #[test]
    fn parsed_nan_collapses_to_zero() {
        // "NAN" slips past the case-sensitive sentinel set but parses to a
        // float NaN; it must not survive as one.
        let (value, _) = coerce_value(&AnyValue::String("NAN"));
        assert_eq!(value, 0.0);
        let (value, _) = coerce_value(&AnyValue::Float64(f64::NAN));
        assert_eq!(value, 0.0);
    }

    #[test]
    fn numeric_values_pass_through() {
        assert_eq!(coerce_value(&AnyValue::Float64(12.5)), (12.5, true));
        assert_eq!(coerce_value(&AnyValue::Int64(4)), (4.0, true));
        assert_eq!(coerce_value(&AnyValue::Null), (0.0, true));
    }
}
