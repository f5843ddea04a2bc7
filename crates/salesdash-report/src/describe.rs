//! Per-column summary statistics: count, mean, std, min, quartiles, max.

use polars::prelude::{AnyValue, DataFrame, DataType};
use salesdash_ingest::any_to_f64;
use serde::Serialize;

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub column: String,
    /// Non-null observations.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; 0.0 below two observations.
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Compute statistics for every numeric column, in frame order.
///
/// String columns are skipped; an all-null numeric column produces a zeroed
/// entry rather than being dropped, so the report shape is stable.
pub fn describe(df: &DataFrame) -> Vec<ColumnStats> {
    let mut stats = Vec::new();
    for column in df.get_columns() {
        if !is_numeric_dtype(column.dtype()) {
            continue;
        }
        let mut values: Vec<f64> = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let value = column.get(idx).unwrap_or(AnyValue::Null);
            if let Some(v) = any_to_f64(&value) {
                values.push(v);
            }
        }
        stats.push(column_stats(column.name().as_str(), &mut values));
    }
    stats
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

fn column_stats(name: &str, values: &mut Vec<f64>) -> ColumnStats {
    let count = values.len();
    if count == 0 {
        return ColumnStats {
            column: name.to_string(),
            count: 0,
            mean: 0.0,
            std: 0.0,
            min: 0.0,
            q25: 0.0,
            median: 0.0,
            q75: 0.0,
            max: 0.0,
        };
    }
    let mean = values.iter().sum::<f64>() / count as f64;
    let std = if count > 1 {
        let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
        (sum_sq / (count - 1) as f64).sqrt()
    } else {
        0.0
    };
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    ColumnStats {
        column: name.to_string(),
        count,
        mean,
        std,
        min: values[0],
        q25: quantile(values, 0.25),
        median: quantile(values, 0.5),
        q75: quantile(values, 0.75),
        max: values[count - 1],
    }
}

/// Linearly interpolated quantile over a sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
