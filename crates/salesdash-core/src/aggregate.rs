//! Per-product aggregation, rankings, and the overall scalar summary.
//!
//! Everything here reads a normalized frame (canonical columns, Float64
//! numerics) and produces derived views. Group order is first appearance in
//! the input, which also resolves ranking ties, so repeated runs over the
//! same file produce identical output.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};
use salesdash_ingest::{any_to_f64, any_to_string};
use salesdash_model::{SortMetric, columns};

/// Summed and averaged metrics for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAggregate {
    pub sku: String,
    pub quantity_sum: f64,
    pub total_sum: f64,
    pub profit_sum: f64,
    pub price_mean: f64,
    pub margin_mean: f64,
    pub row_count: usize,
}

/// Overall scalar summary of a (possibly filtered) frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallSummary {
    pub mean_price: f64,
    pub mean_margin: f64,
    pub total_sales: f64,
    pub total_profit: f64,
    /// Sum of quantity; a count, so reported as an integer.
    pub items_sold: i64,
    pub unique_products: usize,
    /// Pearson correlation of price and quantity; None below two rows or at
    /// zero variance.
    pub price_quantity_correlation: Option<f64>,
}

/// Group by SKU in first-appearance order.
pub fn aggregate_by_sku(df: &DataFrame) -> Result<Vec<ProductAggregate>> {
    let skus = string_column(df, columns::SKU).context("read SKU column")?;
    let quantities = numeric_column_or_zero(df, columns::QUANTITY);
    let totals = numeric_column_or_zero(df, columns::TOTAL);
    let prices = numeric_column_or_zero(df, columns::PRICE);
    let margins = numeric_column_or_zero(df, columns::MARGIN);
    let profits = profit_values(df);

    let mut aggregates: Vec<ProductAggregate> = Vec::new();
    let mut index: BTreeMap<String, usize> = BTreeMap::new();
    for row in 0..df.height() {
        let sku = skus[row].trim().to_string();
        let slot = match index.get(&sku) {
            Some(slot) => *slot,
            None => {
                index.insert(sku.clone(), aggregates.len());
                aggregates.push(ProductAggregate {
                    sku,
                    quantity_sum: 0.0,
                    total_sum: 0.0,
                    profit_sum: 0.0,
                    price_mean: 0.0,
                    margin_mean: 0.0,
                    row_count: 0,
                });
                aggregates.len() - 1
            }
        };
        let entry = &mut aggregates[slot];
        entry.quantity_sum += quantities[row];
        entry.total_sum += totals[row];
        entry.profit_sum += profits[row];
        // Means are accumulated as sums and divided once all rows are seen.
        entry.price_mean += prices[row];
        entry.margin_mean += margins[row];
        entry.row_count += 1;
    }
    for entry in &mut aggregates {
        if entry.row_count > 0 {
            entry.price_mean /= entry.row_count as f64;
            entry.margin_mean /= entry.row_count as f64;
        }
    }
    Ok(aggregates)
}

/// The N products with the largest value of `metric`.
///
/// The sort is stable and descending, so equal values keep their
/// first-appearance order: ranking the same input twice yields the same
/// list, ties included.
pub fn top_n(
    aggregates: &[ProductAggregate],
    metric: SortMetric,
    n: usize,
) -> Vec<ProductAggregate> {
    let mut ranked: Vec<&ProductAggregate> = aggregates.iter().collect();
    ranked.sort_by(|a, b| {
        metric_value(b, metric)
            .partial_cmp(&metric_value(a, metric))
            .unwrap_or(Ordering::Equal)
    });
    ranked.into_iter().take(n).cloned().collect()
}

/// Value of the ranking metric for one aggregate.
pub fn metric_value(aggregate: &ProductAggregate, metric: SortMetric) -> f64 {
    match metric {
        SortMetric::ItemsSold => aggregate.quantity_sum,
        SortMetric::Profit => aggregate.profit_sum,
        SortMetric::TotalSales => aggregate.total_sum,
    }
}

/// Compute the overall scalar summary.
pub fn summarize(df: &DataFrame) -> Result<OverallSummary> {
    let skus = string_column(df, columns::SKU).context("read SKU column")?;
    let quantities = numeric_column_or_zero(df, columns::QUANTITY);
    let totals = numeric_column_or_zero(df, columns::TOTAL);
    let prices = numeric_column_or_zero(df, columns::PRICE);
    let margins = numeric_column_or_zero(df, columns::MARGIN);
    let profits = profit_values(df);

    let mut unique = std::collections::BTreeSet::new();
    for sku in &skus {
        let trimmed = sku.trim();
        if !trimmed.is_empty() {
            unique.insert(trimmed.to_string());
        }
    }

    Ok(OverallSummary {
        mean_price: mean(&prices),
        mean_margin: mean(&margins),
        total_sales: totals.iter().sum(),
        total_profit: profits.iter().sum(),
        items_sold: quantities.iter().sum::<f64>().round() as i64,
        unique_products: unique.len(),
        price_quantity_correlation: correlation(&prices, &quantities),
    })
}

/// Per-row profit: the `Profit` column when present, otherwise
/// `Total * Margin / 100`, otherwise zero.
fn profit_values(df: &DataFrame) -> Vec<f64> {
    if df.column(columns::PROFIT).is_ok() {
        return numeric_column_or_zero(df, columns::PROFIT);
    }
    let totals = numeric_column_or_zero(df, columns::TOTAL);
    let margins = numeric_column_or_zero(df, columns::MARGIN);
    totals
        .iter()
        .zip(margins.iter())
        .map(|(total, margin)| total * (margin / 100.0))
        .collect()
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string(&column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Numeric column as plain floats; a missing column degrades to zeros so
/// consumers that checked presence upstream still get a full-length vector.
fn numeric_column_or_zero(df: &DataFrame, name: &str) -> Vec<f64> {
    let Ok(column) = df.column(name) else {
        return vec![0.0; df.height()];
    };
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        values.push(any_to_f64(&value).unwrap_or(0.0));
    }
    values
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn correlation(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() < 2 || xs.len() != ys.len() {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[2.0, 4.0]), 3.0);
    }

    #[test]
    fn correlation_needs_variance() {
        assert_eq!(correlation(&[1.0, 1.0], &[2.0, 3.0]), None);
        assert_eq!(correlation(&[1.0], &[2.0]), None);
        let r = correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }
}
