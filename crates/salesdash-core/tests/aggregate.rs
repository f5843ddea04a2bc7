//! Tests for aggregation, ranking, and the overall summary.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use salesdash_core::{aggregate_by_sku, summarize, top_n};
use salesdash_model::SortMetric;

fn normalized_df() -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            "SKU".into(),
            ["A", "B", "A", "C"]
                .iter()
                .map(|s| (*s).to_string())
                .collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new("Quantity".into(), vec![2.0f64, 1.0, 3.0, 1.0]).into_column(),
        Series::new("Price".into(), vec![10.0f64, 5.0, 12.0, 7.0]).into_column(),
        Series::new("Margin".into(), vec![16.0f64, 20.0, 10.0, 20.0]).into_column(),
        Series::new("Total".into(), vec![20.0f64, 5.0, 36.0, 7.0]).into_column(),
    ])
    .unwrap()
}

#[test]
fn groups_are_first_seen_ordered_with_sums_and_means() {
    let aggregates = aggregate_by_sku(&normalized_df()).unwrap();

    let skus: Vec<&str> = aggregates.iter().map(|a| a.sku.as_str()).collect();
    assert_eq!(skus, vec!["A", "B", "C"]);

    let a = &aggregates[0];
    assert_eq!(a.quantity_sum, 5.0);
    assert_eq!(a.total_sum, 56.0);
    assert_eq!(a.price_mean, 11.0);
    assert_eq!(a.margin_mean, 13.0);
    assert_eq!(a.row_count, 2);
}

#[test]
fn profit_is_derived_from_total_and_margin_when_absent() {
    let aggregates = aggregate_by_sku(&normalized_df()).unwrap();
    let a = &aggregates[0];
    // 20 * 0.16 + 36 * 0.10
    assert!((a.profit_sum - 6.8).abs() < 1e-12);
}

#[test]
fn existing_profit_column_is_used_as_is() {
    let df = DataFrame::new(vec![
        Series::new("SKU".into(), vec!["A".to_string(), "B".to_string()]).into_column(),
        Series::new("Total".into(), vec![100.0f64, 50.0]).into_column(),
        Series::new("Margin".into(), vec![10.0f64, 10.0]).into_column(),
        Series::new("Profit".into(), vec![42.0f64, 1.0]).into_column(),
    ])
    .unwrap();

    let aggregates = aggregate_by_sku(&df).unwrap();
    assert_eq!(aggregates[0].profit_sum, 42.0);
}

#[test]
fn top_n_orders_by_chosen_metric() {
    let aggregates = aggregate_by_sku(&normalized_df()).unwrap();

    let by_sales = top_n(&aggregates, SortMetric::TotalSales, 2);
    let skus: Vec<&str> = by_sales.iter().map(|a| a.sku.as_str()).collect();
    assert_eq!(skus, vec!["A", "C"]);

    let by_quantity = top_n(&aggregates, SortMetric::ItemsSold, 3);
    let skus: Vec<&str> = by_quantity.iter().map(|a| a.sku.as_str()).collect();
    assert_eq!(skus, vec!["A", "B", "C"]);
}

#[test]
fn ranking_ties_keep_first_seen_order() {
    let df = DataFrame::new(vec![
        Series::new(
            "SKU".into(),
            ["X", "Y", "Z"]
                .iter()
                .map(|s| (*s).to_string())
                .collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new("Quantity".into(), vec![5.0f64, 5.0, 5.0]).into_column(),
        Series::new("Total".into(), vec![10.0f64, 10.0, 10.0]).into_column(),
        Series::new("Margin".into(), vec![10.0f64, 10.0, 10.0]).into_column(),
    ])
    .unwrap();

    let aggregates = aggregate_by_sku(&df).unwrap();
    let ranked = top_n(&aggregates, SortMetric::ItemsSold, 3);
    let skus: Vec<&str> = ranked.iter().map(|a| a.sku.as_str()).collect();
    assert_eq!(skus, vec!["X", "Y", "Z"]);
}

#[test]
fn ranking_is_reproducible() {
    let df = normalized_df();
    let first = top_n(&aggregate_by_sku(&df).unwrap(), SortMetric::Profit, 3);
    let second = top_n(&aggregate_by_sku(&df).unwrap(), SortMetric::Profit, 3);
    assert_eq!(first, second);
}

#[test]
fn overall_summary_matches_hand_computation() {
    let summary = summarize(&normalized_df()).unwrap();

    assert_eq!(summary.items_sold, 7);
    assert_eq!(summary.total_sales, 68.0);
    assert_eq!(summary.mean_price, 8.5);
    assert_eq!(summary.mean_margin, 16.5);
    assert_eq!(summary.unique_products, 3);
    assert!(summary.price_quantity_correlation.is_some());
}

#[test]
fn summary_of_filtered_empty_frame_is_zeroed() {
    let df = normalized_df();
    let empty = df.head(Some(0));
    let summary = summarize(&empty).unwrap();

    assert_eq!(summary.items_sold, 0);
    assert_eq!(summary.total_sales, 0.0);
    assert_eq!(summary.mean_price, 0.0);
    assert_eq!(summary.unique_products, 0);
    assert_eq!(summary.price_quantity_correlation, None);
}
