//! Tests for SKU filtering.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};
use salesdash_transform::filter_by_skus;

fn sales_df() -> DataFrame {
    DataFrame::new(vec![
        Series::new(
            "SKU".into(),
            vec!["A", "B", "A", "C"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>(),
        )
        .into_column(),
        Series::new("Total".into(), vec![20.0f64, 5.0, 7.0, 3.0]).into_column(),
    ])
    .unwrap()
}

fn selection(skus: &[&str]) -> BTreeSet<String> {
    skus.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn empty_selection_returns_full_table() {
    let df = sales_df();
    let filtered = filter_by_skus(&df, &BTreeSet::new()).unwrap();
    assert!(filtered.equals(&df));
}

#[test]
fn selection_keeps_matching_rows_in_order() {
    let df = sales_df();
    let filtered = filter_by_skus(&df, &selection(&["A"])).unwrap();

    assert_eq!(filtered.height(), 2);
    let totals = filtered.column("Total").unwrap();
    assert_eq!(totals.get(0).unwrap(), AnyValue::Float64(20.0));
    assert_eq!(totals.get(1).unwrap(), AnyValue::Float64(7.0));
}

#[test]
fn selection_with_no_matches_is_empty() {
    let df = sales_df();
    let filtered = filter_by_skus(&df, &selection(&["Z"])).unwrap();
    assert_eq!(filtered.height(), 0);
}

#[test]
fn multi_selection_preserves_relative_order() {
    let df = sales_df();
    let filtered = filter_by_skus(&df, &selection(&["B", "C"])).unwrap();

    let skus = filtered.column("SKU").unwrap();
    assert_eq!(skus.get(0).unwrap(), AnyValue::String("B"));
    assert_eq!(skus.get(1).unwrap(), AnyValue::String("C"));
}

#[test]
fn filter_result_has_contiguous_fresh_index() {
    let df = sales_df();
    let filtered = filter_by_skus(&df, &selection(&["A", "C"])).unwrap();

    // Three surviving rows, addressable 0..3 with no gaps.
    assert_eq!(filtered.height(), 3);
    let skus = filtered.column("SKU").unwrap();
    for idx in 0..filtered.height() {
        assert!(skus.get(idx).is_ok());
    }
}
