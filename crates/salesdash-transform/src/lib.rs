pub mod filter;
pub mod normalization;

pub use filter::filter_by_skus;
pub use normalization::{
    RENAME_MAP, coerce_numeric_columns, coerce_str, coerce_value, normalize_columns,
};
