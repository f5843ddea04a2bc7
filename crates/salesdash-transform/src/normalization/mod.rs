pub mod columns;
pub mod numeric;

pub use columns::{RENAME_MAP, normalize_columns};
pub use numeric::{coerce_numeric_columns, coerce_str, coerce_value};
