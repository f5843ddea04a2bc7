pub mod csv_export;
pub mod describe;
pub mod format;

pub use csv_export::{csv_bytes, write_csv};
pub use describe::{ColumnStats, describe};
pub use format::{format_currency, format_percent, group_thousands};
