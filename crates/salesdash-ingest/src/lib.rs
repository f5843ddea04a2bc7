pub mod delimited;
pub mod excel;
pub mod raw;
pub mod reader;
pub mod values;

pub use delimited::read_delimited;
pub use excel::read_workbook;
pub use raw::RawTable;
pub use reader::{read_table, read_table_file};
pub use values::{any_to_f64, any_to_string, format_numeric, parse_f64};
