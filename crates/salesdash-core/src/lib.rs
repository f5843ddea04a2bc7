pub mod aggregate;
pub mod frame;
pub mod pipeline;

pub use aggregate::{
    OverallSummary, ProductAggregate, aggregate_by_sku, metric_value, summarize, top_n,
};
pub use frame::SalesFrame;
pub use pipeline::{LoadedFrame, load_sales_frame, supported_formats};
