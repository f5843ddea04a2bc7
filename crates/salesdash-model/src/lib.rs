pub mod columns;
pub mod error;
pub mod format;
pub mod options;

pub use error::IngestError;
pub use format::FileFormat;
pub use options::{
    Currency, DEFAULT_RANKING_SIZE, Language, OVERVIEW_RANKING_SIZE, ReportOptions, SortMetric,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_options_serialize() {
        let options = ReportOptions::new()
            .with_language(Language::French)
            .with_selected_skus(["A".to_string(), "B".to_string()])
            .with_sort_metric(SortMetric::Profit)
            .with_top_n(5);
        let json = serde_json::to_string(&options).expect("serialize options");
        let round: ReportOptions = serde_json::from_str(&json).expect("deserialize options");
        assert_eq!(round.language, Language::French);
        assert_eq!(round.sort_metric, SortMetric::Profit);
        assert_eq!(round.top_n, 5);
        assert_eq!(round.selected_skus.len(), 2);
    }

    #[test]
    fn ingest_error_messages_are_actionable() {
        let error = IngestError::UnsupportedFormat {
            extension: "pdf".to_string(),
        };
        assert_eq!(error.to_string(), "unsupported file format: .pdf");

        let error = IngestError::MissingRequiredColumn {
            column: "SKU".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "required column missing after renaming: SKU"
        );
    }
}
