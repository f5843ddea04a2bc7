//! Configuration for a single report invocation.
//!
//! Everything here is built once from user input and passed through the
//! pipeline by value. Nothing reads or mutates process-global state.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Display language for rendered labels.
///
/// Selects a string table only; data semantics never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    French,
    Arabic,
    Tamazight,
}

/// Metric used to order the top-N product ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortMetric {
    /// Sum of quantity sold.
    ItemsSold,
    /// Sum of derived profit.
    Profit,
    /// Sum of gross sales.
    #[default]
    TotalSales,
}

impl SortMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMetric::ItemsSold => "items-sold",
            SortMetric::Profit => "profit",
            SortMetric::TotalSales => "total-sales",
        }
    }
}

/// Currency used when formatting monetary values for display.
///
/// Formatting is a pure function of value and currency; there is no
/// process-wide locale setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    /// Moroccan dirham, rendered with a "Dhs" suffix.
    #[default]
    Dirham,
    Dollar,
    Euro,
}

impl Currency {
    /// Suffix appended after the formatted amount, empty for symbol-prefix
    /// currencies.
    pub fn suffix(&self) -> &'static str {
        match self {
            Currency::Dirham => " Dhs",
            Currency::Dollar => "",
            Currency::Euro => " €",
        }
    }

    /// Symbol prepended before the formatted amount.
    pub fn prefix(&self) -> &'static str {
        match self {
            Currency::Dollar => "$",
            _ => "",
        }
    }
}

/// Options for one report run, assembled from CLI arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Display language for labels.
    pub language: Language,
    /// Currency for monetary display values.
    pub currency: Currency,
    /// Product identifiers to keep. Empty means no filter.
    pub selected_skus: BTreeSet<String>,
    /// Metric ordering the top-N ranking.
    pub sort_metric: SortMetric,
    /// Number of products in the ranking table.
    pub top_n: usize,
    /// Optional CSV re-export destination.
    pub export_path: Option<PathBuf>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            currency: Currency::default(),
            selected_skus: BTreeSet::new(),
            sort_metric: SortMetric::default(),
            top_n: DEFAULT_RANKING_SIZE,
            export_path: None,
        }
    }
}

/// Ranking length used by the detailed top-sellers table.
pub const DEFAULT_RANKING_SIZE: usize = 10;

/// Ranking length used by compact overview cards.
pub const OVERVIEW_RANKING_SIZE: usize = 3;

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    #[must_use]
    pub fn with_selected_skus(mut self, skus: impl IntoIterator<Item = String>) -> Self {
        self.selected_skus = skus.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_sort_metric(mut self, metric: SortMetric) -> Self {
        self.sort_metric = metric;
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }
}
