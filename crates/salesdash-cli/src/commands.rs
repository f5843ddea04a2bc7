use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use salesdash_core::{aggregate_by_sku, load_sales_frame, summarize, supported_formats, top_n};
use salesdash_model::{
    Currency, Language, OVERVIEW_RANKING_SIZE, ReportOptions, SortMetric,
};
use salesdash_report::{describe, write_csv};

use crate::cli::{CurrencyArg, LanguageArg, MetricArg, ReportArgs};
use crate::summary::apply_table_style;
use crate::types::ReportResult;

pub fn run_formats() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Format", "Extension"]);
    apply_table_style(&mut table);
    for format in supported_formats() {
        let kind = if format.is_delimited() {
            "delimited text"
        } else {
            "spreadsheet"
        };
        table.add_row(vec![kind.to_string(), format!(".{format}")]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let report_span = info_span!("report", source = %args.file.display());
    let _report_guard = report_span.enter();
    let report_start = Instant::now();

    let options = report_options(args);
    let loaded = load_sales_frame(&args.file, &options)?;
    let df = &loaded.frame.data;

    let aggregates = aggregate_by_sku(df).context("aggregate by SKU")?;
    let ranked = top_n(&aggregates, options.sort_metric, options.top_n);
    let top_overview: Vec<String> = top_n(&aggregates, options.sort_metric, OVERVIEW_RANKING_SIZE)
        .into_iter()
        .map(|aggregate| aggregate.sku)
        .collect();
    let summary = summarize(df).context("summarize table")?;
    let stats = args.describe.then(|| describe(df));

    let export_path = match &options.export_path {
        Some(path) => {
            write_csv(df, path).with_context(|| format!("export {}", path.display()))?;
            info!(path = %path.display(), rows = df.height(), "table exported");
            Some(path.clone())
        }
        None => None,
    };

    let format = loaded.frame.format.context("source format missing")?;
    info!(
        source = %loaded.frame.source_name(),
        input_rows = loaded.input_count,
        output_rows = df.height(),
        product_count = aggregates.len(),
        duration_ms = report_start.elapsed().as_millis(),
        "report complete"
    );

    Ok(ReportResult {
        source: args.file.clone(),
        format,
        input_count: loaded.input_count,
        row_count: df.height(),
        summary,
        top_overview,
        ranked,
        metric: options.sort_metric,
        language: options.language,
        currency: options.currency,
        diagnostics: loaded.diagnostics,
        stats,
        export_path,
    })
}

fn report_options(args: &ReportArgs) -> ReportOptions {
    ReportOptions {
        language: match args.language {
            LanguageArg::English => Language::English,
            LanguageArg::French => Language::French,
            LanguageArg::Arabic => Language::Arabic,
            LanguageArg::Tamazight => Language::Tamazight,
        },
        currency: match args.currency {
            CurrencyArg::Dirham => Currency::Dirham,
            CurrencyArg::Dollar => Currency::Dollar,
            CurrencyArg::Euro => Currency::Euro,
        },
        selected_skus: args.skus.iter().map(|sku| sku.trim().to_string()).collect(),
        sort_metric: match args.metric {
            MetricArg::ItemsSold => SortMetric::ItemsSold,
            MetricArg::Profit => SortMetric::Profit,
            MetricArg::TotalSales => SortMetric::TotalSales,
        },
        top_n: args.top,
        export_path: args.export.clone(),
    }
}
