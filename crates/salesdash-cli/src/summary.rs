//! Terminal rendering of the report: overview cards, rankings, statistics.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use salesdash_core::metric_value;
use salesdash_ingest::format_numeric;
use salesdash_model::SortMetric;
use salesdash_report::{format_currency, format_percent};

use crate::labels::labels_for;
use crate::types::ReportResult;

pub fn print_report(result: &ReportResult) {
    let labels = labels_for(result.language);
    println!("{}", labels.title);
    println!("Source: {} (.{})", result.source.display(), result.format);
    if result.row_count == result.input_count {
        println!("Rows: {}", result.row_count);
    } else {
        println!("Rows: {} of {} (filtered)", result.row_count, result.input_count);
    }
    if let Some(path) = &result.export_path {
        println!("Export: {}", path.display());
    }
    println!();

    print_overview_cards(result);
    print_ranking(result);
    if let Some(stats) = &result.stats {
        print_describe(result, stats);
    }

    if !result.diagnostics.is_empty() {
        eprintln!("Warnings:");
        for diagnostic in &result.diagnostics {
            eprintln!("- {diagnostic}");
        }
    }
}

fn print_overview_cards(result: &ReportResult) {
    let labels = labels_for(result.language);
    let summary = &result.summary;
    let correlation = summary
        .price_quantity_correlation
        .map(|r| format!("{r:.2}"))
        .unwrap_or_else(|| "-".to_string());

    let mut table = Table::new();
    apply_card_style(&mut table);
    table.add_row(vec![
        label_cell(labels.average_price),
        value_cell(format_currency(summary.mean_price, result.currency)),
    ]);
    table.add_row(vec![
        label_cell(labels.average_margin),
        value_cell(format_percent(summary.mean_margin)),
    ]);
    table.add_row(vec![
        label_cell(labels.total_sales),
        value_cell(format_currency(summary.total_sales, result.currency)),
    ]);
    table.add_row(vec![
        label_cell(labels.total_profit),
        value_cell(format_currency(summary.total_profit, result.currency)),
    ]);
    table.add_row(vec![
        label_cell(labels.unique_products),
        value_cell(summary.unique_products.to_string()),
    ]);
    table.add_row(vec![
        label_cell(labels.correlation),
        value_cell(correlation),
    ]);
    if !result.top_overview.is_empty() {
        table.add_row(vec![
            label_cell(labels.top_selling_products),
            value_cell(result.top_overview.join(", ")),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    println!("{table}");
}

fn print_ranking(result: &ReportResult) {
    if result.ranked.is_empty() {
        return;
    }
    let labels = labels_for(result.language);
    println!();
    println!("{} ({})", labels.top_selling_products, result.metric.as_str());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell(labels.sku),
        header_cell(labels.quantity),
        header_cell(labels.total),
        header_cell(labels.profit),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (rank, aggregate) in result.ranked.iter().enumerate() {
        let metric_cell = Cell::new(format_numeric(metric_value(aggregate, result.metric)))
            .add_attribute(Attribute::Bold);
        let mut row = vec![
            Cell::new(rank + 1).fg(Color::DarkGrey),
            Cell::new(&aggregate.sku)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(format_numeric(aggregate.quantity_sum)),
            Cell::new(format_numeric(aggregate.total_sum)),
            Cell::new(format_numeric(aggregate.profit_sum)),
        ];
        // Highlight the column the ranking is sorted by.
        let metric_index = match result.metric {
            SortMetric::ItemsSold => 2,
            SortMetric::TotalSales => 3,
            SortMetric::Profit => 4,
        };
        row[metric_index] = metric_cell;
        table.add_row(row);
    }
    println!("{table}");
}

fn print_describe(result: &ReportResult, stats: &[salesdash_report::ColumnStats]) {
    let labels = labels_for(result.language);
    println!();
    println!("{}", labels.summary_stats);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Mean"),
        header_cell("Std"),
        header_cell("Min"),
        header_cell("25%"),
        header_cell("50%"),
        header_cell("75%"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for entry in stats {
        table.add_row(vec![
            Cell::new(&entry.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(entry.count),
            Cell::new(format!("{:.2}", entry.mean)),
            Cell::new(format!("{:.2}", entry.std)),
            Cell::new(format_numeric(entry.min)),
            Cell::new(format!("{:.2}", entry.q25)),
            Cell::new(format!("{:.2}", entry.median)),
            Cell::new(format!("{:.2}", entry.q75)),
            Cell::new(format_numeric(entry.max)),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_card_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(64);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Cyan)
}

fn value_cell(value: String) -> Cell {
    Cell::new(value).add_attribute(Attribute::Bold)
}
