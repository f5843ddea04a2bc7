//! Deterministic display formatting.
//!
//! Locale and currency arrive as explicit parameters; nothing here consults
//! process-wide locale state, so the same value always renders the same way.

use salesdash_model::Currency;

/// Format a monetary value with grouped thousands and the currency's
/// prefix/suffix: `format_currency(1234.5, Currency::Dirham)` renders
/// `"1,234.50 Dhs"`.
pub fn format_currency(value: f64, currency: Currency) -> String {
    format!(
        "{}{}{}",
        currency.prefix(),
        group_thousands(value),
        currency.suffix()
    )
}

/// Format a margin-style percentage: `format_percent(16.0)` renders
/// `"16.00%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Two-decimal rendering with comma-grouped thousands.
pub fn group_thousands(value: f64) -> String {
    let rendered = format!("{:.2}", value.abs());
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}
