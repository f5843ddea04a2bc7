//! Canonical column names for normalized sales tables.
//!
//! Source files arrive with locale-specific headers; after normalization every
//! table speaks this vocabulary. Only [`SKU`] is mandatory — downstream
//! consumers check for the presence of the rest before using them.

/// Product identifier. The sole required column.
pub const SKU: &str = "SKU";
/// Units sold per row.
pub const QUANTITY: &str = "Quantity";
/// Unit cost/price.
pub const PRICE: &str = "Price";
/// Profit percentage, stored in the 0-100 range (not a fraction).
pub const MARGIN: &str = "Margin";
/// Gross sale amount, typically quantity x price.
pub const TOTAL: &str = "Total";
/// Derived monetary value, typically total x margin / 100.
pub const PROFIT: &str = "Profit";
/// Optional transaction date.
pub const DATE: &str = "Date";
/// Optional human-readable product name.
pub const NAME: &str = "Name";

/// Columns that must hold Float64 values after coercion.
pub const NUMERIC_COLUMNS: [&str; 5] = [QUANTITY, PRICE, MARGIN, TOTAL, PROFIT];

/// The canonical column set expected after normalization. Absence of any
/// column other than [`SKU`] degrades gracefully.
pub const CANONICAL_COLUMNS: [&str; 5] = [SKU, PRICE, QUANTITY, MARGIN, TOTAL];
