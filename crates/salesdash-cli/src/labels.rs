//! Display label tables per language.
//!
//! A [`Labels`] value is a pure function of [`Language`], resolved once per
//! run and passed to the rendering code. Labels never influence data
//! semantics. Keys with no attested translation fall back to the English
//! string, the same degradation the upstream string tables used.

use salesdash_model::Language;

/// The label strings used by the report renderer.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub title: &'static str,
    pub average_price: &'static str,
    pub average_margin: &'static str,
    pub total_sales: &'static str,
    pub total_profit: &'static str,
    pub unique_products: &'static str,
    pub correlation: &'static str,
    pub top_selling_products: &'static str,
    pub sku: &'static str,
    pub quantity: &'static str,
    pub total: &'static str,
    pub profit: &'static str,
    pub summary_stats: &'static str,
}

const ENGLISH: Labels = Labels {
    title: "Product Sales Dashboard",
    average_price: "Average Price",
    average_margin: "Average Margin",
    total_sales: "Total Sales",
    total_profit: "Total Profit",
    unique_products: "Unique Products",
    correlation: "Price-Quantity Correlation",
    top_selling_products: "Top Selling Products",
    sku: "SKU",
    quantity: "Quantity",
    total: "Total",
    profit: "Profit",
    summary_stats: "Summary Statistics",
};

const FRENCH: Labels = Labels {
    title: "Tableau de Bord des Ventes de Produits",
    average_price: "Prix Moyen",
    average_margin: "Marge Moyenne",
    total_sales: "Ventes Totales",
    total_profit: "Total Profit",
    unique_products: "Unique Products",
    correlation: "Corrélation Prix-Quantité",
    top_selling_products: "Produits les Plus Vendus",
    sku: "SKU",
    quantity: "Quantité",
    total: "Total",
    profit: "Profit",
    summary_stats: "Statistiques Résumées",
};

const ARABIC: Labels = Labels {
    title: "لوحة مبيعات المنتجات",
    average_price: "متوسط السعر",
    average_margin: "متوسط الهامش",
    total_sales: "إجمالي المبيعات",
    total_profit: "Total Profit",
    unique_products: "Unique Products",
    correlation: "الترابط بين السعر والكمية",
    top_selling_products: "المنتجات الأكثر مبيعا",
    sku: "الرقم التسلسلي",
    quantity: "الكمية",
    total: "Total",
    profit: "Profit",
    summary_stats: "الإحصائيات الخلاصة",
};

const TAMAZIGHT: Labels = Labels {
    title: "ⵜⴰⴽⵡⵉⵍⵜ ⵏ ⵜⵓⴳⴳⴰⵔⴰ ⵏ ⵉⵎⴰⵍⵢⴰⵏ",
    average_price: "ⵜⴰⵎⵓⵍⵜ ⵏ ⵜⴰⵙⴰⵖⵜ",
    average_margin: "ⵜⴰⵎⵓⵍⵜ ⵏ ⵜⴰⴳⴻⵔⵎⵜ",
    total_sales: "ⵜⴰⵎⵓⵍⵜ ⵏ ⵜⵓⴳⴳⴰⵔⴰ",
    total_profit: "Total Profit",
    unique_products: "Unique Products",
    correlation: "ⵜⴰⵏⵎⵉⵔⵜ ⵏ ⵜⴰⵙⴰⵖⵜ ⵏ ⵜⴰⴳⴻⵔⵎⵜ",
    top_selling_products: "ⵉⵎⴰⵍⵢⴰⵏ ⵏ ⵜⵓⴳⴳⴰⵔⴰ ⵏ ⵜⴰⵡⵓⵔⵉ",
    sku: "ⵙⴽⵓ",
    quantity: "ⵜⴰⵙⵉⵏⵏⴰ",
    total: "Total",
    profit: "Profit",
    summary_stats: "ⴰⵙⵏⵓⵔⵓ ⵏ ⵜⵓⴳⴳⴰⵔⴰ ⵏ ⵉⵎⴰⵍⵢⴰⵏ",
};

/// Resolve the label table for a language.
pub fn labels_for(language: Language) -> &'static Labels {
    match language {
        Language::English => &ENGLISH,
        Language::French => &FRENCH,
        Language::Arabic => &ARABIC,
        Language::Tamazight => &TAMAZIGHT,
    }
}
