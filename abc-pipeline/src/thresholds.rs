//! Centralized constants for ingestion and ABC classification.
//!
//! These are business rules of the inventory report. Changing the category
//! keyword order or the ABC cut-offs changes classification output.

/// Sheet that carries the inventory export inside the workbook.
pub const TARGET_SHEET: &str = "Planilha4";

/// Number of leading rows probed when looking for the header row.
pub const HEADER_SCAN_ROWS: usize = 15;

/// Lower-cased token whose presence marks a row as the header row.
pub const HEADER_KEYWORD: &str = "material";

/// Lower-cased token that marks footer/subtotal rows inserted by the spreadsheet.
pub const SUMMARY_ROW_TOKEN: &str = "total";

/// Unit of measure used when the export leaves `Unidade` blank.
pub const DEFAULT_UNIT: &str = "UN";

/// Cumulative revenue percentage up to which an item is class A.
pub const ABC_A_MAX_PERCENT: f64 = 70.0;

/// Cumulative revenue percentage up to which an item is class B.
/// Anything above is class C.
pub const ABC_B_MAX_PERCENT: f64 = 90.0;

/// Product category keywords, tested in this order against the upper-cased
/// material text. First match wins.
pub const CATEGORY_KEYWORDS: [&str; 7] = [
    "BALDE", "CINTA", "TAMPA", "PAPEL", "BOBINA", "SACO", "CAIXA",
];

/// Category for materials that match none of [`CATEGORY_KEYWORDS`].
pub const OTHER_CATEGORY: &str = "OUTROS";

/// Field names of the export, after trimming.
pub mod columns {
    pub const CODE: &str = "Código";
    pub const MATERIAL: &str = "Material";
    pub const AVAILABLE_QTY: &str = "Quantidade Disponível";
    pub const PHYSICAL_QTY: &str = "Quantidade Física";
    pub const UNIT: &str = "Unidade";
    pub const UNIT_SALE_PRICE: &str = "Valor Venda Unitário";
    pub const TOTAL_SALE_VALUE: &str = "Valor Venda Estoque";
    pub const COVERAGE_DAYS: &str = "Cobertura (Dias)";
}
