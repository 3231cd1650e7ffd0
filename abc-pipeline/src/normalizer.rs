//! Record normalization.
//!
//! Turns raw header-keyed rows into [`InventoryRecord`]s:
//!   - field names are trimmed (exports pad headers with spaces)
//!   - numeric fields are coerced independently, failures become 0
//!   - rows without a material, or whose material mentions "total",
//!     are footer/subtotal rows and are dropped
//!
//! Columns other than the known export columns are ignored.

use crate::grid::{Cell, CellGrid, RawRecord};
use crate::thresholds::{columns, DEFAULT_UNIT, SUMMARY_ROW_TOKEN};
use crate::types::InventoryRecord;
use crate::util::parse_number;

/// Output of a normalization pass.
#[derive(Clone, Debug, Default)]
pub struct Normalized {
    pub records: Vec<InventoryRecord>,
    /// Data rows seen below the header, before dropping non-items.
    pub raw_rows: usize,
}

impl Normalized {
    pub fn dropped(&self) -> usize {
        self.raw_rows - self.records.len()
    }
}

/// Re-extract the grid from `header_row` (row 0 when `None`) and normalize
/// every record.
pub fn normalize_records<G: CellGrid + ?Sized>(grid: &G, header_row: Option<usize>) -> Normalized {
    let raw = grid.records_from(header_row.unwrap_or(0));
    let records: Vec<InventoryRecord> = raw.iter().filter_map(normalize_record).collect();

    log::debug!(
        "normalized {} of {} rows ({} non-item rows dropped)",
        records.len(),
        raw.len(),
        raw.len() - records.len()
    );

    Normalized {
        raw_rows: raw.len(),
        records,
    }
}

/// Normalize a single raw row; `None` for rows that are not inventory items.
pub fn normalize_record(raw: &RawRecord) -> Option<InventoryRecord> {
    let fields = TrimmedFields(raw);

    let material = text(fields.get(columns::MATERIAL));
    if !is_item_material(&material) {
        return None;
    }

    let unit = text(fields.get(columns::UNIT));

    Some(InventoryRecord {
        code: text(fields.get(columns::CODE)),
        material,
        available_qty: number(fields.get(columns::AVAILABLE_QTY)),
        physical_qty: number(fields.get(columns::PHYSICAL_QTY)),
        unit: if unit.is_empty() {
            DEFAULT_UNIT.to_string()
        } else {
            unit
        },
        unit_sale_price: number(fields.get(columns::UNIT_SALE_PRICE)),
        total_sale_value: number(fields.get(columns::TOTAL_SALE_VALUE)),
        coverage_days: optional_number(fields.get(columns::COVERAGE_DAYS)),
        abc_category: None,
    })
}

/// A material names an item when it is non-blank and not a summary line.
fn is_item_material(material: &str) -> bool {
    !material.is_empty() && !material.to_lowercase().contains(SUMMARY_ROW_TOKEN)
}

/// Field lookup by trimmed name.
struct TrimmedFields<'a>(&'a RawRecord);

impl<'a> TrimmedFields<'a> {
    fn get(&self, name: &str) -> Option<&'a Cell> {
        self.0
            .fields
            .iter()
            .find(|(field, _)| field.trim() == name)
            .map(|(_, cell)| cell)
    }
}

fn text(cell: Option<&Cell>) -> String {
    cell.map(|c| c.to_string().trim().to_string())
        .unwrap_or_default()
}

/// Coerce a cell to a number; anything missing or unparsable is 0.
fn number(cell: Option<&Cell>) -> f64 {
    match cell {
        None | Some(Cell::Empty) => 0.0,
        Some(Cell::Number(n)) if n.is_finite() => *n,
        Some(Cell::Number(_)) => 0.0,
        Some(Cell::Text(s)) => parse_number(s).unwrap_or(0.0),
        Some(Cell::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
    }
}

/// Like [`number`] but keeps "absent" distinct from zero.
fn optional_number(cell: Option<&Cell>) -> Option<f64> {
    match cell {
        Some(Cell::Number(n)) if n.is_finite() => Some(*n),
        Some(Cell::Text(s)) if !s.trim().is_empty() => parse_number(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::SheetGrid;

    fn raw(fields: &[(&str, Cell)]) -> RawRecord {
        RawRecord {
            fields: fields
                .iter()
                .map(|(name, cell)| (name.to_string(), cell.clone()))
                .collect(),
        }
    }

    #[test]
    fn full_row_is_normalized() {
        let record = normalize_record(&raw(&[
            ("Código", Cell::from("  A-01 ")),
            ("Material ", Cell::from("BALDE 20L")),
            ("Quantidade Disponível", Cell::Number(-5.0)),
            (" Quantidade Física", Cell::Number(12.0)),
            ("Unidade", Cell::from("cx")),
            ("Valor Venda Unitário", Cell::from("10.5")),
            ("Valor Venda Estoque  ", Cell::Number(126.0)),
            ("Cobertura (Dias)", Cell::Number(30.0)),
        ]))
        .unwrap();

        assert_eq!(record.code, "A-01");
        assert_eq!(record.material, "BALDE 20L");
        assert!((record.available_qty - (-5.0)).abs() < 0.01);
        assert!((record.physical_qty - 12.0).abs() < 0.01);
        assert_eq!(record.unit, "cx");
        assert!((record.unit_sale_price - 10.5).abs() < 0.01);
        assert!((record.total_sale_value - 126.0).abs() < 0.01);
        assert_eq!(record.coverage_days, Some(30.0));
        assert_eq!(record.abc_category, None);
    }

    #[test]
    fn missing_and_unparsable_numbers_default_to_zero() {
        let record = normalize_record(&raw(&[
            ("Material", Cell::from("SACO")),
            ("Quantidade Física", Cell::from("n/a")),
            ("Valor Venda Estoque", Cell::from("1.234,56")),
            ("Valor Venda Unitário", Cell::Number(f64::NAN)),
        ]))
        .unwrap();

        assert_eq!(record.physical_qty, 0.0);
        assert_eq!(record.total_sale_value, 0.0);
        assert_eq!(record.unit_sale_price, 0.0);
        assert_eq!(record.available_qty, 0.0);
        assert_eq!(record.coverage_days, None);
        assert_eq!(record.unit, "UN");
        assert_eq!(record.code, "");
    }

    #[test]
    fn numeric_code_and_material_are_carried_as_text() {
        let record = normalize_record(&raw(&[
            ("Código", Cell::Number(10045.0)),
            ("Material", Cell::Number(7.0)),
        ]))
        .unwrap();
        assert_eq!(record.code, "10045");
        assert_eq!(record.material, "7");
    }

    #[test]
    fn blank_material_rows_are_dropped() {
        assert!(normalize_record(&raw(&[("Código", Cell::from("9"))])).is_none());
        assert!(normalize_record(&raw(&[("Material", Cell::from("   "))])).is_none());
    }

    #[test]
    fn total_rows_are_dropped_in_any_case() {
        for material in ["TOTAL", "Total Geral", "subtotal caixas"] {
            let row = raw(&[("Material", Cell::from(material))]);
            assert!(normalize_record(&row).is_none(), "{} should be dropped", material);
        }
    }

    #[test]
    fn normalize_records_uses_row_zero_without_header() {
        let grid = SheetGrid::new(
            "Planilha4",
            vec![
                vec![Cell::from("Material"), Cell::from("Valor Venda Estoque")],
                vec![Cell::from("CINTA"), Cell::Number(10.0)],
                vec![Cell::from("TOTAL"), Cell::Number(10.0)],
            ],
        );
        let normalized = normalize_records(&grid, None);
        assert_eq!(normalized.raw_rows, 2);
        assert_eq!(normalized.records.len(), 1);
        assert_eq!(normalized.dropped(), 1);
        assert_eq!(normalized.records[0].material, "CINTA");
    }

    #[test]
    fn normalize_records_honours_header_row() {
        let grid = SheetGrid::new(
            "Planilha4",
            vec![
                vec![Cell::from("Estoque em 01/02")],
                vec![Cell::from("Material "), Cell::from(" Unidade ")],
                vec![Cell::from("PAPEL A4"), Cell::from("RESMA")],
            ],
        );
        let normalized = normalize_records(&grid, Some(1));
        assert_eq!(normalized.records.len(), 1);
        assert_eq!(normalized.records[0].unit, "RESMA");
    }
}
