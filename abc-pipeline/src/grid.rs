//! Cell grid abstraction over a single sheet.
//!
//! Spreadsheet and CSV readers both produce a [`SheetGrid`]; everything
//! downstream only sees the [`CellGrid`] trait.

use std::fmt;

/// A typed cell value as delivered by the file reader.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// One data row keyed by the header row's field names, in column order.
///
/// Field names are kept exactly as they appear in the header cells.
/// Empty cells are left out, so a missing key and a blank cell read the same.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawRecord {
    pub fields: Vec<(String, Cell)>,
}

impl RawRecord {
    /// First cell whose field name equals `name`.
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, cell)| cell)
    }
}

/// Read access to a rectangular grid of cells from one sheet.
pub trait CellGrid {
    /// Rows in source order. Rows may be ragged.
    fn rows(&self) -> &[Vec<Cell>];

    /// Re-extract records using `header_row` as the field-name row.
    ///
    /// Rows below the header that are entirely empty are skipped, as are
    /// columns whose header cell is empty. A header row past the end of the
    /// grid yields no records.
    fn records_from(&self, header_row: usize) -> Vec<RawRecord> {
        let rows = self.rows();
        let Some(header) = rows.get(header_row) else {
            return Vec::new();
        };

        let names: Vec<Option<String>> = header
            .iter()
            .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
            .collect();

        rows[header_row + 1..]
            .iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .map(|row| RawRecord {
                fields: names
                    .iter()
                    .zip(row.iter())
                    .filter_map(|(name, cell)| match name {
                        Some(name) if !cell.is_empty() => Some((name.clone(), cell.clone())),
                        _ => None,
                    })
                    .collect(),
            })
            .collect()
    }
}

/// An owned grid read from a named sheet (or a CSV file).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetGrid {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetGrid {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

impl CellGrid for SheetGrid {
    fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}
