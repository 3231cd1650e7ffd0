//! Workbook reader backed by calamine.
//!
//! Opens `.xlsx`, `.xlsm`, `.xlsb`, `.xls` and `.ods` files and turns the
//! requested sheet into a [`SheetGrid`]. Row indices of the grid are sheet
//! row indices: leading blank rows that calamine trims from the used range
//! are restored as empty rows.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};

use crate::error::{IngestError, IngestResult};
use crate::grid::{Cell, SheetGrid};

/// Read one sheet from a workbook file on disk.
pub fn read_sheet_from_path<P: AsRef<Path>>(path: P, sheet: &str) -> IngestResult<SheetGrid> {
    let mut workbook = open_workbook_auto(path)?;
    read_sheet(&mut workbook, sheet)
}

/// Read one sheet from an in-memory workbook (e.g. an uploaded file).
pub fn read_sheet_from_bytes(bytes: &[u8], sheet: &str) -> IngestResult<SheetGrid> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    read_sheet(&mut workbook, sheet)
}

fn read_sheet<RS>(workbook: &mut Sheets<RS>, sheet: &str) -> IngestResult<SheetGrid>
where
    RS: Read + Seek,
{
    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet) {
        return Err(IngestError::SheetNotFound {
            sheet: sheet.to_string(),
            available,
        });
    }

    let range = workbook.worksheet_range(sheet)?;
    let rows = range_to_rows(&range);
    log::debug!("sheet \"{}\": {} rows read", sheet, rows.len());
    Ok(SheetGrid::new(sheet, rows))
}

fn range_to_rows(range: &Range<Data>) -> Vec<Vec<Cell>> {
    let leading_blank = range.start().map_or(0, |(row, _)| row as usize);
    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); leading_blank];
    rows.extend(range.rows().map(|row| row.iter().map(data_to_cell).collect()));
    rows
}

/// Convert a calamine cell into the grid's cell type.
fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        // Excel serial number, same as the raw cell value.
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) => Cell::Empty,
    }
}
