//! CSV inventory export reader.
//!
//! Reads a CSV export into a [`SheetGrid`] without assuming where the header
//! is, so the same header probe used for workbooks applies. Every non-blank
//! field becomes a text cell; numeric coercion happens during normalization.

use std::io::Read;
use std::path::Path;

use crate::error::IngestResult;
use crate::grid::{Cell, SheetGrid};

/// Load a grid from a CSV reader.
pub fn load_csv_grid<R: Read>(reader: R, name: &str, delimiter: u8) -> IngestResult<SheetGrid> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.trim().is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(SheetGrid::new(name, rows))
}

/// Load a grid from a CSV file path. The grid is named after the file stem.
pub fn load_csv_grid_file<P: AsRef<Path>>(path: P, delimiter: u8) -> IngestResult<SheetGrid> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = std::fs::File::open(path)?;
    load_csv_grid(file, &name, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;
    use crate::grid::CellGrid;

    const SAMPLE_CSV: &str = "\
Relatorio de Estoque,,
Código,Material,Valor Venda Estoque
001,BALDE 20L,500
002,TAMPA,
";

    #[test]
    fn load_sample_csv() {
        let grid = load_csv_grid(SAMPLE_CSV.as_bytes(), "estoque", b',').unwrap();
        assert_eq!(grid.name, "estoque");
        assert_eq!(grid.rows().len(), 4);
        assert_eq!(grid.rows()[1][1], Cell::from("Material"));
        assert_eq!(grid.rows()[2][2], Cell::from("500"));
        assert_eq!(grid.rows()[3][2], Cell::Empty);
    }

    #[test]
    fn semicolon_delimited_and_ragged_rows() {
        let data = "Material;Unidade\nSACO;KG;extra\nCAIXA\n";
        let grid = load_csv_grid(data.as_bytes(), "s", b';').unwrap();
        assert_eq!(grid.rows()[1].len(), 3);
        assert_eq!(grid.rows()[2].len(), 1);
        assert_eq!(grid.rows()[1][1], Cell::from("KG"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_csv_grid_file("/definitely/not/here.csv", b',').unwrap_err();
        assert!(matches!(err, IngestError::Io(_)));
    }
}
