//! Header row detection.
//!
//! Exports often carry title and metadata rows above the real column
//! names. The header is the first row within the scan window where some
//! cell contains the header keyword (case-insensitive).

use crate::config::IngestConfig;
use crate::grid::Cell;

/// Index of the first row among the first `scan_rows` rows containing a
/// cell whose lower-cased text includes `keyword`, or `None`.
///
/// `keyword` is expected lower-case.
pub fn locate_header_row(rows: &[Vec<Cell>], scan_rows: usize, keyword: &str) -> Option<usize> {
    rows.iter().take(scan_rows).position(|row| {
        row.iter()
            .any(|cell| cell.to_string().to_lowercase().contains(keyword))
    })
}

/// [`locate_header_row`] with the window and keyword from `config`.
pub fn locate_header(rows: &[Vec<Cell>], config: &IngestConfig) -> Option<usize> {
    locate_header_row(
        rows,
        config.header_scan_rows,
        &config.header_keyword.to_lowercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::{HEADER_KEYWORD, HEADER_SCAN_ROWS};

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::from(*c)).collect()
    }

    fn padded(blank_rows: usize, header: Vec<Cell>) -> Vec<Vec<Cell>> {
        let mut rows: Vec<Vec<Cell>> = (0..blank_rows)
            .map(|i| row(&[format!("Relatório linha {}", i).as_str()]))
            .collect();
        rows.push(header);
        rows.push(row(&["001", "BALDE"]));
        rows
    }

    #[test]
    fn finds_header_below_title_rows() {
        let rows = padded(4, row(&["Código", "Material"]));
        assert_eq!(locate_header_row(&rows, HEADER_SCAN_ROWS, HEADER_KEYWORD), Some(4));
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let rows = padded(0, row(&["CÓDIGO", "DESCRIÇÃO DO MATERIAL"]));
        assert_eq!(locate_header_row(&rows, HEADER_SCAN_ROWS, HEADER_KEYWORD), Some(0));
    }

    #[test]
    fn first_qualifying_row_wins() {
        let mut rows = padded(2, row(&["Material"]));
        rows.push(row(&["Material de limpeza"]));
        assert_eq!(locate_header_row(&rows, HEADER_SCAN_ROWS, HEADER_KEYWORD), Some(2));
    }

    #[test]
    fn last_row_of_window_is_probed() {
        let rows = padded(14, row(&["Material"]));
        assert_eq!(locate_header_row(&rows, HEADER_SCAN_ROWS, HEADER_KEYWORD), Some(14));
    }

    #[test]
    fn header_beyond_window_is_not_found() {
        let rows = padded(15, row(&["Material"]));
        assert_eq!(locate_header_row(&rows, HEADER_SCAN_ROWS, HEADER_KEYWORD), None);
    }

    #[test]
    fn empty_grid_is_not_found() {
        assert_eq!(locate_header_row(&[], HEADER_SCAN_ROWS, HEADER_KEYWORD), None);
    }

    #[test]
    fn config_keyword_is_lowercased() {
        let config = IngestConfig {
            header_keyword: "PRODUTO".into(),
            ..IngestConfig::default()
        };
        let rows = padded(1, row(&["Produto", "Qtd"]));
        assert_eq!(locate_header(&rows, &config), Some(1));
    }
}
