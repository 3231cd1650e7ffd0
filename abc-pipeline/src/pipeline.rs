//! Ingestion pipeline: header location, normalization, classification.
//!
//! One call produces one complete, classified [`Dataset`]. There is no
//! incremental update; a new file means a new dataset.

use std::path::Path;

use serde::Serialize;

use crate::abc_classifier::classify;
use crate::config::{AbcThresholds, IngestConfig};
use crate::csv_grid::load_csv_grid_file;
use crate::error::{IngestError, IngestResult};
use crate::grid::CellGrid;
use crate::header_locator::locate_header;
use crate::normalizer::normalize_records;
use crate::types::InventoryRecord;
use crate::workbook::{read_sheet_from_bytes, read_sheet_from_path};

/// A fully ingested and classified export.
#[derive(Clone, Debug, Serialize)]
pub struct Dataset {
    /// Sheet name or file stem the records came from.
    pub source: String,
    /// Header row found by the probe; `None` means row 0 was assumed.
    pub header_row: Option<usize>,
    /// Data rows below the header before non-item rows were dropped.
    pub raw_rows: usize,
    pub records: Vec<InventoryRecord>,
}

impl Dataset {
    pub fn dropped_rows(&self) -> usize {
        self.raw_rows - self.records.len()
    }
}

/// Run the pipeline over an already-read grid.
pub fn ingest_grid<G: CellGrid + ?Sized>(
    grid: &G,
    source: &str,
    config: &IngestConfig,
    thresholds: &AbcThresholds,
) -> Dataset {
    let header_row = locate_header(grid.rows(), config);
    match header_row {
        Some(row) => log::info!("{}: header row found at index {}", source, row),
        None => log::warn!(
            "{}: no header containing '{}' in the first {} rows, assuming row 0",
            source,
            config.header_keyword,
            config.header_scan_rows
        ),
    }

    let normalized = normalize_records(grid, header_row);
    let mut records = normalized.records;
    classify(&mut records, thresholds);

    log::info!(
        "{}: {} records kept, {} non-item rows dropped",
        source,
        records.len(),
        normalized.raw_rows - records.len()
    );

    Dataset {
        source: source.to_string(),
        header_row,
        raw_rows: normalized.raw_rows,
        records,
    }
}

/// Ingest the configured sheet of a workbook file.
pub fn ingest_workbook_path<P: AsRef<Path>>(
    path: P,
    config: &IngestConfig,
    thresholds: &AbcThresholds,
) -> IngestResult<Dataset> {
    let grid = read_sheet_from_path(path, &config.sheet_name)?;
    Ok(ingest_grid(&grid, &grid.name, config, thresholds))
}

/// Ingest the configured sheet of an in-memory workbook.
pub fn ingest_workbook_bytes(
    bytes: &[u8],
    config: &IngestConfig,
    thresholds: &AbcThresholds,
) -> IngestResult<Dataset> {
    let grid = read_sheet_from_bytes(bytes, &config.sheet_name)?;
    Ok(ingest_grid(&grid, &grid.name, config, thresholds))
}

/// Ingest a CSV export. CSV files have no sheets, so `sheet_name` is unused.
pub fn ingest_csv_path<P: AsRef<Path>>(
    path: P,
    config: &IngestConfig,
    thresholds: &AbcThresholds,
) -> IngestResult<Dataset> {
    let grid = load_csv_grid_file(path, config.csv_delimiter)?;
    Ok(ingest_grid(&grid, &grid.name, config, thresholds))
}

/// Dispatch on the file extension: CSV reader for `.csv`/`.txt`, workbook
/// reader for spreadsheet formats.
pub fn ingest_path<P: AsRef<Path>>(
    path: P,
    config: &IngestConfig,
    thresholds: &AbcThresholds,
) -> IngestResult<Dataset> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" | "txt" => ingest_csv_path(path, config, thresholds),
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => ingest_workbook_path(path, config, thresholds),
        _ => Err(IngestError::UnsupportedFormat(format!(
            ".{} (supported: .xlsx, .xlsm, .xlsb, .xls, .ods, .csv)",
            ext
        ))),
    }
}
