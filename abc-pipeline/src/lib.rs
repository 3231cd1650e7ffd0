//! Inventory export ingestion and ABC classification.
//!
//! Pipeline flow:
//! 1. A file reader (calamine workbook or CSV) produces a [`SheetGrid`]
//! 2. The header locator finds the column-name row
//! 3. The normalizer builds typed [`InventoryRecord`]s and drops summary rows
//! 4. The ABC classifier ranks the whole dataset by revenue
//! 5. Views apply search and sort, and the aggregator summarizes the
//!    visible subset

pub mod abc_classifier;
pub mod aggregator;
pub mod components;
pub mod config;
pub mod csv_grid;
pub mod error;
pub mod filter;
pub mod grid;
pub mod header_locator;
pub mod normalizer;
pub mod pipeline;
pub mod selector;
pub mod state;
pub mod thresholds;
pub mod types;
pub mod util;
pub mod view;
pub mod workbook;

pub use abc_classifier::{abc_ranking, classify, classify_records, RankEntry};
pub use aggregator::{abc_breakdown, aggregate, product_category, AbcBreakdown};
pub use config::{AbcThresholds, IngestConfig};
pub use error::{IngestError, IngestResult};
pub use grid::{Cell, CellGrid, RawRecord, SheetGrid};
pub use header_locator::{locate_header, locate_header_row};
pub use normalizer::{normalize_records, Normalized};
pub use pipeline::{ingest_grid, ingest_path, ingest_workbook_bytes, Dataset};
pub use state::PipelineState;
pub use types::{AbcCategory, Aggregates, CategoryTotal, InventoryRecord, UnitTotal};
pub use view::{build_view, SortDirection, SortKey, SortSpec, View, ViewQuery};
