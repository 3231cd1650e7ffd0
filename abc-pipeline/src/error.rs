//! Ingestion error types.
//!
//! Only failures that abort an ingestion get a variant here. Unparsable
//! numeric cells and a zero revenue total are resolved where they occur.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Sheet \"{sheet}\" not found (available: {})", .available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    #[error("Workbook read error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),
}

impl IngestError {
    /// Name of the missing sheet, when this is a `SheetNotFound`.
    pub fn missing_sheet(&self) -> Option<&str> {
        match self {
            IngestError::SheetNotFound { sheet, .. } => Some(sheet),
            _ => None,
        }
    }
}

/// Result type alias for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;
