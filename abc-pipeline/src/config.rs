//! Ingestion and classification settings.
//!
//! Defaults mirror [`crate::thresholds`]. Both structs deserialize with
//! serde so a caller can load overrides from whatever format it uses.

use serde::Deserialize;

use crate::thresholds::{
    ABC_A_MAX_PERCENT, ABC_B_MAX_PERCENT, HEADER_KEYWORD, HEADER_SCAN_ROWS, TARGET_SHEET,
};

/// How an export is located and read.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Sheet holding the inventory table.
    pub sheet_name: String,
    /// Leading rows probed for the header row.
    pub header_scan_rows: usize,
    /// Substring (compared lower-cased) that identifies the header row.
    pub header_keyword: String,
    /// Field delimiter for CSV exports.
    pub csv_delimiter: u8,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            sheet_name: TARGET_SHEET.to_string(),
            header_scan_rows: HEADER_SCAN_ROWS,
            header_keyword: HEADER_KEYWORD.to_string(),
            csv_delimiter: b',',
        }
    }
}

/// Cumulative-percentage cut-offs of the ABC bands.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AbcThresholds {
    pub a_max_percent: f64,
    pub b_max_percent: f64,
}

impl Default for AbcThresholds {
    fn default() -> Self {
        Self {
            a_max_percent: ABC_A_MAX_PERCENT,
            b_max_percent: ABC_B_MAX_PERCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_report_rules() {
        let config = IngestConfig::default();
        assert_eq!(config.sheet_name, "Planilha4");
        assert_eq!(config.header_scan_rows, 15);
        assert_eq!(config.header_keyword, "material");

        let thresholds = AbcThresholds::default();
        assert_eq!(thresholds.a_max_percent, 70.0);
        assert_eq!(thresholds.b_max_percent, 90.0);
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let config: IngestConfig =
            serde_json::from_str(r#"{"sheet_name": "Estoque", "csv_delimiter": 59}"#).unwrap();
        assert_eq!(config.sheet_name, "Estoque");
        assert_eq!(config.csv_delimiter, b';');
        assert_eq!(config.header_scan_rows, 15);
    }
}
