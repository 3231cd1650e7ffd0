//! Derived view over a classified dataset.
//!
//! A view is the visible subset after free-text search and column sort,
//! plus summaries recomputed over exactly that subset. Building a view
//! borrows the records; nothing here re-ranks or mutates them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aggregator::{abc_breakdown, aggregate, AbcBreakdown};
use crate::components::column_sort::ColumnSort;
use crate::components::search_filter::SearchFilter;
use crate::filter::Filter;
use crate::selector::Selector;
use crate::types::{Aggregates, InventoryRecord};

/// Sortable columns of the record table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Code,
    Material,
    AvailableQty,
    PhysicalQty,
    Unit,
    UnitSalePrice,
    TotalSaleValue,
    CoverageDays,
    AbcCategory,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match normalized.as_str() {
            "code" | "codigo" | "código" => Ok(SortKey::Code),
            "material" => Ok(SortKey::Material),
            "availableqty" | "available" => Ok(SortKey::AvailableQty),
            "physicalqty" | "physical" => Ok(SortKey::PhysicalQty),
            "unit" | "unidade" => Ok(SortKey::Unit),
            "unitsaleprice" | "price" => Ok(SortKey::UnitSalePrice),
            "totalsalevalue" | "revenue" => Ok(SortKey::TotalSaleValue),
            "coveragedays" | "coverage" => Ok(SortKey::CoverageDays),
            "abccategory" | "abc" => Ok(SortKey::AbcCategory),
            _ => Err(format!("unknown sort key '{}'", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// Search text and sort order of the active view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewQuery {
    pub search: String,
    pub sort: Option<SortSpec>,
}

/// Visible records with their summaries.
#[derive(Clone, Debug, Serialize)]
pub struct View<'a> {
    pub records: Vec<&'a InventoryRecord>,
    /// Records hidden by the search.
    pub filtered_out: usize,
    pub aggregates: Aggregates,
    pub abc: AbcBreakdown,
}

/// Apply search and sort to `records` and summarize the visible subset.
pub fn build_view<'a>(records: &'a [InventoryRecord], query: &ViewQuery) -> View<'a> {
    let mut visible: Vec<&'a InventoryRecord> = records.iter().collect();
    let mut filtered_out = 0;

    let filter = SearchFilter;
    if filter.enable(query) {
        let result = filter.filter(query, visible);
        filtered_out = result.removed.len();
        visible = result.kept;
        log::debug!(
            "{} kept {} records, removed {}",
            filter.name(),
            visible.len(),
            filtered_out
        );
    }

    let selector = ColumnSort;
    if selector.enable(query) {
        visible = selector.select(query, visible);
    }

    let aggregates = aggregate(visible.iter().copied());
    let abc = abc_breakdown(visible.iter().copied());

    View {
        records: visible,
        filtered_out,
        aggregates,
        abc,
    }
}
