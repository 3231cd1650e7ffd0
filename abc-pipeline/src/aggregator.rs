//! Grouped summaries over any subset of classified records.
//!
//! Every function here is a single pass over its input and never touches
//! the records, so the view can call them on each filter or sort change.

use std::collections::HashMap;

use serde::Serialize;

use crate::thresholds::{CATEGORY_KEYWORDS, OTHER_CATEGORY};
use crate::types::{AbcBand, AbcCategory, Aggregates, CategoryTotal, InventoryRecord, UnitTotal};

/// Product category of a material: the first keyword of
/// [`CATEGORY_KEYWORDS`] found in the upper-cased text, else `OUTROS`.
pub fn product_category(material: &str) -> &'static str {
    let upper = material.to_uppercase();
    CATEGORY_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| upper.contains(*keyword))
        .unwrap_or(OTHER_CATEGORY)
}

/// Total revenue, per-unit quantities and per-category totals of a subset.
///
/// Unit totals keep the order in which each (upper-cased) unit is first
/// seen. Category totals are sorted by revenue, highest first; equal
/// revenues keep first-seen order.
pub fn aggregate<'a, I>(records: I) -> Aggregates
where
    I: IntoIterator<Item = &'a InventoryRecord>,
{
    let mut total_revenue = 0.0;
    let mut unit_totals: Vec<UnitTotal> = Vec::new();
    let mut unit_index: HashMap<String, usize> = HashMap::new();
    let mut category_totals: Vec<CategoryTotal> = Vec::new();
    let mut category_index: HashMap<&'static str, usize> = HashMap::new();

    for record in records {
        total_revenue += record.total_sale_value;

        let unit = record.unit_key();
        match unit_index.get(&unit) {
            Some(&i) => unit_totals[i].quantity += record.physical_qty,
            None => {
                unit_index.insert(unit.clone(), unit_totals.len());
                unit_totals.push(UnitTotal {
                    unit,
                    quantity: record.physical_qty,
                });
            }
        }

        let category = product_category(&record.material);
        match category_index.get(category) {
            Some(&i) => {
                category_totals[i].revenue += record.total_sale_value;
                category_totals[i].quantity += record.physical_qty;
            }
            None => {
                category_index.insert(category, category_totals.len());
                category_totals.push(CategoryTotal {
                    category,
                    revenue: record.total_sale_value,
                    quantity: record.physical_qty,
                });
            }
        }
    }

    category_totals.sort_by(|a, b| {
        b.revenue
            .partial_cmp(&a.revenue)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Aggregates {
        total_revenue,
        unit_totals,
        category_totals,
    }
}

/// Record count and revenue per ABC band.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AbcBreakdown {
    /// Always A, B, C in that order, including empty bands.
    pub bands: Vec<AbcBand>,
    /// Records that have not been through classification.
    pub unclassified: usize,
}

/// Count and sum revenue per ABC band over a subset.
pub fn abc_breakdown<'a, I>(records: I) -> AbcBreakdown
where
    I: IntoIterator<Item = &'a InventoryRecord>,
{
    let mut bands: Vec<AbcBand> = AbcCategory::ALL
        .iter()
        .map(|&category| AbcBand {
            category,
            count: 0,
            revenue: 0.0,
        })
        .collect();
    let mut unclassified = 0;

    for record in records {
        match record.abc_category {
            Some(category) => {
                let band = &mut bands[category as usize];
                band.count += 1;
                band.revenue += record.total_sale_value;
            }
            None => unclassified += 1,
        }
    }

    AbcBreakdown {
        bands,
        unclassified,
    }
}
