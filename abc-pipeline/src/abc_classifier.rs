//! ABC (Pareto) classification of inventory items by revenue.
//!
//! Items are ranked by `total_sale_value` descending (ties keep their
//! original relative order). Walking the ranking once, each item's
//! cumulative revenue share is its own revenue plus that of every item
//! ranked above it, divided by the dataset total:
//!   - share <= 70%       -> A
//!   - 70% < share <= 90% -> B
//!   - otherwise          -> C
//!
//! Ranking positions are carried as indices into the caller's slice, so
//! duplicate or blank codes never make an item's rank ambiguous.
//!
//! Classification always runs over the whole dataset. Filtered views reuse
//! the categories assigned here and never re-rank.

use std::cmp::Ordering;

use serde::Serialize;

use crate::config::AbcThresholds;
use crate::types::{AbcCategory, InventoryRecord};

/// One position of the revenue ranking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankEntry {
    /// Index of the record in the classified slice.
    pub index: usize,
    /// Revenue of this record and every record ranked above it.
    pub cumulative_revenue: f64,
    /// `cumulative_revenue` as a percentage of the total (0 when the total is 0).
    pub cumulative_percent: f64,
    pub category: AbcCategory,
}

/// Band for a cumulative revenue percentage.
pub fn category_for_percent(percent: f64, thresholds: &AbcThresholds) -> AbcCategory {
    if percent <= thresholds.a_max_percent {
        AbcCategory::A
    } else if percent <= thresholds.b_max_percent {
        AbcCategory::B
    } else {
        AbcCategory::C
    }
}

/// Rank `records` by revenue and compute each position's cumulative share.
///
/// The returned entries are in ranking order. A zero revenue total puts
/// every record in class A: no share can be computed, so nothing is
/// discriminated.
pub fn abc_ranking(records: &[InventoryRecord], thresholds: &AbcThresholds) -> Vec<RankEntry> {
    let total_revenue: f64 = records.iter().map(|r| r.total_sale_value).sum();

    let mut order: Vec<usize> = (0..records.len()).collect();
    // `sort_by` is stable: equal revenues keep source order.
    order.sort_by(|&a, &b| {
        records[b]
            .total_sale_value
            .partial_cmp(&records[a].total_sale_value)
            .unwrap_or(Ordering::Equal)
    });

    if total_revenue == 0.0 {
        if !records.is_empty() {
            log::warn!(
                "total revenue is zero across {} records; classifying all as A",
                records.len()
            );
        }
        return order
            .into_iter()
            .map(|index| RankEntry {
                index,
                cumulative_revenue: 0.0,
                cumulative_percent: 0.0,
                category: AbcCategory::A,
            })
            .collect();
    }

    let mut running = 0.0;
    order
        .into_iter()
        .map(|index| {
            running += records[index].total_sale_value;
            let percent = 100.0 * running / total_revenue;
            RankEntry {
                index,
                cumulative_revenue: running,
                cumulative_percent: percent,
                category: category_for_percent(percent, thresholds),
            }
        })
        .collect()
}

/// Assign `abc_category` to every record in place. Record order is untouched.
pub fn classify(records: &mut [InventoryRecord], thresholds: &AbcThresholds) {
    let ranking = abc_ranking(records, thresholds);
    for entry in &ranking {
        records[entry.index].abc_category = Some(entry.category);
    }

    let count = |category: AbcCategory| {
        ranking
            .iter()
            .filter(|e| e.category == category)
            .count()
    };
    log::info!(
        "ABC classification: {} records (A={}, B={}, C={})",
        records.len(),
        count(AbcCategory::A),
        count(AbcCategory::B),
        count(AbcCategory::C)
    );
}

/// Owned variant of [`classify`].
pub fn classify_records(
    mut records: Vec<InventoryRecord>,
    thresholds: &AbcThresholds,
) -> Vec<InventoryRecord> {
    classify(&mut records, thresholds);
    records
}
