use std::cmp::Ordering;

use crate::selector::{cmp_f64, Selector};
use crate::types::InventoryRecord;
use crate::view::{SortDirection, SortKey, ViewQuery};

/// Orders records by the column named in the query's sort spec.
///
/// Text columns compare lexically, numeric columns numerically. Absent
/// values (no coverage, not yet classified) sort below any present value.
pub struct ColumnSort;

impl<'a> Selector<ViewQuery, &'a InventoryRecord> for ColumnSort {
    fn enable(&self, query: &ViewQuery) -> bool {
        query.sort.is_some()
    }

    fn compare(
        &self,
        query: &ViewQuery,
        a: &&'a InventoryRecord,
        b: &&'a InventoryRecord,
    ) -> Ordering {
        let Some(spec) = query.sort else {
            return Ordering::Equal;
        };
        let ordering = compare_by_key(spec.key, a, b);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

fn compare_by_key(key: SortKey, a: &InventoryRecord, b: &InventoryRecord) -> Ordering {
    match key {
        SortKey::Code => a.code.cmp(&b.code),
        SortKey::Material => a.material.cmp(&b.material),
        SortKey::Unit => a.unit.cmp(&b.unit),
        SortKey::AvailableQty => cmp_f64(a.available_qty, b.available_qty),
        SortKey::PhysicalQty => cmp_f64(a.physical_qty, b.physical_qty),
        SortKey::UnitSalePrice => cmp_f64(a.unit_sale_price, b.unit_sale_price),
        SortKey::TotalSaleValue => cmp_f64(a.total_sale_value, b.total_sale_value),
        SortKey::CoverageDays => match (a.coverage_days, b.coverage_days) {
            (Some(x), Some(y)) => cmp_f64(x, y),
            (x, y) => x.is_some().cmp(&y.is_some()),
        },
        SortKey::AbcCategory => a.abc_category.cmp(&b.abc_category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AbcCategory;
    use crate::view::SortSpec;

    fn make_record(material: &str, revenue: f64, coverage: Option<f64>) -> InventoryRecord {
        InventoryRecord {
            material: material.to_string(),
            total_sale_value: revenue,
            coverage_days: coverage,
            ..InventoryRecord::default()
        }
    }

    fn query(key: SortKey, direction: SortDirection) -> ViewQuery {
        ViewQuery {
            sort: Some(SortSpec { key, direction }),
            ..ViewQuery::default()
        }
    }

    fn materials(records: &[&InventoryRecord]) -> Vec<String> {
        records.iter().map(|r| r.material.clone()).collect()
    }

    #[test]
    fn sorts_text_ascending_and_descending() {
        let records = vec![
            make_record("SACO", 1.0, None),
            make_record("BALDE", 2.0, None),
            make_record("CINTA", 3.0, None),
        ];
        let asc = ColumnSort.select(
            &query(SortKey::Material, SortDirection::Asc),
            records.iter().collect(),
        );
        assert_eq!(materials(&asc), vec!["BALDE", "CINTA", "SACO"]);

        let desc = ColumnSort.select(
            &query(SortKey::Material, SortDirection::Desc),
            records.iter().collect(),
        );
        assert_eq!(materials(&desc), vec!["SACO", "CINTA", "BALDE"]);
    }

    #[test]
    fn sorts_numbers_numerically() {
        let records = vec![
            make_record("a", 100.0, None),
            make_record("b", 9.0, None),
            make_record("c", 25.0, None),
        ];
        let sorted = ColumnSort.select(
            &query(SortKey::TotalSaleValue, SortDirection::Desc),
            records.iter().collect(),
        );
        assert_eq!(materials(&sorted), vec!["a", "c", "b"]);
    }

    #[test]
    fn absent_values_sort_lowest_and_ties_are_stable() {
        let records = vec![
            make_record("x", 0.0, Some(10.0)),
            make_record("y", 0.0, None),
            make_record("z", 0.0, Some(10.0)),
        ];
        let sorted = ColumnSort.select(
            &query(SortKey::CoverageDays, SortDirection::Asc),
            records.iter().collect(),
        );
        assert_eq!(materials(&sorted), vec!["y", "x", "z"]);
    }

    #[test]
    fn abc_category_orders_a_before_c() {
        let mut c = make_record("c", 0.0, None);
        c.abc_category = Some(AbcCategory::C);
        let mut a = make_record("a", 0.0, None);
        a.abc_category = Some(AbcCategory::A);
        let records = vec![c, a];
        let sorted = ColumnSort.select(
            &query(SortKey::AbcCategory, SortDirection::Asc),
            records.iter().collect(),
        );
        assert_eq!(materials(&sorted), vec!["a", "c"]);
    }
}
