use crate::filter::{Filter, FilterResult};
use crate::types::InventoryRecord;
use crate::view::ViewQuery;

/// Keeps records whose material or code contains the search text,
/// ignoring case.
pub struct SearchFilter;

impl<'a> Filter<ViewQuery, &'a InventoryRecord> for SearchFilter {
    fn enable(&self, query: &ViewQuery) -> bool {
        !query.search.trim().is_empty()
    }

    fn filter(
        &self,
        query: &ViewQuery,
        candidates: Vec<&'a InventoryRecord>,
    ) -> FilterResult<&'a InventoryRecord> {
        let needle = query.search.trim().to_lowercase();
        let (kept, removed): (Vec<_>, Vec<_>) = candidates.into_iter().partition(|r| {
            r.material.to_lowercase().contains(&needle) || r.code.to_lowercase().contains(&needle)
        });

        FilterResult { kept, removed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(code: &str, material: &str) -> InventoryRecord {
        InventoryRecord {
            code: code.to_string(),
            material: material.to_string(),
            ..InventoryRecord::default()
        }
    }

    fn query(search: &str) -> ViewQuery {
        ViewQuery {
            search: search.to_string(),
            ..ViewQuery::default()
        }
    }

    #[test]
    fn matches_material_or_code_ignoring_case() {
        let records = vec![
            make_record("BL-01", "Balde 20L"),
            make_record("TP-02", "Tampa"),
            make_record("X-balde", "Cinta"),
        ];
        let result = SearchFilter.filter(&query("BALDE"), records.iter().collect());
        let codes: Vec<&str> = result.kept.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["BL-01", "X-balde"]);
        assert_eq!(result.removed.len(), 1);
    }

    #[test]
    fn blank_search_disables_filter() {
        assert!(!SearchFilter.enable(&query("   ")));
        assert!(SearchFilter.enable(&query("saco")));
    }
}
