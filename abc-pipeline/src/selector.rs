use std::cmp::Ordering;

use crate::util;

/// Selectors order (and optionally truncate) the candidate list.
pub trait Selector<Q, C> {
    /// Default selection: sort and truncate based on provided configs.
    fn select(&self, query: &Q, candidates: Vec<C>) -> Vec<C> {
        let mut sorted = self.sort(query, candidates);
        if let Some(limit) = self.size() {
            sorted.truncate(limit);
        }
        sorted
    }

    /// Decide if this selector should run for the given query.
    fn enable(&self, _query: &Q) -> bool {
        true
    }

    /// Ordering of two candidates for this query.
    fn compare(&self, query: &Q, a: &C, b: &C) -> Ordering;

    /// Stable sort: candidates that compare equal keep their relative order.
    fn sort(&self, query: &Q, candidates: Vec<C>) -> Vec<C> {
        let mut sorted = candidates;
        sorted.sort_by(|a, b| self.compare(query, a, b));
        sorted
    }

    /// Optionally provide a maximum number of candidates to select.
    /// Defaults to no truncation if not overridden.
    fn size(&self) -> Option<usize> {
        None
    }

    /// Returns a stable name for logging.
    fn name(&self) -> &str {
        util::short_type_name(std::any::type_name::<Self>())
    }
}

/// Total order on floats with NaN after every number.
pub(crate) fn cmp_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
