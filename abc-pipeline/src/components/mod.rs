pub mod column_sort;
pub mod search_filter;
