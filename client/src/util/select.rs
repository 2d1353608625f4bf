//! Conversions between `<select>` option values and `portal` filter types.
//!
//! An empty option value means "no filter". Unknown values fall back to the
//! default rather than erroring, since they can only come from the markup.

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use portal::{Category, PageLimit, ReviewFilter, SortOrder};

pub fn category_from_value(value: &str) -> Option<Category> {
    value.parse().ok()
}

pub fn category_value(category: Option<Category>) -> &'static str {
    category.map_or("", Category::as_str)
}

pub fn review_from_value(value: &str) -> ReviewFilter {
    value.parse().unwrap_or_default()
}

pub fn review_value(filter: ReviewFilter) -> &'static str {
    filter.as_query_value().unwrap_or("")
}

pub fn limit_from_value(value: &str) -> PageLimit {
    value.parse().unwrap_or_default()
}

pub fn sort_from_value(value: &str) -> Option<SortOrder> {
    value.parse().ok()
}

pub fn sort_value(sort: Option<SortOrder>) -> &'static str {
    sort.map_or("", SortOrder::as_str)
}
