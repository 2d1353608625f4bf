//! Immutable query-state value driving the dashboard list fetch.
//!
//! Every `with_*` filter update returns a new value with `page` reset to 1;
//! only [`ListQuery::with_page`] keeps the other filters and moves the page.
//! The free-text search term is not part of this value: it never reaches the
//! server.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::api::encode_component;
use crate::types::{Category, PageLimit, ReviewFilter, SortOrder};

/// Filters and page position sent to `GET /feedback`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListQuery {
    pub category: Option<Category>,
    pub reviewed: ReviewFilter,
    /// 1-based page number.
    pub page: u32,
    pub limit: PageLimit,
    pub sort: Option<SortOrder>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { category: None, reviewed: ReviewFilter::Any, page: 1, limit: PageLimit::Ten, sort: None }
    }
}

impl ListQuery {
    #[must_use]
    pub fn with_category(&self, category: Option<Category>) -> Self {
        Self { category, page: 1, ..self.clone() }
    }

    #[must_use]
    pub fn with_reviewed(&self, reviewed: ReviewFilter) -> Self {
        Self { reviewed, page: 1, ..self.clone() }
    }

    #[must_use]
    pub fn with_limit(&self, limit: PageLimit) -> Self {
        Self { limit, page: 1, ..self.clone() }
    }

    #[must_use]
    pub fn with_sort(&self, sort: Option<SortOrder>) -> Self {
        Self { sort, page: 1, ..self.clone() }
    }

    /// Move to `page` (floored at 1), keeping every filter.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    /// Non-empty parameters in wire order; unset filters are omitted.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(category) = self.category {
            pairs.push(("category", category.as_str().to_owned()));
        }
        if let Some(reviewed) = self.reviewed.as_query_value() {
            pairs.push(("reviewed", reviewed.to_owned()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.as_u32().to_string()));
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_owned()));
        }
        pairs
    }

    /// Percent-encoded `k=v&k=v` form of [`ListQuery::query_pairs`].
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{key}={}", encode_component(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
