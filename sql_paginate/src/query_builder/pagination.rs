//! Query builder utilities
//!
//! The pagination descriptor consumed by the builder.

use crate::query_builder::filter::Filter;
use crate::query_builder::ordering::{Sort, SortOrder};
use serde::{Deserialize, Serialize};

/// Page size used by `Pagination::default()`
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Pagination configuration for a single list request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based; anything below 1 is treated as the first page
    pub page: i64,
    pub per_page: i64,
    /// Logical names of the requested columns, in output order
    pub fields: Vec<String>,
    pub sort: Vec<Sort>,
    pub filters: Vec<Filter>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

impl Pagination {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page,
            per_page,
            fields: Vec::new(),
            sort: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn with_field(mut self, field: &str) -> Self {
        self.fields.push(field.to_string());
        self
    }

    /// Append a sort key (lower precedence than the ones already added)
    pub fn sort_by(mut self, field: &str, order: SortOrder) -> Self {
        self.sort.push(Sort::new(field, order));
        self
    }

    /// Add a filter condition
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add multiple filters (combined with AND)
    pub fn filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters.extend(filters);
        self
    }

    pub fn normalized_page(&self) -> i64 {
        self.page.max(1)
    }

    /// Number of rows skipped before this page, never negative
    pub fn offset(&self) -> i64 {
        (self.normalized_page() - 1).saturating_mul(self.per_page.max(0))
    }
}
