//! Request normalization
//!
//! Raw list-request input as a handler receives it, and its conversion into a
//! [`Pagination`] using the configured page-size defaults.

use crate::query_builder::{Filter, Pagination, Sort, SortOrder};
use config::PaginationConfig;
use serde::{Deserialize, Serialize};

/// Unvalidated pagination input
///
/// ```json
/// {
///   "page": 3,
///   "per_page": 15,
///   "fields": "name,id,phone",
///   "sort": "-id,name:asc",
///   "filters": [{ "key": "status", "value": "1,2", "condition": "in" }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationRequest {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Comma-separated logical field names
    pub fields: Option<String>,
    /// Comma-separated sort keys: `field`, `field:asc`, `field:desc` or `-field`
    pub sort: Option<String>,
    pub filters: Vec<Filter>,
}

impl PaginationRequest {
    /// Normalize into a pagination descriptor
    ///
    /// A missing or non-positive page becomes 1, a missing or non-positive
    /// per_page becomes the configured default, and per_page is capped at the
    /// configured maximum.
    pub fn to_pagination(&self, config: &PaginationConfig) -> Pagination {
        let page = self.page.filter(|page| *page >= 1).unwrap_or(1);
        let per_page = match self.per_page {
            Some(per_page) if per_page > 0 => per_page.min(config.max_per_page),
            _ => config.default_per_page,
        };

        let fields = self
            .fields
            .as_deref()
            .map(split_list)
            .unwrap_or_default();

        let sort = self
            .sort
            .as_deref()
            .map(|sort| split_list(sort).iter().filter_map(|key| parse_sort_key(key)).collect())
            .unwrap_or_default();

        Pagination {
            page,
            per_page,
            fields,
            sort,
            filters: self.filters.clone(),
        }
    }
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_sort_key(key: &str) -> Option<Sort> {
    let (field, order) = if let Some(field) = key.strip_prefix('-') {
        (field, SortOrder::Desc)
    } else if let Some((field, direction)) = key.split_once(':') {
        (field, SortOrder::parse(direction))
    } else {
        (key, SortOrder::Asc)
    };

    let field = field.trim();
    if field.is_empty() {
        None
    } else {
        Some(Sort::new(field, order))
    }
}
