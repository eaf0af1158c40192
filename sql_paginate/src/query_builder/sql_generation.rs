//! Query builder utilities
//!
//! Clause-level SQL generation. Every identifier is looked up through the
//! allow-list; entries that do not resolve are skipped.

use crate::allow_list::FieldAllowList;
use crate::argument::QueryArgument;
use crate::query_builder::filter::Filter;
use crate::query_builder::ordering::Sort;

/// Placeholder syntax of the target driver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `?` (MySQL, SQLite, database/sql style drivers)
    #[default]
    Question,
    /// `$1`, `$2`, ... numbered across the whole statement (PostgreSQL)
    Dollar,
}

/// Hands out placeholders in statement order
#[derive(Debug, Clone)]
pub struct PlaceholderGenerator {
    style: Placeholder,
    issued: usize,
}

impl PlaceholderGenerator {
    pub fn new(style: Placeholder) -> Self {
        Self { style, issued: 0 }
    }

    pub fn next_placeholder(&mut self) -> String {
        self.issued += 1;
        match self.style {
            Placeholder::Question => "?".to_string(),
            Placeholder::Dollar => format!("${}", self.issued),
        }
    }

    /// Number of placeholders issued so far
    pub fn issued(&self) -> usize {
        self.issued
    }
}

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build the SELECT list
    ///
    /// Falls back to every allowed column when nothing requested resolves, and to
    /// `*` when the allow-list is empty.
    pub fn build_select_clause(fields: &[String], allow_list: &FieldAllowList) -> String {
        let resolved: Vec<&str> = fields
            .iter()
            .filter_map(|field| Self::resolve(allow_list, field, "field"))
            .collect();

        if !resolved.is_empty() {
            return resolved.join(",");
        }

        if allow_list.is_empty() {
            tracing::warn!("[PAGINATE] Empty allow-list, selecting every column");
            return "*".to_string();
        }

        allow_list.columns().collect::<Vec<_>>().join(",")
    }

    /// Build WHERE clause from filters
    pub fn build_where_clause(
        filters: &[Filter],
        allow_list: &FieldAllowList,
        placeholders: &mut PlaceholderGenerator,
    ) -> (String, Vec<QueryArgument>) {
        let mut values = Vec::new();

        let conditions: Vec<String> = filters
            .iter()
            .filter_map(|filter| {
                let column = Self::resolve(allow_list, &filter.key, "filter")?;
                Self::build_condition_sql(column, filter, &mut values, placeholders)
            })
            .collect();

        if conditions.is_empty() {
            (String::new(), values)
        } else {
            (format!("WHERE {}", conditions.join(" AND ")), values)
        }
    }

    fn build_condition_sql(
        column: &str,
        filter: &Filter,
        values: &mut Vec<QueryArgument>,
        placeholders: &mut PlaceholderGenerator,
    ) -> Option<String> {
        let operator = filter.condition.to_sql();

        if filter.condition.is_set_membership() {
            let tokens = filter.tokens();
            if tokens.is_empty() {
                // IN () is not valid SQL
                debug_log!(
                    "[PAGINATE] Skipping {} filter on '{}' with no values",
                    operator,
                    filter.key
                );
                return None;
            }

            let markers: Vec<String> = tokens
                .iter()
                .map(|token| {
                    values.push(QueryArgument::from(*token));
                    placeholders.next_placeholder()
                })
                .collect();

            return Some(format!("{} {}({})", column, operator, markers.join(",")));
        }

        values.push(QueryArgument::from(filter.value.as_str()));
        Some(format!(
            "{} {} {}",
            column,
            operator,
            placeholders.next_placeholder()
        ))
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(sort: &[Sort], allow_list: &FieldAllowList) -> String {
        let order_items: Vec<String> = sort
            .iter()
            .filter_map(|key| {
                Self::resolve(allow_list, &key.field, "sort")
                    .map(|column| format!("{} {}", column, key.order.to_sql()))
            })
            .collect();

        if order_items.is_empty() {
            String::new()
        } else {
            format!("ORDER BY {}", order_items.join(", "))
        }
    }

    /// Build LIMIT/OFFSET clause; the caller binds per_page then offset
    pub fn build_limit_clause(placeholders: &mut PlaceholderGenerator) -> String {
        let limit = placeholders.next_placeholder();
        let offset = placeholders.next_placeholder();
        format!("LIMIT {} offset {}", limit, offset)
    }

    #[cfg_attr(not(feature = "debug-logging"), allow(unused_variables))]
    fn resolve<'a>(allow_list: &'a FieldAllowList, logical: &str, site: &str) -> Option<&'a str> {
        let column = allow_list.resolve(logical);
        if column.is_none() {
            debug_log!("[PAGINATE] Dropping {} '{}': not in allow-list", site, logical);
        }
        column
    }
}
