//! Query builder utilities
//!
//! Assembles the clauses produced by [`SqlGenerator`] into one statement.

use crate::allow_list::FieldAllowList;
use crate::argument::QueryArgument;
use crate::errors::QueryBuildError;
use crate::query_builder::pagination::Pagination;
use crate::query_builder::sql_generation::{Placeholder, PlaceholderGenerator, SqlGenerator};
use serde::Serialize;

/// A built statement and the values for its placeholders, in order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PaginatedQuery {
    pub statement: String,
    pub arguments: Vec<QueryArgument>,
}

impl PaginatedQuery {
    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn arguments(&self) -> &[QueryArgument] {
        &self.arguments
    }

    pub fn into_parts(self) -> (String, Vec<QueryArgument>) {
        (self.statement, self.arguments)
    }
}

/// Paginated SELECT builder for one table
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: String,
    placeholder: Placeholder,
}

impl QueryBuilder {
    /// `table` comes from trusted code and is written as-is
    pub fn new(table: &str) -> Self {
        Self {
            table: table.trim().to_string(),
            placeholder: Placeholder::default(),
        }
    }

    /// Set placeholder style
    pub fn placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Build the statement
    ///
    /// Shape, one clause per line:
    ///
    /// ```text
    /// SELECT <columns> FROM <table>
    /// WHERE <filters joined by AND>      (omitted when no filter applies)
    /// ORDER BY <column asc|desc, ...>    (omitted when no sort key applies)
    /// LIMIT ? offset ?
    /// ```
    pub fn build(
        &self,
        pagination: &Pagination,
        allow_list: &FieldAllowList,
    ) -> Result<PaginatedQuery, QueryBuildError> {
        if self.table.is_empty() {
            return Err(QueryBuildError::EmptyTable);
        }
        if pagination.per_page <= 0 {
            return Err(QueryBuildError::InvalidPerPage(pagination.per_page));
        }

        let mut placeholders = PlaceholderGenerator::new(self.placeholder);

        let select_clause = SqlGenerator::build_select_clause(&pagination.fields, allow_list);
        let (where_clause, mut arguments) =
            SqlGenerator::build_where_clause(&pagination.filters, allow_list, &mut placeholders);
        let order_clause = SqlGenerator::build_order_clause(&pagination.sort, allow_list);
        let limit_clause = SqlGenerator::build_limit_clause(&mut placeholders);

        arguments.push(QueryArgument::Integer(pagination.per_page));
        arguments.push(QueryArgument::Integer(pagination.offset()));

        let statement = [
            format!("SELECT {} FROM {}", select_clause, self.table),
            where_clause,
            order_clause,
            limit_clause,
        ]
        .into_iter()
        .filter(|clause| !clause.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

        trace_log!(
            "[PAGINATE] Built query on {} with {} arguments: {}",
            self.table,
            arguments.len(),
            statement
        );

        Ok(PaginatedQuery {
            statement,
            arguments,
        })
    }
}

/// Build a paginated SELECT with `?` placeholders
pub fn build_pagination_query(
    table: &str,
    pagination: &Pagination,
    allow_list: &FieldAllowList,
) -> Result<PaginatedQuery, QueryBuildError> {
    QueryBuilder::new(table).build(pagination, allow_list)
}
