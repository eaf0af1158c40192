//! Convenience re-exports for common sql-paginate usage

// Query building
pub use crate::query_builder::{
    build_pagination_query, Filter, FilterCondition, PaginatedQuery, Pagination, Placeholder,
    QueryBuilder, Sort, SortOrder,
};

// Allow-list and arguments
pub use crate::allow_list::FieldAllowList;
pub use crate::argument::QueryArgument;

// Request normalization
pub use crate::request::PaginationRequest;

// Error types
pub use crate::errors::QueryBuildError;
pub use crate::validation::{ValidatedColumnName, ValidationError};

// Pagination defaults (re-exported from config)
pub use config::PaginationConfig;
