//! SQL Paginate - paginated SELECT construction for PageKit
//!
//! This crate turns a [`Pagination`] descriptor and a [`FieldAllowList`] into a
//! parameterized statement plus the ordered arguments for its placeholders.
//! Only identifiers found in the allow-list are ever written into SQL text.

/// Debug/trace logging compiled in only with the `debug-logging` feature
#[cfg(feature = "debug-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod allow_list;
pub mod argument;
pub mod binding;
pub mod errors;
pub mod prelude;
pub mod query_builder;
pub mod request;
pub mod validation;

pub use allow_list::FieldAllowList;
pub use argument::QueryArgument;
pub use errors::QueryBuildError;
pub use query_builder::{
    build_pagination_query, Filter, FilterCondition, PaginatedQuery, Pagination, Placeholder,
    QueryBuilder, Sort, SortOrder,
};
pub use request::PaginationRequest;
pub use validation::{ValidatedColumnName, ValidationError};
