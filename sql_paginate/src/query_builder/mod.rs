//! Query builder utilities
//!
//! This module provides paginated SELECT construction.

pub mod builder;
pub mod filter;
pub mod ordering;
pub mod pagination;
pub mod sql_generation;



pub use builder::{build_pagination_query, PaginatedQuery, QueryBuilder};
pub use filter::{Filter, FilterCondition};
pub use ordering::{Sort, SortOrder};
pub use pagination::Pagination;
pub use sql_generation::{Placeholder, PlaceholderGenerator, SqlGenerator};
