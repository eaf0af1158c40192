//! Convenience re-exports for common PageKit usage
//!
//! This prelude module re-exports the most commonly used items from the PageKit crates,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use pagekit::prelude::*;
//!
//! let allow_list = FieldAllowList::identity(["id", "name"]);
//! let query = build_pagination_query("user", &Pagination::new(1, 10), &allow_list).unwrap();
//! assert_eq!(query.statement, "SELECT id,name FROM user\nLIMIT ? offset ?");
//! ```

// Core PageKit components
pub use crate::core::PageKit;
pub use crate::errors::PageKitError;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, DatabaseConfig, PaginationConfig};

// Re-export query building
pub use sql_paginate::prelude::*;

// Re-export cache system
pub use cache_system::prelude::*;

// Common external dependencies
pub use sqlx;
pub use tokio;

// Commonly used sqlx types
pub use sqlx::{FromRow, PgPool, Postgres, Row};
