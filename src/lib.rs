//! # PageKit
//!
//! Allow-list guarded paginated queries for PostgreSQL. Callers describe a page
//! (page number, size, projected fields, sort, filters) and PageKit turns it into a
//! parameterized statement that only ever names allow-listed columns.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pagekit::prelude::*;
//! use std::sync::Arc;
//!
//! #[derive(Debug, Serialize, Deserialize, FromRow)]
//! pub struct User {
//!     pub id: i64,
//!     pub name: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let cache = RedisDriver::new(&config.cache)?;
//!     let pagekit = PageKit::connect(&config).await?.with_cache(Arc::new(cache));
//!
//!     let allow_list = FieldAllowList::new()
//!         .with_field("id", "id")
//!         .with_field("name", "name")
//!         .with_field("status", "status");
//!
//!     let request: PaginationRequest = serde_json::from_str(
//!         r#"{"page": 2, "per_page": 20, "fields": "id,name", "sort": "-id"}"#,
//!     )?;
//!     let pagination = pagekit
//!         .normalize(&request)
//!         .filter(Filter::in_values("status", "1,2"));
//!
//!     let users: Vec<User> = pagekit.fetch_page("users", &pagination, &allow_list).await?;
//!     println!("Fetched {} users", users.len());
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::PageKit;
pub use errors::PageKitError;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, DatabaseConfig, PaginationConfig};

// Re-export internal crates
pub use cache_system;
pub use sql_paginate;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
