//! Core PageKit functionality
//!
//! This module contains the main PageKit struct, which runs paginated queries
//! built by `sql-paginate` against a PostgreSQL pool and optionally caches pages.

use cache_system::{Cache, CacheDriver, TypedCache};
use config::{AppConfig, PaginationConfig};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use sql_paginate::{
    FieldAllowList, PaginatedQuery, Pagination, PaginationRequest, Placeholder, QueryArgument,
    QueryBuilder,
};
use sqlx::PgPool;
use sqlx::postgres::PgRow;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::PageKitError;

const PAGE_CACHE_PREFIX: &str = "page";

/// Runs allow-list guarded paginated queries
pub struct PageKit {
    pool: PgPool,
    pagination: PaginationConfig,
    cache: Option<Arc<dyn CacheDriver>>,
    cache_ttl: Duration,
}

impl PageKit {
    /// Create new PageKit with database connection
    pub async fn connect(config: &AppConfig) -> Result<Self, PageKitError> {
        let database = &config.database;
        let connection_string = database.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(database.max_connections)
            .min_connections(database.min_connections)
            .acquire_timeout(Duration::from_secs(database.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(database.idle_timeout_seconds));

        // Set max lifetime if specified
        if database.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(database.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        Ok(Self::from_pool(pool, config))
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool, config: &AppConfig) -> Self {
        Self {
            pool,
            pagination: config.pagination.clone(),
            cache: None,
            cache_ttl: config.cache.ttl_duration(),
        }
    }

    /// Cache fetched pages through `driver`
    pub fn with_cache(mut self, driver: Arc<dyn CacheDriver>) -> Self {
        self.cache = Some(driver);
        self
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn pagination_config(&self) -> &PaginationConfig {
        &self.pagination
    }

    /// Apply the configured page-size defaults to a raw request
    pub fn normalize(&self, request: &PaginationRequest) -> Pagination {
        request.to_pagination(&self.pagination)
    }

    /// Build the PostgreSQL statement for a page without running it
    pub fn build(
        &self,
        table: &str,
        pagination: &Pagination,
        allow_list: &FieldAllowList,
    ) -> Result<PaginatedQuery, PageKitError> {
        Ok(QueryBuilder::new(table)
            .placeholder(Placeholder::Dollar)
            .build(pagination, allow_list)?)
    }

    /// Fetch one page of `table`, served from the cache when possible
    ///
    /// Cache failures are logged and fall back to the database.
    pub async fn fetch_page<T>(
        &self,
        table: &str,
        pagination: &Pagination,
        allow_list: &FieldAllowList,
    ) -> Result<Vec<T>, PageKitError>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Serialize + DeserializeOwned + Send + Sync + Unpin,
    {
        let query = self.build(table, pagination, allow_list)?;
        let cache_key = Self::page_cache_key(table, &query);
        let cache = self.cache.as_ref().map(|driver| {
            TypedCache::<Vec<T>>::new(driver.clone(), PAGE_CACHE_PREFIX, self.cache_ttl)
        });

        if let Some(cache) = &cache {
            match cache.get(&cache_key).await {
                Ok(rows) => {
                    debug_log!("[FETCH_PAGE] Cache hit: {}", cache_key);
                    return Ok(rows);
                }
                Err(err) if err.is_miss() => {
                    debug_log!("[FETCH_PAGE] Cache miss: {}", cache_key);
                }
                Err(err) => {
                    tracing::warn!("[FETCH_PAGE] Cache lookup failed for {}: {}", cache_key, err);
                }
            }
        }

        trace_log!("[FETCH_PAGE] SQL: {}", query.statement);
        let rows = query.as_query_as::<T>().fetch_all(&self.pool).await?;

        if let Some(cache) = &cache {
            if let Err(err) = cache.set(&cache_key, &rows).await {
                tracing::warn!("[FETCH_PAGE] Cache store failed for {}: {}", cache_key, err);
            }
        }

        Ok(rows)
    }

    /// Cache key (below the page prefix) identifying a built query
    ///
    /// SHA-256 over the statement and typed arguments, so every process sharing a
    /// cache derives the same key.
    pub fn page_cache_key(table: &str, query: &PaginatedQuery) -> String {
        let mut hasher = Sha256::new();
        hasher.update((query.statement().len() as u64).to_le_bytes());
        hasher.update(query.statement().as_bytes());

        for argument in query.arguments() {
            match argument {
                QueryArgument::Text(value) => {
                    hasher.update(b"t");
                    hasher.update((value.len() as u64).to_le_bytes());
                    hasher.update(value.as_bytes());
                }
                QueryArgument::Integer(value) => {
                    hasher.update(b"i");
                    hasher.update(value.to_le_bytes());
                }
            }
        }

        format!("{}:{}", table.trim(), hex::encode(hasher.finalize()))
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), PageKitError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
