//! Error types for cache operations
//!
//! This module defines all error types that can occur
//! during cache operations and driver interactions.

use thiserror::Error;

/// Cache system errors
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis connection error: {0}")]
    ConnectionError(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache missed")]
    Missed,

    #[error("Cache operation timeout")]
    Timeout,

    #[error("Cache driver is closed")]
    Closed,
}

impl CacheError {
    /// True when the key simply was not cached
    pub fn is_miss(&self) -> bool {
        matches!(self, CacheError::Missed)
    }
}
