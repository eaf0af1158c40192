//! Byte-oriented cache driver abstraction

use crate::errors::CacheError;
use async_trait::async_trait;
use std::time::Duration;

/// Opaque key/value store backing every cache
///
/// Drivers never see typed values; serialization happens in
/// [`TypedCache`](crate::TypedCache).
#[async_trait]
pub trait CacheDriver: Send + Sync {
    /// Store `data` under `key`; a zero `ttl` means no expiry
    async fn set(&self, key: &str, data: &[u8], ttl: Duration) -> Result<(), CacheError>;

    /// Fetch the bytes under `key`, `CacheError::Missed` when absent or expired
    async fn get(&self, key: &str) -> Result<Vec<u8>, CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check backend connectivity
    async fn ping(&self) -> Result<(), CacheError>;

    async fn close(&self) -> Result<(), CacheError>;
}
