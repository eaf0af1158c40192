//! In-process cache driver
//!
//! Keeps entries in a shared map with per-entry expiry. Useful for tests and
//! single-process deployments without Redis.

use crate::driver::CacheDriver;
use crate::errors::CacheError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct Entry {
    data: Vec<u8>,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Map-backed cache driver; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryDriver {
    prefix: String,
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    closed: Arc<AtomicBool>,
}

impl MemoryDriver {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            ..Self::default()
        }
    }

    /// Number of stored entries; expired ones are evicted on the next read of
    /// that key or the next `set`
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn ensure_open(&self) -> Result<(), CacheError> {
        if self.closed.load(Ordering::Acquire) {
            Err(CacheError::Closed)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CacheDriver for MemoryDriver {
    async fn set(&self, key: &str, data: &[u8], ttl: Duration) -> Result<(), CacheError> {
        self.ensure_open()?;

        let expires_at = if ttl.is_zero() {
            None
        } else {
            Some(Instant::now() + ttl)
        };

        let mut entries = self.entries.write().await;
        let now = Instant::now();
        entries.retain(|_, entry| !entry.is_expired(now));
        entries.insert(
            self.build_key(key),
            Entry {
                data: data.to_vec(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        self.ensure_open()?;

        let cache_key = self.build_key(key);
        let mut entries = self.entries.write().await;

        let expired = match entries.get(&cache_key) {
            Some(entry) if !entry.is_expired(Instant::now()) => return Ok(entry.data.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.remove(&cache_key);
        }
        Err(CacheError::Missed)
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.ensure_open()?;

        self.entries.write().await.remove(&self.build_key(key));
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        self.ensure_open()
    }

    async fn close(&self) -> Result<(), CacheError> {
        self.closed.store(true, Ordering::Release);
        self.entries.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() {
        let driver = MemoryDriver::new("app:");

        driver.set("k", b"value", Duration::ZERO).await.unwrap();
        assert_eq!(driver.get("k").await.unwrap(), b"value".to_vec());

        driver.delete("k").await.unwrap();
        assert!(driver.get("k").await.unwrap_err().is_miss());

        // Deleting an absent key is not an error
        assert!(driver.delete("k").await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_key() {
        let driver = MemoryDriver::new("");
        assert!(matches!(driver.get("nope").await, Err(CacheError::Missed)));
    }

    #[tokio::test]
    async fn test_prefix_isolates_drivers() {
        let shared = MemoryDriver::new("a:");
        let other = MemoryDriver {
            prefix: "b:".to_string(),
            entries: shared.entries.clone(),
            closed: Arc::new(AtomicBool::new(false)),
        };

        shared.set("k", b"1", Duration::ZERO).await.unwrap();
        other.set("k", b"2", Duration::ZERO).await.unwrap();

        assert_eq!(shared.get("k").await.unwrap(), b"1".to_vec());
        assert_eq!(other.get("k").await.unwrap(), b"2".to_vec());
        assert_eq!(shared.len().await, 2);
    }

    #[tokio::test]
    async fn test_entries_expire() {
        let driver = MemoryDriver::new("");

        driver
            .set("short", b"x", Duration::from_millis(20))
            .await
            .unwrap();
        driver.set("long", b"y", Duration::from_secs(60)).await.unwrap();

        tokio::time::sleep(Duration::from_millis(60)).await;

        assert!(driver.get("short").await.unwrap_err().is_miss());
        assert_eq!(driver.get("long").await.unwrap(), b"y".to_vec());
        assert_eq!(driver.len().await, 1);
    }

    #[tokio::test]
    async fn test_set_evicts_expired_entries() {
        let driver = MemoryDriver::new("page:");

        for i in 0..1000 {
            driver
                .set(&format!("q{}", i), b"rows", Duration::from_millis(1))
                .await
                .unwrap();
        }

        tokio::time::sleep(Duration::from_millis(20)).await;
        driver.set("fresh", b"rows", Duration::ZERO).await.unwrap();

        assert_eq!(driver.len().await, 1);
        assert_eq!(driver.get("fresh").await.unwrap(), b"rows".to_vec());
    }

    #[tokio::test]
    async fn test_close_rejects_further_use() {
        let driver = MemoryDriver::new("");
        driver.set("k", b"v", Duration::ZERO).await.unwrap();
        assert!(driver.ping().await.is_ok());

        driver.close().await.unwrap();

        assert!(driver.is_empty().await);
        assert!(matches!(driver.ping().await, Err(CacheError::Closed)));
        assert!(matches!(driver.get("k").await, Err(CacheError::Closed)));
        assert!(matches!(
            driver.set("k", b"v", Duration::ZERO).await,
            Err(CacheError::Closed)
        ));
    }
}
