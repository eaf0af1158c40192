//! Redis cache driver
//!
//! This module provides the Redis-backed [`CacheDriver`]
//! and its shared connection management.

use crate::driver::CacheDriver;
use crate::errors::CacheError;
use async_trait::async_trait;
use config::CacheConfig;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, Client};
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Redis-based cache driver
#[derive(Clone)]
pub struct RedisDriver {
    client: Arc<Client>,
    prefix: String,
    connection_timeout: Duration,
    connection_pool: Arc<RwLock<Option<MultiplexedConnection>>>,
}

impl Debug for RedisDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let connection_status = {
            match self.connection_pool.try_read() {
                Ok(pool) => {
                    if pool.is_some() {
                        "connected"
                    } else {
                        "no_connection"
                    }
                }
                Err(_) => "lock_error",
            }
        };

        f.debug_struct("RedisDriver")
            .field("prefix", &self.prefix)
            .field("connected", &connection_status)
            .finish()
    }
}

impl RedisDriver {
    /// Create a new driver; no connection is made until first use
    pub fn new(config: &CacheConfig) -> Result<Self, CacheError> {
        let client = Client::open(config.redis_url.as_str())?;

        Ok(Self {
            client: Arc::new(client),
            prefix: config.key_prefix.clone(),
            connection_timeout: config.connection_timeout(),
            connection_pool: Arc::new(RwLock::new(None)),
        })
    }

    /// Get or create Redis connection
    async fn get_connection(&self) -> Result<MultiplexedConnection, CacheError> {
        let mut pool = self.connection_pool.write().await;

        if pool.is_none() {
            let connection = tokio::time::timeout(
                self.connection_timeout,
                self.client.get_multiplexed_async_connection(),
            )
            .await
            .map_err(|_| {
                tracing::warn!(
                    "[CACHE] Redis connection timed out after {:?}",
                    self.connection_timeout
                );
                CacheError::Timeout
            })??;
            tracing::debug!("[CACHE] Redis connection established");
            *pool = Some(connection);
        }

        pool.as_ref().cloned().ok_or(CacheError::Closed)
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

/// `SET key data`, with `PX <millis>` unless `ttl` is zero
fn set_command(cache_key: &str, data: &[u8], ttl: Duration) -> redis::Cmd {
    let mut command = redis::cmd("SET");
    command.arg(cache_key).arg(data);

    if !ttl.is_zero() {
        // PX 0 is rejected by Redis
        let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
        command.arg("PX").arg(millis);
    }
    command
}

#[async_trait]
impl CacheDriver for RedisDriver {
    async fn set(&self, key: &str, data: &[u8], ttl: Duration) -> Result<(), CacheError> {
        let command = set_command(&self.build_key(key), data, ttl);
        let mut conn = self.get_connection().await?;

        let _: () = command.query_async(&mut conn).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        let cache_key = self.build_key(key);
        let mut conn = self.get_connection().await?;

        let cached_data: Option<Vec<u8>> = conn.get(&cache_key).await?;
        cached_data.ok_or(CacheError::Missed)
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let cache_key = self.build_key(key);
        let mut conn = self.get_connection().await?;

        let _: i64 = conn.del(&cache_key).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.get_connection().await?;

        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    /// Drop the shared connection; the next call reconnects
    async fn close(&self) -> Result<(), CacheError> {
        let mut pool = self.connection_pool.write().await;
        *pool = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_rejected() {
        let config = CacheConfig::new("not a url".to_string(), "app:".to_string(), 60, 100);
        assert!(matches!(
            RedisDriver::new(&config),
            Err(CacheError::ConnectionError(_))
        ));
    }

    fn packed(command: &redis::Cmd) -> String {
        String::from_utf8_lossy(&command.get_packed_command()).into_owned()
    }

    #[test]
    fn test_set_command_expiry() {
        let forever = packed(&set_command("app:k", b"v", Duration::ZERO));
        assert!(!forever.contains("PX"));

        let sub_second = packed(&set_command("app:k", b"v", Duration::from_millis(500)));
        assert!(sub_second.contains("$2\r\nPX\r\n$3\r\n500\r\n"));

        let minutes = packed(&set_command("app:k", b"v", Duration::from_secs(120)));
        assert!(minutes.contains("PX\r\n$6\r\n120000\r\n"));

        let tiny = packed(&set_command("app:k", b"v", Duration::from_micros(10)));
        assert!(tiny.ends_with("PX\r\n$1\r\n1\r\n"));
    }

    #[tokio::test]
    async fn test_lazy_connection_and_keys() {
        let config = CacheConfig::new(
            "redis://127.0.0.1:6379".to_string(),
            "app:".to_string(),
            60,
            100,
        );
        let driver = RedisDriver::new(&config).unwrap();

        assert_eq!(driver.build_key("user:1"), "app:user:1");
        assert!(format!("{:?}", driver).contains("no_connection"));
        assert!(driver.close().await.is_ok());
    }
}
