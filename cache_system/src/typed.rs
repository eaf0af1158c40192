//! Typed cache wrapper
//!
//! [`TypedCache`] stores values of one type under a key prefix with a fixed TTL,
//! serializing to JSON before handing bytes to the underlying [`CacheDriver`].

use crate::driver::CacheDriver;
use crate::errors::CacheError;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

/// Get/set/delete over values of type `T`
#[async_trait]
pub trait Cache<T>: Send + Sync {
    async fn set(&self, key: &str, value: &T) -> Result<(), CacheError>;

    /// `CacheError::Missed` when nothing is stored under `key`
    async fn get(&self, key: &str) -> Result<T, CacheError>;

    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}

pub struct TypedCache<T> {
    driver: Arc<dyn CacheDriver>,
    prefix: String,
    ttl: Duration,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedCache<T> {
    pub fn new(driver: Arc<dyn CacheDriver>, prefix: &str, ttl: Duration) -> Self {
        Self {
            driver,
            prefix: prefix.to_string(),
            ttl,
            _marker: PhantomData,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn build_key(&self, key: &str) -> String {
        format!("{}:{}", self.prefix, key)
    }
}

impl<T> Clone for TypedCache<T> {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver.clone(),
            prefix: self.prefix.clone(),
            ttl: self.ttl,
            _marker: PhantomData,
        }
    }
}

impl<T> Debug for TypedCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedCache")
            .field("prefix", &self.prefix)
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[async_trait]
impl<T> Cache<T> for TypedCache<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn set(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let data = serde_json::to_vec(value)?;
        self.driver.set(&self.build_key(key), &data, self.ttl).await
    }

    async fn get(&self, key: &str) -> Result<T, CacheError> {
        let data = self.driver.get(&self.build_key(key)).await?;
        Ok(serde_json::from_slice(&data)?)
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.driver.delete(&self.build_key(key)).await
    }
}
