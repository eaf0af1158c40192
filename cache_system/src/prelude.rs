//! Convenience re-exports for common cache-system usage

// Core cache system components
pub use crate::driver::CacheDriver;
pub use crate::errors::CacheError;
pub use crate::memory_driver::MemoryDriver;
pub use crate::redis_driver::RedisDriver;
pub use crate::typed::{Cache, TypedCache};

// Re-export centralized config
pub use config::CacheConfig;

// Common external dependencies
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
