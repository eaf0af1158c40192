//! Cache system for page and record caching
//!
//! This crate provides a byte-oriented [`CacheDriver`] abstraction with Redis
//! and in-memory implementations, plus [`TypedCache`], which handles
//! serialization at the boundary so drivers only ever see bytes.

pub mod driver;
pub mod errors;
pub mod memory_driver;
pub mod prelude;
pub mod redis_driver;
pub mod typed;

// Re-export centralized config
pub use config::CacheConfig;

pub use driver::CacheDriver;
pub use errors::CacheError;
pub use memory_driver::MemoryDriver;
pub use redis_driver::RedisDriver;
pub use typed::{Cache, TypedCache};
