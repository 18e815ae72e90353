//! # Lectio Redis
//!
//! Pooled Redis client used by the Lectio cache layer.
//!
//! The service is built once at startup and passed to whatever needs it;
//! there is no global client.
//!
//! ```rust,ignore
//! use lectio_redis::{RedisConfig, RedisService};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lectio_redis::RedisError> {
//!     let config = RedisConfig::from_env().pool_size(4).build();
//!     let redis = Arc::new(RedisService::new(config).await?);
//!
//!     redis.set_ex("cache:locales:all", "[\"sk\",\"cs\"]", Duration::from_secs(3600)).await?;
//!     let keys = redis.keys("cache:locales:*").await?;
//!     redis.del(&keys).await?;
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod pool;
mod service;

pub use config::{RedisConfig, RedisConfigBuilder};
pub use error::{RedisError, Result};
pub use pool::{RedisConnection, RedisPool, RedisPoolBuilder};
pub use service::{PoolStats, RedisService};

// Re-export redis crate for convenience
pub use redis;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::config::{RedisConfig, RedisConfigBuilder};
    pub use crate::error::{RedisError, Result};
    pub use crate::service::RedisService;
}
