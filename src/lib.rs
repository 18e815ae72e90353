// Lectio - Redis query cache for the Lectio Divina content API
//
// Re-exports the cache layer, its Redis client and the logging crate so
// services depend on one crate.

// Re-export the cache layer
pub use lectio_cache::*;

// Re-export member crates
pub use lectio_cache;
pub use lectio_log;

#[cfg(feature = "redis")]
pub use lectio_redis;

#[cfg(feature = "redis")]
pub use lectio_redis::{RedisConfig, RedisError, RedisService};

// Prelude for common imports
pub mod prelude {
    pub use lectio_cache::prelude::*;

    #[cfg(feature = "redis")]
    pub use lectio_redis::{RedisConfig, RedisService};
}
