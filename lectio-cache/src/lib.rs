//! Query cache for the Lectio content API.
//!
//! Read-heavy listings (news, articles, readings, calendar, quotes,
//! categories) are cached in Redis in front of the database with the
//! cache-aside pattern, and write paths drop everything cached for a
//! resource once a mutation commits.
//!
//! # Features
//!
//! - `redis` - Redis-backed store (enabled by default)
//! - **Fail-open reads** - a down or slow store degrades to the database
//! - **Resource invalidation** - `cache:<resource>:*` in one call
//! - **TTL tiers** - static, semi-static, dynamic, user, short
//!
//! # Examples
//!
//! ## Caching a query
//!
//! ```no_run
//! use lectio_cache::prelude::*;
//! use lectio_redis::RedisConfig;
//!
//! # #[derive(serde::Serialize, serde::Deserialize)] struct Category;
//! # async fn load_categories() -> Result<Vec<Category>, std::io::Error> { Ok(vec![]) }
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cache = QueryCache::connect(RedisConfig::from_env().build(), CacheConfig::from_env()?).await?;
//!
//!     let key = CacheKey::new(Resource::Categories).segment("all");
//!     let categories = cache
//!         .cache_query(key.as_str(), TtlTier::Static, load_categories)
//!         .await?;
//!     # let _ = categories;
//!     Ok(())
//! }
//! ```
//!
//! ## Invalidating after a write
//!
//! ```
//! use lectio_cache::prelude::*;
//!
//! # async fn example() {
//! let cache = QueryCache::with_store(InMemoryStore::new());
//! let removed = cache.invalidate_resource(Resource::News).await;
//! assert_eq!(removed, 0);
//! # }
//! ```

pub mod config;
pub mod error;
pub mod invalidation;
pub mod key;
pub mod memory;
pub mod policy;
pub mod query;
pub mod stats;
pub mod traits;

#[cfg(feature = "redis")]
pub mod redis_store;

pub use config::{CacheConfig, WriteMode};
pub use error::{CacheError, CacheResult};
pub use key::CacheKey;
pub use memory::InMemoryStore;
pub use policy::{KEY_NAMESPACE, Resource, TtlTier};
pub use query::QueryCache;
pub use stats::CacheStats;
pub use traits::KvStore;

#[cfg(feature = "redis")]
pub use redis_store::RedisStore;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{CacheConfig, WriteMode};
    pub use crate::error::{CacheError, CacheResult};
    pub use crate::key::CacheKey;
    pub use crate::memory::InMemoryStore;
    pub use crate::policy::{Resource, TtlTier};
    pub use crate::query::QueryCache;
    pub use crate::stats::CacheStats;
    pub use crate::traits::KvStore;

    #[cfg(feature = "redis")]
    pub use crate::redis_store::RedisStore;
}
