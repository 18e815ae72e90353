//! Redis-backed store.

use crate::config::CacheConfig;
use crate::error::CacheResult;
use crate::query::QueryCache;
use crate::traits::KvStore;
use async_trait::async_trait;
use lectio_redis::{RedisConfig, RedisService};
use std::sync::Arc;
use std::time::Duration;

/// [`KvStore`] over a shared [`RedisService`].
#[derive(Clone)]
pub struct RedisStore {
    redis: Arc<RedisService>,
}

impl RedisStore {
    /// Wrap a service built at startup.
    ///
    /// ```rust,ignore
    /// use lectio_cache::RedisStore;
    /// use lectio_redis::{RedisConfig, RedisService};
    /// use std::sync::Arc;
    ///
    /// let redis = Arc::new(RedisService::new(RedisConfig::from_env().build()).await?);
    /// let store = RedisStore::new(redis);
    /// ```
    pub fn new(redis: Arc<RedisService>) -> Self {
        Self { redis }
    }

    pub fn service(&self) -> &Arc<RedisService> {
        &self.redis
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.redis.get(key).await?)
    }

    async fn set_ex(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        Ok(self.redis.set_ex(key, &value, ttl).await?)
    }

    async fn delete(&self, key: &str) -> CacheResult<bool> {
        let deleted = self.redis.del(&[key.to_string()]).await?;
        Ok(deleted > 0)
    }

    async fn keys(&self, pattern: &str) -> CacheResult<Vec<String>> {
        Ok(self.redis.keys(pattern).await?)
    }

    async fn delete_many(&self, keys: &[String]) -> CacheResult<u64> {
        Ok(self.redis.del(keys).await?)
    }

    async fn ping(&self) -> CacheResult<()> {
        Ok(self.redis.ping().await?)
    }
}

impl QueryCache {
    /// Validate `config`, connect to Redis and wrap the pool.
    ///
    /// Connection failure is returned; callers that want to start without
    /// Redis can fall back to [`QueryCache::disabled`].
    pub async fn connect(redis: RedisConfig, config: CacheConfig) -> CacheResult<Self> {
        config.validate()?;
        let service = RedisService::new(redis).await?;
        Ok(Self::new(
            Arc::new(RedisStore::new(Arc::new(service))),
            config,
        ))
    }
}
