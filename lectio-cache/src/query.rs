//! Cache-aside query wrapper.

use crate::config::{CacheConfig, WriteMode};
use crate::error::CacheResult;
use crate::key::CacheKey;
use crate::memory::InMemoryStore;
use crate::stats::{CacheStats, Counters};
use crate::traits::KvStore;
use lectio_log::{debug, warn};
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Read-through cache in front of the database.
///
/// Built once at startup around a store and handed to route handlers;
/// clones share the store and counters.
///
/// The cache is an optimization, never a source of truth: store failures
/// and timeouts are logged and the producer runs instead, while producer
/// errors reach the caller untouched.
///
/// ```
/// use lectio_cache::{CacheKey, InMemoryStore, QueryCache, Resource};
///
/// # async fn example() -> Result<(), std::io::Error> {
/// let cache = QueryCache::with_store(InMemoryStore::new());
/// let key = CacheKey::new(Resource::Categories).segment("all");
///
/// let categories: Vec<String> = cache
///     .fetch(&key, || async { Ok::<_, std::io::Error>(vec!["psalms".to_string()]) })
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct QueryCache {
    pub(crate) store: Arc<dyn KvStore>,
    pub(crate) config: CacheConfig,
    pub(crate) counters: Arc<Counters>,
}

impl QueryCache {
    pub fn new(store: Arc<dyn KvStore>, config: CacheConfig) -> Self {
        Self {
            store,
            config,
            counters: Arc::new(Counters::default()),
        }
    }

    /// Wrap a store with the default configuration.
    pub fn with_store<S: KvStore + 'static>(store: S) -> Self {
        Self::new(Arc::new(store), CacheConfig::default())
    }

    /// A cache that always calls the producer, for running without Redis.
    pub fn disabled() -> Self {
        Self::new(
            Arc::new(InMemoryStore::new()),
            CacheConfig::default().with_enabled(false),
        )
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn KvStore> {
        &self.store
    }

    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }

    /// Check that the store answers within the operation timeout.
    pub async fn ping(&self) -> CacheResult<()> {
        timeout(self.config.operation_timeout, self.store.ping()).await?
    }

    /// Return the value cached under `key`, or run `producer`, cache its
    /// result for `ttl` and return it.
    ///
    /// The producer runs at most once per call. Concurrent misses on the
    /// same key are not coalesced.
    pub async fn cache_query<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: impl Into<Duration>,
        producer: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if !self.config.enabled {
            return producer().await;
        }

        if let Some(value) = self.read(key).await {
            self.counters.hit();
            debug!("cache hit: {}", key);
            return Ok(value);
        }

        self.counters.miss();
        debug!("cache miss: {}", key);

        let value = producer().await?;
        self.write(key, &value, ttl.into()).await;
        Ok(value)
    }

    /// [`cache_query`](Self::cache_query) with the key's resource default tier.
    pub async fn fetch<T, E, F, Fut>(&self, key: &CacheKey, producer: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cache_query(key.as_str(), key.resource().default_tier(), producer)
            .await
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = match timeout(self.config.operation_timeout, self.store.get(key)).await {
            Ok(Ok(Some(json))) => json,
            Ok(Ok(None)) => return None,
            Ok(Err(e)) => {
                self.counters.store_error();
                warn!("cache read failed for {}, falling back: {}", key, e);
                return None;
            }
            Err(_) => {
                self.counters.store_error();
                warn!(
                    "cache read timed out after {:?} for {}, falling back",
                    self.config.operation_timeout, key
                );
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("discarding undecodable cache entry {}: {}", key, e);
                None
            }
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        if ttl.is_zero() {
            debug!("not caching {}: zero TTL", key);
            return;
        }

        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                self.counters.write_failure();
                warn!("cannot serialize result for {}: {}", key, e);
                return;
            }
        };

        let store = Arc::clone(&self.store);
        let counters = Arc::clone(&self.counters);
        let op_timeout = self.config.operation_timeout;
        let key = key.to_string();

        let task = async move {
            match timeout(op_timeout, store.set_ex(&key, json, ttl)).await {
                Ok(Ok(())) => debug!("cached {} for {:?}", key, ttl),
                Ok(Err(e)) => {
                    counters.store_error();
                    counters.write_failure();
                    warn!("cache write failed for {}: {}", key, e);
                }
                Err(_) => {
                    counters.store_error();
                    counters.write_failure();
                    warn!("cache write timed out after {:?} for {}", op_timeout, key);
                }
            }
        };

        match self.config.write_mode {
            WriteMode::Inline => task.await,
            WriteMode::Background => match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    handle.spawn(task);
                }
                Err(_) => task.await,
            },
        }
    }
}
