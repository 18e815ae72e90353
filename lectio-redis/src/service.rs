//! Redis service shared by the cache layer.

use redis::AsyncCommands;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::{
    RedisConfig, RedisError, Result,
    pool::{RedisConnection, RedisPool, RedisPoolBuilder},
};

/// Pooled Redis client exposing the commands the cache layer needs.
///
/// Construct one at process start and share it behind an `Arc`; every
/// command checks a connection out of the pool and is bounded by
/// [`RedisConfig::command_timeout`].
pub struct RedisService {
    config: RedisConfig,
    pool: RedisPool,
}

impl RedisService {
    /// Connect and verify the server answers PING.
    pub async fn new(config: RedisConfig) -> Result<Self> {
        let pool = RedisPoolBuilder::new(config.clone()).build().await?;
        Ok(Self { config, pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(config: RedisConfig, pool: RedisPool) -> Self {
        Self { config, pool }
    }

    pub fn config(&self) -> &RedisConfig {
        &self.config
    }

    pub fn pool(&self) -> &RedisPool {
        &self.pool
    }

    /// Check a connection out of the pool.
    pub async fn connection(&self) -> Result<RedisConnection<'_>> {
        let conn = self.pool.get().await?;
        Ok(RedisConnection::new(conn))
    }

    async fn bounded<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.config.command_timeout, fut).await?
    }

    /// Check that the server answers.
    pub async fn ping(&self) -> Result<()> {
        self.bounded(async {
            let mut conn = self.connection().await?;
            let _: String = redis::cmd("PING").query_async(&mut *conn).await?;
            Ok::<_, RedisError>(())
        })
        .await
    }

    /// GET a string value.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        self.bounded(async {
            let mut conn = self.connection().await?;
            let value: Option<String> = conn.get(key).await?;
            Ok::<_, RedisError>(value)
        })
        .await
    }

    /// PSETEX a string value with millisecond precision.
    ///
    /// Redis rejects a zero expiry, so does this; a TTL under one
    /// millisecond counts as zero.
    pub async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        if millis == 0 {
            return Err(RedisError::Config(format!(
                "refusing PSETEX with zero TTL for {}",
                key
            )));
        }

        self.bounded(async {
            let mut conn = self.connection().await?;
            let _: () = conn.pset_ex(key, value, millis).await?;
            Ok::<_, RedisError>(())
        })
        .await
    }

    /// DEL the given keys, returning how many existed.
    pub async fn del(&self, keys: &[String]) -> Result<u64> {
        if keys.is_empty() {
            return Ok(0);
        }

        self.bounded(async {
            let mut conn = self.connection().await?;
            let deleted: u64 = conn.del(keys).await?;
            debug!(requested = keys.len(), deleted, "DEL");
            Ok::<_, RedisError>(deleted)
        })
        .await
    }

    /// KEYS matching a glob pattern.
    ///
    /// KEYS walks the whole keyspace; it is meant for the cache
    /// database, not a shared primary.
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        self.bounded(async {
            let mut conn = self.connection().await?;
            let keys: Vec<String> = redis::cmd("KEYS")
                .arg(pattern)
                .query_async(&mut *conn)
                .await?;
            Ok::<_, RedisError>(keys)
        })
        .await
    }

    /// Remaining TTL of a key, `None` if missing or persistent.
    pub async fn ttl(&self, key: &str) -> Result<Option<Duration>> {
        self.bounded(async {
            let mut conn = self.connection().await?;
            let ttl: i64 = conn.ttl(key).await?;
            Ok::<_, RedisError>((ttl >= 0).then(|| Duration::from_secs(ttl as u64)))
        })
        .await
    }

    /// Pool occupancy.
    pub fn pool_stats(&self) -> PoolStats {
        let state = self.pool.state();
        PoolStats {
            connections: state.connections,
            idle_connections: state.idle_connections,
        }
    }
}

/// Connection pool statistics.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PoolStats {
    /// Total connections.
    pub connections: u32,
    /// Idle connections.
    pub idle_connections: u32,
}
