//! CLI command implementations.

pub mod invalidate;
pub mod keys;
pub mod ping;
pub mod tiers;

use crate::error::CliResult;
use lectio_cache::{CacheConfig, QueryCache, WriteMode};
use lectio_redis::RedisConfig;

/// Connection settings shared by every command that talks to Redis.
#[derive(Debug, Clone, Default)]
pub struct Target {
    /// Overrides `REDIS_URL` when set.
    pub redis_url: Option<String>,
}

impl Target {
    pub fn redis_config(&self) -> RedisConfig {
        let mut builder = RedisConfig::from_env();
        if let Some(url) = &self.redis_url {
            builder = builder.url(url.clone());
        }
        builder.build()
    }

    /// Connect a cache that writes inline, since the process exits right after.
    pub async fn connect(&self) -> CliResult<QueryCache> {
        let config = CacheConfig::from_env()?.with_write_mode(WriteMode::Inline);
        Ok(QueryCache::connect(self.redis_config(), config).await?)
    }
}

/// Print `value` as pretty JSON.
pub fn print_json(value: &serde_json::Value) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
