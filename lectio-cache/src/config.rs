//! Cache configuration.

use crate::error::{CacheError, CacheResult};
use std::str::FromStr;
use std::time::Duration;

/// How the store write after a miss is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Spawn the write and return to the caller immediately.
    Background,
    /// Await the write before returning. Failures are still swallowed.
    Inline,
}

impl FromStr for WriteMode {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "background" | "async" => Ok(WriteMode::Background),
            "inline" | "sync" => Ok(WriteMode::Inline),
            other => Err(CacheError::Config(format!("unknown write mode: {}", other))),
        }
    }
}

/// Cache configuration.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// When false every call goes straight to the producer.
    pub enabled: bool,

    /// Upper bound on each store call before failing open.
    pub operation_timeout: Duration,

    /// How writes after a miss are performed.
    pub write_mode: WriteMode,

    /// Keys per DEL during invalidation.
    pub delete_batch_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            operation_timeout: Duration::from_secs(3),
            write_mode: WriteMode::Background,
            delete_batch_size: 500,
        }
    }
}

impl CacheConfig {
    /// Read `LECTIO_CACHE_*` variables over the defaults.
    ///
    /// - `LECTIO_CACHE_ENABLED` (`0`/`false` disables)
    /// - `LECTIO_CACHE_TIMEOUT_MS`
    /// - `LECTIO_CACHE_WRITE_MODE` (`background`/`inline`)
    /// - `LECTIO_CACHE_DELETE_BATCH`
    pub fn from_env() -> CacheResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CacheResult<Self> {
        let mut config = Self::default();

        if let Some(enabled) = lookup("LECTIO_CACHE_ENABLED") {
            config.enabled = !matches!(enabled.trim().to_lowercase().as_str(), "0" | "false" | "off");
        }

        if let Some(ms) = lookup("LECTIO_CACHE_TIMEOUT_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .map_err(|_| CacheError::Config(format!("LECTIO_CACHE_TIMEOUT_MS: {}", ms)))?;
            config.operation_timeout = Duration::from_millis(ms);
        }

        if let Some(mode) = lookup("LECTIO_CACHE_WRITE_MODE") {
            config.write_mode = mode.parse()?;
        }

        if let Some(batch) = lookup("LECTIO_CACHE_DELETE_BATCH") {
            config.delete_batch_size = batch
                .trim()
                .parse()
                .map_err(|_| CacheError::Config(format!("LECTIO_CACHE_DELETE_BATCH: {}", batch)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Enable or disable caching.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the per-operation timeout.
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Set the write mode.
    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    /// Set the invalidation batch size.
    pub fn with_delete_batch_size(mut self, size: usize) -> Self {
        self.delete_batch_size = size;
        self
    }

    /// Reject settings that would make every call fail or loop.
    pub fn validate(&self) -> CacheResult<()> {
        if self.operation_timeout.is_zero() {
            return Err(CacheError::Config(
                "operation_timeout must be greater than zero".to_string(),
            ));
        }
        if self.delete_batch_size == 0 {
            return Err(CacheError::Config(
                "delete_batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
