//! Key-value store abstraction.

use crate::error::CacheResult;
use async_trait::async_trait;
use std::time::Duration;

/// The operations the cache layer needs from a key-value store.
///
/// Values are JSON strings; keys are UTF-8. Implementations report
/// failures as errors and leave the fail-open policy to the caller.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read a value.
    ///
    /// Returns `Ok(None)` if the key is missing or expired.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Write a value that expires after `ttl`.
    async fn set_ex(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()>;

    /// Delete one key, returning whether it existed.
    async fn delete(&self, key: &str) -> CacheResult<bool>;

    /// List keys matching a Redis-style glob (`*`, `?`, `\` escapes).
    async fn keys(&self, pattern: &str) -> CacheResult<Vec<String>>;

    /// Delete several keys, returning how many existed.
    ///
    /// The default issues the deletes concurrently. Keys whose delete failed
    /// are not counted; an error is returned only when every delete failed.
    async fn delete_many(&self, keys: &[String]) -> CacheResult<u64> {
        use futures::future::join_all;

        if keys.is_empty() {
            return Ok(0);
        }

        let results = join_all(keys.iter().map(|key| self.delete(key))).await;

        let mut deleted = 0;
        let mut first_error = None;
        let mut any_ok = false;
        for result in results {
            match result {
                Ok(existed) => {
                    any_ok = true;
                    if existed {
                        deleted += 1;
                    }
                }
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) if !any_ok => Err(e),
            _ => Ok(deleted),
        }
    }

    /// Check that the store is reachable.
    async fn ping(&self) -> CacheResult<()> {
        Ok(())
    }
}
