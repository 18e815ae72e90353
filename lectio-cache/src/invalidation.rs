//! Pattern-based invalidation.
//!
//! Write paths call these after a mutation commits. Every key under the
//! resource prefix goes, whatever query parameters it was built from.
//! Failures are logged and reported as a lower count; they never fail the
//! mutation that triggered them.

use crate::error::CacheResult;
use crate::key::CacheKey;
use crate::policy::Resource;
use crate::query::QueryCache;
use lectio_log::{debug, info, warn};
use tokio::time::timeout;

impl QueryCache {
    /// Delete every cached entry of `resource`, returning how many went.
    ///
    /// Returns `0` when nothing matched or the store could not be listed.
    /// A batch whose delete fails is skipped and the rest still run, so a
    /// partial count is possible.
    pub async fn invalidate_resource(&self, resource: Resource) -> u64 {
        let pattern = resource.pattern();

        let mut keys = match timeout(self.config.operation_timeout, self.store.keys(&pattern)).await {
            Ok(Ok(keys)) => keys,
            Ok(Err(e)) => {
                self.counters.store_error();
                warn!("cannot list {} for invalidation: {}", pattern, e);
                return 0;
            }
            Err(_) => {
                self.counters.store_error();
                warn!("listing {} timed out, nothing invalidated", pattern);
                return 0;
            }
        };

        if keys.is_empty() {
            debug!("nothing cached under {}", pattern);
        }

        // The bare prefix is a valid key but the pattern does not match it.
        keys.push(resource.prefix());

        let mut deleted = 0;
        for batch in keys.chunks(self.config.delete_batch_size.max(1)) {
            match timeout(self.config.operation_timeout, self.store.delete_many(batch)).await {
                Ok(Ok(n)) => deleted += n,
                Ok(Err(e)) => {
                    self.counters.store_error();
                    warn!(
                        "failed to delete {} keys under {}: {}",
                        batch.len(),
                        pattern,
                        e
                    );
                }
                Err(_) => {
                    self.counters.store_error();
                    warn!("deleting {} keys under {} timed out", batch.len(), pattern);
                }
            }
        }

        self.counters.invalidated(deleted);
        if deleted > 0 {
            info!("invalidated {} keys for {}", deleted, resource);
        }
        deleted
    }

    /// Resolve an admin-supplied name (`NEWS` or `news`) and invalidate it.
    ///
    /// Names outside the resource enumeration are rejected before the
    /// store is touched.
    pub async fn invalidate_resource_named(&self, name: &str) -> CacheResult<u64> {
        let resource: Resource = name.parse()?;
        Ok(self.invalidate_resource(resource).await)
    }

    /// Invalidate several resources in order, returning the total.
    pub async fn invalidate_resources(&self, resources: &[Resource]) -> u64 {
        let mut total = 0;
        for &resource in resources {
            total += self.invalidate_resource(resource).await;
        }
        total
    }

    /// Invalidate every resource class.
    pub async fn invalidate_all(&self) -> u64 {
        self.invalidate_resources(&Resource::ALL).await
    }

    /// Delete a single entry, returning whether it existed.
    pub async fn invalidate_key(&self, key: &CacheKey) -> bool {
        match timeout(self.config.operation_timeout, self.store.delete(key.as_str())).await {
            Ok(Ok(existed)) => {
                if existed {
                    self.counters.invalidated(1);
                }
                existed
            }
            Ok(Err(e)) => {
                self.counters.store_error();
                warn!("failed to delete {}: {}", key, e);
                false
            }
            Err(_) => {
                self.counters.store_error();
                warn!("deleting {} timed out", key);
                false
            }
        }
    }

    /// Keys currently cached for `resource`.
    ///
    /// Unlike invalidation this reports store failures, since it backs
    /// operator tooling rather than a write path.
    pub async fn cached_keys(&self, resource: Resource) -> CacheResult<Vec<String>> {
        let list = async {
            let mut keys = self.store.keys(&resource.pattern()).await?;
            keys.extend(self.store.keys(&resource.prefix()).await?);
            Ok::<_, crate::error::CacheError>(keys)
        };
        let result = match timeout(self.config.operation_timeout, list).await {
            Ok(result) => result,
            Err(elapsed) => Err(elapsed.into()),
        };
        if result.is_err() {
            self.counters.store_error();
        }
        let mut keys = result?;
        keys.sort();
        Ok(keys)
    }
}
