//! Cache counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared counters updated by [`QueryCache`](crate::QueryCache).
#[derive(Debug, Default)]
pub(crate) struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    store_errors: AtomicU64,
    write_failures: AtomicU64,
    invalidated_keys: AtomicU64,
}

impl Counters {
    pub(crate) fn hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn write_failure(&self) {
        self.write_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn invalidated(&self, count: u64) {
        self.invalidated_keys.fetch_add(count, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            store_errors: self.store_errors.load(Ordering::Relaxed),
            write_failures: self.write_failures.load(Ordering::Relaxed),
            invalidated_keys: self.invalidated_keys.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of the cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct CacheStats {
    /// Reads answered from the store.
    pub hits: u64,
    /// Reads that ran the producer, including fail-open fallbacks.
    pub misses: u64,
    /// Store reads, writes or enumerations that failed or timed out.
    pub store_errors: u64,
    /// Writes after a miss that did not land.
    pub write_failures: u64,
    /// Keys removed by invalidation.
    pub invalidated_keys: u64,
}

impl CacheStats {
    /// Fraction of reads served from the store, `0.0` before any read.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot() {
        let counters = Counters::default();
        counters.hit();
        counters.hit();
        counters.miss();
        counters.store_error();
        counters.invalidated(5);

        let stats = counters.snapshot();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.store_errors, 1);
        assert_eq!(stats.write_failures, 0);
        assert_eq!(stats.invalidated_keys, 5);
    }

    #[test]
    fn test_hit_ratio() {
        assert_eq!(CacheStats::default().hit_ratio(), 0.0);
        let stats = CacheStats {
            hits: 3,
            misses: 1,
            ..CacheStats::default()
        };
        assert!((stats.hit_ratio() - 0.75).abs() < f64::EPSILON);
    }
}
