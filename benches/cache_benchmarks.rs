//! Cache benchmarks for lectio-cache

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lectio::prelude::*;
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone, Serialize, Deserialize)]
struct Article {
    id: u32,
    title: String,
    summary: String,
}

fn articles(n: u32) -> Vec<Article> {
    (0..n)
        .map(|id| Article {
            id,
            title: format!("Article {}", id),
            summary: "A short summary of the reading for the day".to_string(),
        })
        .collect()
}

fn inline_cache() -> QueryCache {
    QueryCache::new(
        Arc::new(InMemoryStore::new()),
        CacheConfig::default().with_write_mode(WriteMode::Inline),
    )
}

fn cache_key_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_key");
    group.throughput(Throughput::Elements(1));

    group.bench_function("news_listing", |b| {
        b.iter(|| {
            let key = CacheKey::new(Resource::News)
                .param("lang", black_box("sk"))
                .param("page", black_box(3))
                .param("limit", 20)
                .param_opt("search", None::<&str>)
                .param_opt("from", Some("2024-01-01"));
            black_box(key)
        });
    });

    group.finish();
}

fn cache_query_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let cache = inline_cache();
    let key = CacheKey::new(Resource::Articles).segment("page:1");

    rt.block_on(async {
        cache
            .fetch(&key, || async { Ok::<_, CacheError>(articles(20)) })
            .await
            .unwrap();
    });

    let mut group = c.benchmark_group("cache_query");
    group.throughput(Throughput::Elements(1));

    group.bench_function("hit", |b| {
        b.to_async(&rt).iter(|| async {
            let result: Vec<Article> = cache
                .fetch(&key, || async { Ok::<_, CacheError>(articles(20)) })
                .await
                .unwrap();
            black_box(result)
        });
    });

    group.bench_function("miss_zero_ttl", |b| {
        b.to_async(&rt).iter(|| async {
            let result: Vec<Article> = cache
                .cache_query("cache:articles:uncached", Duration::ZERO, || async {
                    Ok::<_, CacheError>(articles(20))
                })
                .await
                .unwrap();
            black_box(result)
        });
    });

    group.bench_function("disabled", |b| {
        let disabled = QueryCache::disabled();
        b.to_async(&rt).iter(|| async {
            let result: Vec<Article> = disabled
                .fetch(&key, || async { Ok::<_, CacheError>(articles(20)) })
                .await
                .unwrap();
            black_box(result)
        });
    });

    group.finish();
}

fn payload_size_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("payload_size");

    for size in [1u32, 20, 100, 500] {
        let cache = inline_cache();
        let key = CacheKey::new(Resource::News).param("limit", size);
        rt.block_on(async {
            cache
                .fetch(&key, || async { Ok::<_, CacheError>(articles(size)) })
                .await
                .unwrap();
        });

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("hit", size), &size, |b, &size| {
            b.to_async(&rt).iter(|| async {
                let result: Vec<Article> = cache
                    .fetch(&key, || async { Ok::<_, CacheError>(articles(size)) })
                    .await
                    .unwrap();
                black_box(result)
            });
        });
    }

    group.finish();
}

fn invalidation_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("invalidation");

    for keys in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(keys as u64));
        group.bench_with_input(BenchmarkId::new("resource", keys), &keys, |b, &keys| {
            b.to_async(&rt).iter(|| async move {
                let store = InMemoryStore::new();
                for i in 0..keys {
                    store
                        .set_ex(
                            &format!("cache:news:page:{}", i),
                            "[]".to_string(),
                            Duration::from_secs(300),
                        )
                        .await
                        .unwrap();
                }
                let cache = QueryCache::with_store(store);
                black_box(cache.invalidate_resource(Resource::News).await)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    cache_key_benchmark,
    cache_query_benchmark,
    payload_size_benchmark,
    invalidation_benchmark,
);

criterion_main!(benches);
