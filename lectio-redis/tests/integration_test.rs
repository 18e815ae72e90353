//! Integration tests for lectio-redis.
//!
//! Tests that talk to a server are ignored by default; run them with
//! `REDIS_URL=redis://localhost:6379 cargo test -p lectio-redis -- --ignored`.

use lectio_redis::{RedisConfig, RedisError, RedisService};
use std::time::Duration;

fn live_config() -> RedisConfig {
    RedisConfig::from_env().pool_size(2).build()
}

#[tokio::test]
async fn test_unreachable_server_fails_fast() {
    let config = RedisConfig::builder()
        .url("redis://127.0.0.1:1")
        .connection_timeout(Duration::from_millis(200))
        .command_timeout(Duration::from_millis(200))
        .build();

    let result = RedisService::new(config).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_zero_pool_size_rejected() {
    let config = RedisConfig::builder().pool_size(0).build();
    let result = RedisService::new(config).await;
    assert!(matches!(result, Err(RedisError::Config(_))));
}

#[tokio::test]
async fn test_zero_timeouts_rejected() {
    let config = RedisConfig::builder()
        .url("redis://127.0.0.1:1")
        .command_timeout(Duration::ZERO)
        .build();
    let result = RedisService::new(config).await;
    assert!(matches!(result, Err(RedisError::Config(_))));

    let config = RedisConfig::builder()
        .url("redis://127.0.0.1:1")
        .connection_timeout(Duration::ZERO)
        .build();
    let result = RedisService::new(config).await;
    assert!(matches!(result, Err(RedisError::Config(_))));
}

#[tokio::test]
async fn test_sub_second_command_timeout_from_json() {
    let config: RedisConfig = serde_json::from_str(
        r#"{"url":"redis://127.0.0.1:1","pool_size":1,"min_idle":null,
            "connection_timeout":200,"command_timeout":500,
            "database":null,"username":null,"password":null,"tls":false}"#,
    )
    .unwrap();
    assert_eq!(config.command_timeout, Duration::from_millis(500));

    // Fails on the unreachable server, not on the configuration.
    let result = RedisService::new(config).await;
    assert!(result.is_err());
    assert!(!matches!(result, Err(RedisError::Config(_))));
}

#[tokio::test]
#[ignore = "requires Redis"]
async fn test_set_get_keys_del() {
    let redis = RedisService::new(live_config()).await.unwrap();

    redis
        .set_ex("lectio-test:a", "1", Duration::from_secs(30))
        .await
        .unwrap();
    redis
        .set_ex("lectio-test:b", "2", Duration::from_secs(30))
        .await
        .unwrap();

    assert_eq!(redis.get("lectio-test:a").await.unwrap(), Some("1".to_string()));

    let mut keys = redis.keys("lectio-test:*").await.unwrap();
    keys.sort();
    assert_eq!(keys, vec!["lectio-test:a", "lectio-test:b"]);

    let ttl = redis.ttl("lectio-test:a").await.unwrap().unwrap();
    assert!(ttl <= Duration::from_secs(30));

    assert_eq!(redis.del(&keys).await.unwrap(), 2);
    assert_eq!(redis.del(&keys).await.unwrap(), 0);
    assert_eq!(redis.get("lectio-test:a").await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires Redis"]
async fn test_zero_ttl_rejected() {
    let redis = RedisService::new(live_config()).await.unwrap();
    let result = redis.set_ex("lectio-test:zero", "x", Duration::ZERO).await;
    assert!(matches!(result, Err(RedisError::Config(_))));
}

#[tokio::test]
#[ignore = "requires Redis"]
async fn test_sub_second_ttl_kept() {
    let redis = RedisService::new(live_config()).await.unwrap();
    redis
        .set_ex("lectio-test:short", "x", Duration::from_millis(500))
        .await
        .unwrap();
    assert_eq!(redis.get("lectio-test:short").await.unwrap(), Some("x".to_string()));

    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(redis.get("lectio-test:short").await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires Redis"]
async fn test_ping_and_pool_stats() {
    let redis = RedisService::new(live_config()).await.unwrap();
    redis.ping().await.unwrap();
    assert!(redis.pool_stats().connections >= 1);
}
