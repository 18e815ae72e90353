//! Ping command - check that Redis answers.

use super::{Target, print_json};
use crate::error::CliResult;
use colored::Colorize;
use lectio_redis::RedisService;
use serde_json::json;
use std::time::Instant;

pub async fn run(target: &Target, as_json: bool) -> CliResult<()> {
    let config = target.redis_config();
    let url = config.redacted_url();

    let redis = RedisService::new(config).await?;
    let started = Instant::now();
    redis.ping().await?;
    let latency = started.elapsed();
    let pool = redis.pool_stats();

    if as_json {
        return print_json(&json!({
            "url": url,
            "latency_ms": latency.as_secs_f64() * 1000.0,
            "pool": pool,
        }));
    }

    println!(
        "  {} {} answered in {:.2?}",
        "✓".green().bold(),
        url.cyan(),
        latency
    );
    println!(
        "  {} {} connections, {} idle",
        "Pool:".bright_white().bold(),
        pool.connections,
        pool.idle_connections
    );

    Ok(())
}
