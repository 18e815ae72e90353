//! Keys command - list what is cached for a resource.

use super::{Target, print_json};
use crate::error::CliResult;
use colored::Colorize;
use lectio_cache::Resource;
use serde_json::json;

pub async fn run(target: &Target, resource: Resource, as_json: bool) -> CliResult<()> {
    let cache = target.connect().await?;
    let keys = cache.cached_keys(resource).await?;

    if as_json {
        return print_json(&json!({
            "resource": resource.name(),
            "pattern": resource.pattern(),
            "keys": keys,
        }));
    }

    if keys.is_empty() {
        println!("  Nothing cached under {}", resource.pattern().cyan());
        return Ok(());
    }

    for key in &keys {
        println!("{}", key);
    }
    eprintln!(
        "\n  {} keys under {}",
        keys.len(),
        resource.pattern().cyan()
    );

    Ok(())
}
