//! Tiers command - print the resource policy table.
//!
//! Needs no Redis connection.

use super::print_json;
use crate::error::CliResult;
use colored::Colorize;
use lectio_cache::Resource;
use serde_json::json;

pub fn run(as_json: bool) -> CliResult<()> {
    if as_json {
        let rows: Vec<_> = Resource::ALL
            .iter()
            .map(|resource| {
                let tier = resource.default_tier();
                json!({
                    "resource": resource.name(),
                    "prefix": resource.prefix(),
                    "pattern": resource.pattern(),
                    "tier": tier.name(),
                    "ttl_secs": tier.as_secs(),
                })
            })
            .collect();
        return print_json(&json!(rows));
    }

    println!();
    println!(
        "  {:<14} {:<22} {:<12} {:>6}",
        "RESOURCE".bright_white().bold(),
        "PREFIX".bright_white().bold(),
        "TIER".bright_white().bold(),
        "TTL".bright_white().bold()
    );
    for resource in Resource::ALL {
        let tier = resource.default_tier();
        println!(
            "  {:<14} {:<22} {:<12} {:>5}s",
            resource.name(),
            resource.prefix().cyan(),
            tier.name(),
            tier.as_secs()
        );
    }
    println!();

    Ok(())
}
