//! Invalidate command
//!
//! Drops every cached entry of the given resources, the same thing the
//! admin endpoints do after an edit.

use super::{Target, print_json};
use crate::error::{CliError, CliResult};
use colored::Colorize;
use lectio_cache::Resource;
use serde_json::json;

pub async fn run(target: &Target, resources: &[Resource], all: bool, as_json: bool) -> CliResult<()> {
    let resources: Vec<Resource> = if all {
        Resource::ALL.to_vec()
    } else if resources.is_empty() {
        return Err(CliError::InvalidArgument(
            "name at least one resource or pass --all".to_string(),
        ));
    } else {
        resources.to_vec()
    };

    let cache = target.connect().await?;

    let mut rows = Vec::with_capacity(resources.len());
    for resource in resources {
        let deleted = cache.invalidate_resource(resource).await;
        rows.push((resource, deleted));
    }

    let stats = cache.stats();
    if as_json {
        let results: Vec<_> = rows
            .iter()
            .map(|(resource, deleted)| {
                json!({
                    "resource": resource.name(),
                    "pattern": resource.pattern(),
                    "deleted": deleted,
                })
            })
            .collect();
        return print_json(&json!({
            "results": results,
            "total": stats.invalidated_keys,
            "store_errors": stats.store_errors,
        }));
    }

    println!();
    for (resource, deleted) in &rows {
        println!(
            "  {} {:<14} {:>6} keys  {}",
            "✓".green().bold(),
            resource.name(),
            deleted,
            resource.pattern().dimmed()
        );
    }
    println!();
    println!(
        "  {} {} keys removed",
        "Total:".bright_white().bold(),
        stats.invalidated_keys
    );
    if stats.store_errors > 0 {
        println!(
            "  {} {} store errors, some keys may remain",
            "⚠".yellow().bold(),
            stats.store_errors
        );
    }
    println!();

    Ok(())
}
