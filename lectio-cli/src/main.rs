//! Lectio cache CLI - inspect and invalidate the query cache from a shell.
//!
//! # Commands
//!
//! - `lectio-cache invalidate <RESOURCE>...` - Drop every entry of the resources
//! - `lectio-cache invalidate --all` - Drop every resource class
//! - `lectio-cache keys <RESOURCE>` - List cached keys for a resource
//! - `lectio-cache ping` - Check that Redis answers
//! - `lectio-cache tiers` - Show the resource prefix and TTL table

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use lectio_cache::Resource;

mod commands;
mod error;

use commands::{Target, invalidate, keys, ping, tiers};
use error::CliResult;

/// Lectio cache operator tool
#[derive(Parser)]
#[command(name = "lectio-cache")]
#[command(version)]
#[command(about = "Inspect and invalidate the Lectio query cache")]
#[command(long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = format!(
    "{}\n  {} lectio-cache invalidate NEWS ARTICLES\n  {} lectio-cache keys categories\n  {} lectio-cache tiers --json",
    "Examples:".bright_cyan().bold(),
    "$".dimmed(),
    "$".dimmed(),
    "$".dimmed(),
))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Redis connection URL
    #[arg(long, global = true, env = "REDIS_URL")]
    redis_url: Option<String>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop every cached entry of one or more resources
    #[command(alias = "inv")]
    Invalidate(InvalidateArgs),

    /// List cached keys for a resource
    Keys {
        /// Resource name, e.g. NEWS or news
        resource: Resource,
    },

    /// Check that Redis answers
    Ping,

    /// Show resource prefixes and TTL tiers
    Tiers,
}

#[derive(Args)]
struct InvalidateArgs {
    /// Resource names, e.g. NEWS ARTICLES
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    resources: Vec<Resource>,

    /// Invalidate every resource class
    #[arg(long)]
    all: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    lectio_log::install();
    if cli.verbose {
        lectio_log::set_debug(true);
    }

    let target = Target {
        redis_url: cli.redis_url,
    };

    let result: CliResult<()> = match cli.command {
        Commands::Invalidate(args) => {
            invalidate::run(&target, &args.resources, args.all, cli.json).await
        }
        Commands::Keys { resource } => keys::run(&target, resource, cli.json).await,
        Commands::Ping => ping::run(&target, cli.json).await,
        Commands::Tiers => tiers::run(cli.json),
    };

    if let Err(e) = result {
        eprintln!("\n  {} {}\n", "Error:".red().bold(), e);
        std::process::exit(1);
    };
}
