//! Error types for the cache CLI.

use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug)]
pub enum CliError {
    /// Redis connection or command failure
    Redis(lectio_redis::RedisError),

    /// Cache layer failure
    Cache(lectio_cache::CacheError),

    /// Invalid argument
    InvalidArgument(String),

    /// Output encoding error
    Output(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Redis(e) => write!(f, "{}", e),
            CliError::Cache(e) => write!(f, "{}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<lectio_redis::RedisError> for CliError {
    fn from(e: lectio_redis::RedisError) -> Self {
        CliError::Redis(e)
    }
}

impl From<lectio_cache::CacheError> for CliError {
    fn from(e: lectio_cache::CacheError) -> Self {
        CliError::Cache(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}
