use crate::prelude::*;
use std::time::Duration;

mod client;

pub use client::ScryfallClient;

/// Scryfall connection options shared by every subcommand that performs lookups
#[derive(Debug, Clone, clap::Args)]
pub struct ScryfallOptions {
    /// Base URL of the Scryfall API
    #[arg(
        long = "scryfall-base-url",
        env = "SCRYFALL_BASE_URL",
        default_value = ScryfallConfig::DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Maximum number of concurrent connections to Scryfall
    #[arg(long, env = "SURVEIL_MAX_CONNECTIONS", default_value = "10")]
    pub max_connections: usize,

    /// Idle keep-alive connections retained between lookups
    #[arg(long, env = "SURVEIL_MAX_IDLE_CONNECTIONS", default_value = "1")]
    pub max_idle_connections: usize,

    /// Keep-alive idle timeout in milliseconds
    #[arg(long, env = "SURVEIL_KEEP_ALIVE_MS", default_value = "6000")]
    pub keep_alive_ms: u64,

    /// Per-request timeout in seconds
    #[arg(long, env = "SURVEIL_TIMEOUT", default_value = "30")]
    pub timeout: u64,
}

/// Rejected `ScryfallOptions`, reported at startup
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--max-connections must be at least 1")]
    NoConnections,

    #[error("--scryfall-base-url is empty")]
    EmptyBaseUrl,
}

/// Validated connection pool settings
#[derive(Debug, Clone)]
pub struct ScryfallConfig {
    pub base_url: String,
    pub max_connections: usize,
    pub max_idle_connections: usize,
    pub keep_alive: Duration,
    pub timeout: Duration,
}

impl ScryfallConfig {
    /// Default Scryfall API base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://api.scryfall.com";
}

impl Default for ScryfallConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            max_connections: 10,
            max_idle_connections: 1,
            keep_alive: Duration::from_millis(6000),
            timeout: Duration::from_secs(30),
        }
    }
}

impl TryFrom<ScryfallOptions> for ScryfallConfig {
    type Error = ConfigError;

    fn try_from(options: ScryfallOptions) -> std::result::Result<Self, Self::Error> {
        if options.max_connections == 0 {
            return Err(ConfigError::NoConnections);
        }

        let base_url = options.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        Ok(Self {
            base_url,
            max_connections: options.max_connections,
            max_idle_connections: options.max_idle_connections,
            keep_alive: Duration::from_millis(options.keep_alive_ms),
            timeout: Duration::from_secs(options.timeout),
        })
    }
}
