//! Configuration Module
//!
//! Handles loading client configuration from environment variables, with
//! command-line overrides applied on top (see [`crate::cli`]).

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_INTERVAL_SECS;
use crate::cli::Cli;
use crate::error::ConfigError;

/// Public PokeAPI endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Location areas shown per `map` page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache reap interval and maximum entry age, in seconds
    pub cache_interval: u64,
    /// Base URL of the PokeAPI, without a trailing slash
    pub api_base_url: String,
    /// Number of location areas fetched per page
    pub page_size: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL` - Cache interval in seconds (default: 300)
    /// - `POKEDEX_API_BASE_URL` - PokeAPI base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_PAGE_SIZE` - Location areas per page (default: 20)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Unparseable numbers fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            cache_interval: lookup("POKEDEX_CACHE_INTERVAL")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.cache_interval),
            api_base_url: lookup("POKEDEX_API_BASE_URL")
                .map(|v| normalize_base_url(&v))
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            page_size: lookup("POKEDEX_PAGE_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.page_size),
        }
    }

    /// Applies command-line overrides.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(secs) = cli.cache_interval {
            self.cache_interval = secs;
        }
        if let Some(url) = &cli.api_base_url {
            self.api_base_url = normalize_base_url(url);
        }
        if let Some(size) = cli.page_size {
            self.page_size = size;
        }
        self
    }

    /// Rejects values the client cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_interval == 0 {
            return Err(ConfigError::ZeroCacheInterval);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }

    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: DEFAULT_INTERVAL_SECS,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
