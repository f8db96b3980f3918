//! Command-line interface parsing
//!
//! Flags here override the environment-derived [`Config`](crate::config::Config).

use clap::Parser;

/// Pokedex - explore PokeAPI location areas and catch Pokemon
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Interactive PokeAPI explorer with a response cache")]
#[command(version)]
pub struct Cli {
    /// Seconds a cached response is kept (also the sweep period)
    #[arg(long, value_name = "SECONDS")]
    pub cache_interval: Option<u64>,

    /// PokeAPI base URL
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Location areas shown per page
    #[arg(long, value_name = "COUNT")]
    pub page_size: Option<u32>,
}
