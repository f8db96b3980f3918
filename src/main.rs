//! Pokedex - An interactive PokeAPI client
//!
//! Explores location areas and catches Pokemon, memoizing API responses in a
//! time-bounded cache.

use std::io;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::{repl, Cache, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables and flags
/// 3. Create the response cache, which starts its reaper
/// 4. Run the command loop on stdin/stdout
/// 5. Stop the reaper on exit
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so log lines don't interleave with REPL output,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().with_cli(&cli);
    config.validate().context("invalid configuration")?;
    info!(
        cache_interval = config.cache_interval,
        api_base_url = %config.api_base_url,
        page_size = config.page_size,
        "Configuration loaded"
    );

    let cache = Cache::new(config.cache_interval()).context("failed to create response cache")?;
    let client = PokeApiClient::new(&config.api_base_url, cache.clone());
    let mut session = Session::new(client, config.page_size);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    let result = repl::run(&mut session, stdin, &mut stdout).await;

    cache.shutdown();
    result.context("terminal I/O failed")
}
