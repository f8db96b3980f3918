//! Pokedex - An interactive PokeAPI client
//!
//! Explores location areas and catches Pokemon, memoizing API responses in a
//! time-bounded, concurrency-safe cache with a background reaper.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use repl::Session;
