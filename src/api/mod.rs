//! API Module
//!
//! HTTP client for the PokeAPI REST endpoints.
//!
//! # Endpoints
//! - `GET /location-area?offset=&limit=` - Page of location areas
//! - `GET /location-area/{name}/` - Location area with Pokemon encounters
//! - `GET /pokemon/{name}/` - Pokemon details

pub mod client;

pub use client::PokeApiClient;
