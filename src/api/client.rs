//! PokeAPI Client
//!
//! Fetches PokeAPI resources through the shared response cache.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::error::{FetchError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for PokeAPI endpoints.
///
/// Every request is keyed by its exact URL. A cache hit is decoded without
/// touching the network; a miss is fetched and, if it succeeds and decodes,
/// stored for the next caller.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    /// Creates a client for `base_url` backed by `cache`.
    pub fn new(base_url: impl Into<String>, cache: Cache) -> Self {
        Self::with_http(Client::new(), base_url, cache)
    }

    /// Creates a client with a preconfigured HTTP client.
    pub fn with_http(http: Client, base_url: impl Into<String>, cache: Cache) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == Endpoints ==
    /// Fetches one page of location areas.
    pub async fn location_areas(&self, offset: u32, limit: u32) -> Result<LocationAreaPage> {
        self.fetch_json(self.location_areas_url(offset, limit)).await
    }

    /// Fetches a single location area with its encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch_json(format!("{}/location-area/{}/", self.base_url, name))
            .await
    }

    /// Fetches a single Pokemon.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch_json(format!("{}/pokemon/{}/", self.base_url, name))
            .await
    }

    pub fn location_areas_url(&self, offset: u32, limit: u32) -> String {
        format!(
            "{}/location-area?offset={}&limit={}",
            self.base_url, offset, limit
        )
    }

    // == Fetch ==
    /// Reads `url` from the cache or the network and decodes it as JSON.
    async fn fetch_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        if let Some(body) = self.cache.get(&url).await {
            debug!(%url, bytes = body.len(), "Cache hit");
            return serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
                url,
                cached: true,
                source,
            });
        }

        debug!(%url, "Cache miss, fetching");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "PokeAPI request failed");
            return Err(FetchError::Status { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let decoded = serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.clone(),
            cached: false,
            source,
        })?;

        self.cache.add(url, body).await;
        Ok(decoded)
    }
}
