//! HTTP access to the PokeAPI endpoints
//!
//! One `ApiClient` is built per run with a fixed timeout and user
//! agent. The generic `fetch_json` primitive returns an explicit
//! `Result`; callers decide whether a failure is fatal (generation
//! listing), a per-identifier failure (pokemon), or best-effort
//! (species).

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{GenerationResponse, PokemonResponse, SpeciesResponse};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Read-only client for the three PokeAPI endpoints a run touches
pub struct ApiClient {
    http_client: reqwest::Client,
    api_base: String,
}

impl ApiClient {
    /// Create a client from the run configuration
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be created.
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!("pokefetch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the generation listing endpoint
    pub fn generation_url(&self, generation: u32) -> String {
        format!("{}/generation/{}", self.api_base, generation)
    }

    /// Fetch a URL and decode its JSON body
    ///
    /// Checks the HTTP status before attempting to parse the body, so a
    /// non-2xx answer surfaces as [`Error::HttpStatus`] rather than a
    /// decode failure on an HTML error page.
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {url}");
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Fetch the species names belonging to a generation, in API order
    ///
    /// Any failure (transport, status, decode, or a missing
    /// `pokemon_species` field) yields an empty list. The caller
    /// treats an empty list as fatal; this method only reports it.
    pub async fn fetch_generation(&self, generation: u32) -> Vec<String> {
        let url = self.generation_url(generation);
        match self.fetch_json::<GenerationResponse>(&url).await {
            Ok(listing) => listing
                .pokemon_species
                .unwrap_or_default()
                .into_iter()
                .filter_map(|species| species.name)
                .collect(),
            Err(err) => {
                warn!("failed to fetch generation listing: {err}");
                Vec::new()
            }
        }
    }

    /// Fetch the primary per-Pokemon record (id, name, sprites)
    ///
    /// # Errors
    /// Returns error on any transport, status, or decode failure; the
    /// caller records the identifier as failed.
    pub async fn fetch_pokemon(&self, name: &str) -> Result<PokemonResponse> {
        let url = format!("{}/pokemon/{}", self.api_base, name);
        self.fetch_json(&url).await
    }

    /// Fetch the species record carrying the flavor text entries
    ///
    /// # Errors
    /// Returns error on any transport, status, or decode failure; the
    /// caller degrades to an empty description.
    pub async fn fetch_species(&self, name: &str) -> Result<SpeciesResponse> {
        let url = format!("{}/pokemon-species/{}", self.api_base, name);
        self.fetch_json(&url).await
    }
}
