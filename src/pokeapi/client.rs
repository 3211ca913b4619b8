//! PokeAPI client module
//!
//! Read-only, unauthenticated lookups against the public PokeAPI.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::core::models::SpeciesRecord;
use crate::errors::BotError;

const POKEAPI_BASE: &str = "https://pokeapi.co/api/v2";

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Species lookup seam. Production uses [`PokeApiClient`]; tests substitute
/// in-memory fakes.
#[async_trait]
pub trait SpeciesLookup: Send + Sync {
    async fn lookup(&self, name: &str) -> Result<SpeciesRecord, BotError>;
}

/// Client for the public PokeAPI.
#[derive(Debug, Default)]
pub struct PokeApiClient;

impl PokeApiClient {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeciesLookup for PokeApiClient {
    /// Fetch one Pokémon by name.
    ///
    /// The name is lowercased before the request; PokeAPI slugs always are.
    /// A 404 maps to `NotFound`, any other non-success status to
    /// `UpstreamError`.
    async fn lookup(&self, name: &str) -> Result<SpeciesRecord, BotError> {
        let slug = name.to_lowercase();
        let url = format!("{POKEAPI_BASE}/pokemon/{}", urlencoding::encode(&slug));

        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(|e| BotError::UpstreamError(format!("request failed: {e}")))?;

        if let Some(error) = error_for_status(response.status(), &slug) {
            return Err(error);
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| BotError::UpstreamError(format!("invalid response body: {e}")))?;

        let record = SpeciesRecord::from_api_payload(&payload);
        debug!(
            name = %record.name,
            types = record.types.len(),
            has_image = record.image_url.is_some(),
            "Fetched species record"
        );

        Ok(record)
    }
}

/// Map a lookup response status to its error, if it is one.
fn error_for_status(status: StatusCode, slug: &str) -> Option<BotError> {
    if status == StatusCode::NOT_FOUND {
        Some(BotError::NotFound(slug.to_string()))
    } else if !status.is_success() {
        Some(BotError::UpstreamError(format!(
            "PokeAPI returned HTTP {status}"
        )))
    } else {
        None
    }
}
