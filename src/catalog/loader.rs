use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::catalog::types::Pokemon;
use crate::config::ApiConfig;
use crate::error::FetchError;

/// Listing payload returned by `GET /pokemon?limit=N`.
///
/// Only `results` is read; `count`, `next` and `previous` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub results: Vec<ListEntry>,
}

/// A single `{ name, url }` record. Records are not validated; missing
/// fields come through as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Assigns 1-based ids in listing order.
pub fn number_entries(entries: Vec<ListEntry>) -> Vec<Pokemon> {
    entries
        .into_iter()
        .zip(1u32..)
        .map(|(entry, id)| Pokemon {
            id,
            name: entry.name,
            url: entry.url,
        })
        .collect()
}

/// Performs the single bulk fetch of the catalog.
pub struct CatalogLoader {
    client: Client,
    list_url: String,
}

impl CatalogLoader {
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds))
            .timeout(Duration::from_secs(api.timeout_seconds))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            list_url: api.list_url(),
        })
    }

    pub fn list_url(&self) -> &str {
        &self.list_url
    }

    /// Fetches and numbers the whole listing.
    pub async fn load_catalog(&self) -> Result<Vec<Pokemon>, FetchError> {
        debug!(url = %self.list_url, "fetching catalog");

        let response = self
            .client
            .get(&self.list_url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: self.list_url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.list_url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            url: self.list_url.clone(),
            source: e,
        })?;

        let listing: ListResponse =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
                url: self.list_url.clone(),
                source: e,
            })?;

        Ok(number_entries(listing.results))
    }
}
