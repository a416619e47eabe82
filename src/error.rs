//! Error types for the catalog loader.
//!
//! Every failure of the remote call is a [`FetchError`]. The store never
//! hands these to the presentation layer; it logs them and exposes
//! [`FETCH_FAILURE_MESSAGE`] instead.

use thiserror::Error;

/// User-facing message shown after any failed catalog load.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch Pokémon data. Please try again later.";

/// Errors that can occur while fetching the catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or body transfer failure.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error("Upstream returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// The body was not a listing payload.
    #[error("Failed to decode catalog from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Short machine-readable kind, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Client(_) => "client",
            FetchError::Transport { .. } => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode { .. } => "decode",
        }
    }
}
