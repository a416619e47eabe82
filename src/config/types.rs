use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote catalog endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root, without a trailing `/pokemon` segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound on the number of records requested in the single fetch.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_limit() -> u32 {
    1025
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            limit: default_limit(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl ApiConfig {
    /// Full listing URL, e.g. `https://pokeapi.co/api/v2/pokemon?limit=1025`.
    pub fn list_url(&self) -> String {
        format!(
            "{}/pokemon?limit={}",
            self.base_url.trim_end_matches('/'),
            self.limit
        )
    }
}
