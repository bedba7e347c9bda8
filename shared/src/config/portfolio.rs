//! Portfolio data provider configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the third-party blockchain-data API client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortfolioConfig {
    /// Base URL of the data provider
    pub base_url: String,

    /// API access key sent in the `AccessKey` header
    pub access_key: String,

    /// Timeout for provider requests in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://api.debank.com"),
            access_key: String::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl PortfolioConfig {
    /// Read provider settings from `DEBANK_API_BASE` / `DEBANK_API_KEY` /
    /// `DEBANK_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("DEBANK_API_BASE").unwrap_or(defaults.base_url),
            access_key: env::var("DEBANK_API_KEY").unwrap_or_default(),
            request_timeout_secs: env::var("DEBANK_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
