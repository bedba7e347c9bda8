//! HTTP client for the DeBank-style blockchain-data API.
//!
//! Authenticates with an `AccessKey` header and decodes JSON straight into
//! the core value objects. Every method is a read-only pass-through.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use r3_core::domain::value_objects::portfolio::{Airdrop, Protocol, Token, TotalBalance};
use r3_core::services::portfolio::PortfolioProvider;
use r3_shared::config::PortfolioConfig;

use crate::InfrastructureError;

/// Client for the third-party portfolio data API
pub struct DebankClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl DebankClient {
    /// Create a client from configuration
    pub fn new(config: &PortfolioConfig) -> Result<Self, InfrastructureError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Config(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_key: config.access_key.clone(),
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(&PortfolioConfig::from_env())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, InfrastructureError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, event = "provider_request", "Portfolio provider request");

        let response = self
            .http
            .get(&url)
            .query(params)
            .header("Accept", "application/json")
            .header("AccessKey", &self.access_key)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, event = "provider_request_failed", "Provider request failed");
                InfrastructureError::Provider(format!("Request to {} failed: {}", path, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(
                url = %url,
                status = %status,
                event = "provider_request_failed",
                "Provider returned an error status"
            );
            return Err(InfrastructureError::Provider(format!(
                "Request to {} failed with status {}",
                path, status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            InfrastructureError::Provider(format!("Failed to decode {} response: {}", path, e))
        })
    }
}

#[async_trait]
impl PortfolioProvider for DebankClient {
    async fn total_balance(&self, address: &str) -> Result<TotalBalance, String> {
        self.get_json("/user/total_balance", &[("id", address)])
            .await
            .map_err(|e| e.to_string())
    }

    async fn token_list(&self, address: &str) -> Result<Vec<Token>, String> {
        self.get_json("/user/token_list", &[("id", address), ("is_all", "false")])
            .await
            .map_err(|e| e.to_string())
    }

    async fn protocol_list(&self, address: &str) -> Result<Vec<Protocol>, String> {
        self.get_json("/user/protocol_list", &[("id", address)])
            .await
            .map_err(|e| e.to_string())
    }

    async fn nft_list(&self, address: &str) -> Result<Vec<serde_json::Value>, String> {
        self.get_json("/user/nft_list", &[("id", address)])
            .await
            .map_err(|e| e.to_string())
    }

    async fn history_list(&self, address: &str) -> Result<Vec<serde_json::Value>, String> {
        self.get_json("/user/history_list", &[("id", address)])
            .await
            .map_err(|e| e.to_string())
    }

    async fn airdrop_list(&self, address: &str) -> Result<Vec<Airdrop>, String> {
        self.get_json("/user/airdrop_list", &[("id", address)])
            .await
            .map_err(|e| e.to_string())
    }

    async fn defi_details(
        &self,
        address: &str,
        protocol_id: Option<&str>,
    ) -> Result<serde_json::Value, String> {
        match protocol_id {
            Some(protocol_id) => self
                .get_json("/user/protocol", &[("id", address), ("protocol_id", protocol_id)])
                .await
                .map_err(|e| e.to_string()),
            None => self
                .get_json("/user/protocol_list", &[("id", address)])
                .await
                .map_err(|e| e.to_string()),
        }
    }
}
