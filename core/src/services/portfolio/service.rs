//! Portfolio aggregation service.
//!
//! Builds the dashboard overview from the provider's individual endpoints.
//! Sub-fetches run concurrently and fail independently: a dead endpoint
//! costs its slot in the overview plus an entry in `errors`, never the
//! whole response.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use r3_shared::utils::validation::is_valid_wallet_address;

use crate::domain::value_objects::portfolio::{Airdrop, WalletOverview};
use crate::errors::{DomainError, DomainResult};

use super::traits::PortfolioProvider;

/// Portfolio service over an injected data provider
pub struct PortfolioService<P: PortfolioProvider> {
    provider: Arc<P>,
}

impl<P: PortfolioProvider> PortfolioService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    fn validate_address(address: &str) -> DomainResult<()> {
        if is_valid_wallet_address(address) {
            Ok(())
        } else {
            Err(DomainError::Validation {
                message: format!("Invalid wallet address format: {}", address),
            })
        }
    }

    /// Aggregate the dashboard overview for one wallet address
    pub async fn overview(&self, address: &str) -> DomainResult<WalletOverview> {
        Self::validate_address(address)?;

        let (total_balance, tokens, protocols, nfts, history) = tokio::join!(
            self.provider.total_balance(address),
            self.provider.token_list(address),
            self.provider.protocol_list(address),
            self.provider.nft_list(address),
            self.provider.history_list(address),
        );

        let mut errors = Vec::new();
        let mut keep_err = |label: &str, error: &str| {
            warn!(
                address = %address,
                fetch = %label,
                error = %error,
                event = "portfolio_fetch_failed",
                "Provider sub-fetch failed"
            );
            errors.push(format!("Failed to fetch {}", label));
        };

        let total_balance = match total_balance {
            Ok(balance) => Some(balance),
            Err(e) => {
                keep_err("total balance", &e);
                None
            }
        };
        let token_list = tokens.unwrap_or_else(|e| {
            keep_err("token list", &e);
            Vec::new()
        });
        let protocol_list = protocols.unwrap_or_else(|e| {
            keep_err("protocol list", &e);
            Vec::new()
        });
        let nft_list = nfts.unwrap_or_else(|e| {
            keep_err("NFT list", &e);
            Vec::new()
        });
        let history_list = history.unwrap_or_else(|e| {
            keep_err("transaction history", &e);
            Vec::new()
        });

        Ok(WalletOverview {
            address: address.to_string(),
            total_balance,
            token_list,
            protocol_list,
            nft_list,
            history_list,
            last_updated: Utc::now(),
            errors,
        })
    }

    /// Airdrop campaigns for one wallet address
    pub async fn airdrops(&self, address: &str) -> DomainResult<Vec<Airdrop>> {
        Self::validate_address(address)?;
        self.provider
            .airdrop_list(address)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to fetch airdrops: {}", e),
            })
    }

    /// Detailed DeFi positions, optionally narrowed to one protocol
    pub async fn defi_details(
        &self,
        address: &str,
        protocol_id: Option<&str>,
    ) -> DomainResult<serde_json::Value> {
        Self::validate_address(address)?;
        self.provider
            .defi_details(address, protocol_id)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to fetch DeFi details: {}", e),
            })
    }
}
