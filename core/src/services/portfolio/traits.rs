//! Trait for the third-party portfolio data provider

use async_trait::async_trait;

use crate::domain::value_objects::portfolio::{Airdrop, Protocol, Token, TotalBalance};

/// Read-only data source for on-chain portfolio data.
///
/// The provider is an external collaborator; every method is a direct
/// pass-through and reports failures as `Err` with a short description.
#[async_trait]
pub trait PortfolioProvider: Send + Sync {
    /// Total USD balance with per-chain breakdown
    async fn total_balance(&self, address: &str) -> Result<TotalBalance, String>;

    /// Fungible token positions
    async fn token_list(&self, address: &str) -> Result<Vec<Token>, String>;

    /// Protocols the wallet has positions in
    async fn protocol_list(&self, address: &str) -> Result<Vec<Protocol>, String>;

    /// NFT holdings, provider-shaped
    async fn nft_list(&self, address: &str) -> Result<Vec<serde_json::Value>, String>;

    /// Transaction history, provider-shaped
    async fn history_list(&self, address: &str) -> Result<Vec<serde_json::Value>, String>;

    /// Airdrop campaigns the wallet is eligible for
    async fn airdrop_list(&self, address: &str) -> Result<Vec<Airdrop>, String>;

    /// Detailed DeFi positions, optionally narrowed to one protocol
    async fn defi_details(
        &self,
        address: &str,
        protocol_id: Option<&str>,
    ) -> Result<serde_json::Value, String>;
}
