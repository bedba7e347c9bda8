//! Portfolio value objects mirroring the third-party blockchain-data API.
//!
//! These are pass-through shapes: the provider owns their semantics, this
//! system only decodes, aggregates, and re-serves them. Unknown or missing
//! optional fields are tolerated on decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fungible token position held by a wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub chain: String,
    pub name: String,
    pub symbol: String,
    pub display_symbol: Option<String>,
    pub optimized_symbol: Option<String>,
    pub decimals: u32,
    pub logo_url: Option<String>,
    pub protocol_id: Option<String>,
    pub price: Option<f64>,
    pub is_verified: Option<bool>,
    pub is_core: Option<bool>,
    pub is_wallet: Option<bool>,
    pub time_at: Option<f64>,
    pub amount: f64,
    #[serde(default)]
    pub raw_amount: f64,
}

/// USD-denominated stats for one portfolio position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub asset_usd_value: f64,
    pub debt_usd_value: f64,
    pub net_usd_value: f64,
}

/// One position inside a protocol (a pool, a vault, a farm, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub stats: PortfolioStats,
    pub update_at: f64,
    pub name: String,
    pub pool_id: Option<String>,
    #[serde(default)]
    pub detail_types: Vec<String>,
    #[serde(default)]
    pub detail: serde_json::Value,
    #[serde(default)]
    pub proxy_detail: serde_json::Value,
}

/// A DeFi protocol a wallet has interacted with, including its positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protocol {
    pub id: String,
    pub chain: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub site_url: Option<String>,
    pub has_supported_portfolio: Option<bool>,
    pub tvl: Option<f64>,
    #[serde(default)]
    pub portfolio_item_list: Vec<PortfolioItem>,
    pub total_usd_value: Option<f64>,
    pub last_interaction_at: Option<f64>,
}

/// Airdrop campaign status as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirdropStatus {
    Upcoming,
    Ongoing,
    Ended,
}

/// An airdrop campaign a wallet is eligible for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airdrop {
    pub id: String,
    pub chain: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub site_url: Option<String>,
    pub start_at: i64,
    pub end_at: i64,
    pub status: AirdropStatus,
    pub total_supply: f64,
    pub claimed_count: u64,
    #[serde(default)]
    pub token_list: Vec<Token>,
    pub description: Option<String>,
    pub rules: Option<String>,
}

/// Per-chain USD balance breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainBalance {
    pub chain: String,
    pub usd_value: f64,
    #[serde(default)]
    pub usd_value_change_24h: f64,
    #[serde(default)]
    pub usd_value_change_24h_percentage: f64,
}

/// Total USD balance across all chains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalBalance {
    pub total_usd_value: f64,
    #[serde(default)]
    pub total_usd_value_change_24h: f64,
    #[serde(default)]
    pub total_usd_value_change_24h_percentage: f64,
    #[serde(default)]
    pub chain_list: Vec<ChainBalance>,
}

/// Aggregated dashboard view for one wallet address. Sub-fetches that
/// failed leave their slot empty and record an entry in `errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletOverview {
    pub address: String,
    pub total_balance: Option<TotalBalance>,
    #[serde(default)]
    pub token_list: Vec<Token>,
    #[serde(default)]
    pub protocol_list: Vec<Protocol>,
    #[serde(default)]
    pub nft_list: Vec<serde_json::Value>,
    #[serde(default)]
    pub history_list: Vec<serde_json::Value>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_decodes_with_optional_fields_absent() {
        let json = serde_json::json!({
            "id": "eth",
            "chain": "eth",
            "name": "Ether",
            "symbol": "ETH",
            "decimals": 18,
            "amount": 1.25
        });
        let token: Token = serde_json::from_value(json).unwrap();
        assert_eq!(token.symbol, "ETH");
        assert!(token.price.is_none());
        assert_eq!(token.raw_amount, 0.0);
    }

    #[test]
    fn test_airdrop_status_wire_format() {
        let status: AirdropStatus = serde_json::from_str("\"ongoing\"").unwrap();
        assert_eq!(status, AirdropStatus::Ongoing);
        assert_eq!(serde_json::to_string(&AirdropStatus::Ended).unwrap(), "\"ended\"");
    }
}
