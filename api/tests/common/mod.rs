//! Shared test harness: app state over the mock mailer and a stub
//! portfolio provider

use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;

use r3_api::routes::AppState;
use r3_core::domain::value_objects::portfolio::{Airdrop, Protocol, Token, TotalBalance};
use r3_core::services::portfolio::{PortfolioProvider, PortfolioService};
use r3_core::services::session::{SessionService, SessionVerificationHooks};
use r3_core::services::verification::{VerificationConfig, VerificationService};
use r3_infra::email::MockEmailService;

pub const WALLET: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

/// Provider returning canned data
pub struct StubProvider;

#[async_trait]
impl PortfolioProvider for StubProvider {
    async fn total_balance(&self, _address: &str) -> Result<TotalBalance, String> {
        Ok(TotalBalance {
            total_usd_value: 1_250_000.0,
            total_usd_value_change_24h: 25_000.0,
            total_usd_value_change_24h_percentage: 2.04,
            chain_list: Vec::new(),
        })
    }

    async fn token_list(&self, _address: &str) -> Result<Vec<Token>, String> {
        Ok(Vec::new())
    }

    async fn protocol_list(&self, _address: &str) -> Result<Vec<Protocol>, String> {
        Ok(Vec::new())
    }

    async fn nft_list(&self, _address: &str) -> Result<Vec<serde_json::Value>, String> {
        Ok(Vec::new())
    }

    async fn history_list(&self, _address: &str) -> Result<Vec<serde_json::Value>, String> {
        Ok(Vec::new())
    }

    async fn airdrop_list(&self, _address: &str) -> Result<Vec<Airdrop>, String> {
        Ok(Vec::new())
    }

    async fn defi_details(
        &self,
        _address: &str,
        protocol_id: Option<&str>,
    ) -> Result<serde_json::Value, String> {
        Ok(serde_json::json!({
            "protocol_id": protocol_id,
            "positions": []
        }))
    }
}

/// Build the application state for tests. The verification delay is
/// disabled so tests run in real time without artificial sleeps.
pub fn test_state() -> (
    web::Data<AppState<MockEmailService, StubProvider>>,
    Arc<MockEmailService>,
    Arc<SessionService>,
) {
    let mailer = Arc::new(MockEmailService::new());
    let sessions = Arc::new(SessionService::new());
    let hooks = Arc::new(SessionVerificationHooks::new(Arc::clone(&sessions)));

    let config = VerificationConfig {
        verify_delay_ms: 0,
        ..VerificationConfig::default()
    };
    let verification = Arc::new(VerificationService::with_hooks(
        Arc::clone(&mailer),
        config,
        hooks,
    ));
    let portfolio = Arc::new(PortfolioService::new(Arc::new(StubProvider)));

    let state = web::Data::new(AppState {
        verification,
        sessions: Arc::clone(&sessions),
        portfolio,
    });
    (state, mailer, sessions)
}
