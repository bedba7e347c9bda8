//! Session DTOs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use r3_core::domain::entities::session::WalletKind;

static WALLET_ADDRESS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("address regex must compile"));

/// Opaque result of an OAuth sign-in handed to this backend
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EstablishSessionRequest {
    pub user_id: Option<String>,

    #[validate(email)]
    pub email: String,

    pub display_name: Option<String>,

    /// Identity provider name ("google", "apple")
    #[validate(length(min = 1, max = 32))]
    pub provider: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LinkWalletRequest {
    /// Which slot to link into
    pub kind: WalletKind,

    /// EVM wallet address
    #[validate(regex = "WALLET_ADDRESS_REGEX")]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignOutResponse {
    pub message: String,
}
