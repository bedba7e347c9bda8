//! Session entity: the explicit, injectable session context that the
//! dashboard and the verification flow share.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which wallet slot an address is linked into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletKind {
    Main,
    Backup,
}

/// One authenticated user's session: the opaque OAuth identity plus the
/// wallet links and email-verification progress made on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque user identifier from the identity provider
    pub user_id: String,

    /// Email address from the identity provider
    pub email: String,

    /// Display name from the identity provider
    pub display_name: Option<String>,

    /// Identity provider name ("google", "apple"); opaque to this system
    pub provider: String,

    /// Linked main wallet address, if any
    pub main_wallet: Option<String>,

    /// Linked backup wallet address, if any
    pub backup_wallet: Option<String>,

    /// Whether the email-verification step has been passed
    pub email_verified: bool,

    /// When the session was established
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session for a freshly authenticated user. A missing
    /// provider user id gets a locally generated one.
    pub fn new(
        user_id: Option<String>,
        email: String,
        display_name: Option<String>,
        provider: String,
    ) -> Self {
        Self {
            user_id: user_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            email,
            display_name,
            provider,
            main_wallet: None,
            backup_wallet: None,
            email_verified: false,
            created_at: Utc::now(),
        }
    }

    /// A session counts as wallet-connected exactly when a main wallet
    /// is linked
    pub fn is_wallet_connected(&self) -> bool {
        self.main_wallet.is_some()
    }

    /// Links an address into the given wallet slot, replacing any
    /// previous link
    pub fn link_wallet(&mut self, kind: WalletKind, address: String) {
        match kind {
            WalletKind::Main => self.main_wallet = Some(address),
            WalletKind::Backup => self.backup_wallet = Some(address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_generates_id_when_absent() {
        let session = Session::new(
            None,
            "user@example.com".to_string(),
            None,
            "google".to_string(),
        );
        assert!(!session.user_id.is_empty());
        assert!(!session.email_verified);
        assert!(!session.is_wallet_connected());
    }

    #[test]
    fn test_wallet_connected_requires_main_wallet() {
        let mut session = Session::new(
            Some("u-1".to_string()),
            "user@example.com".to_string(),
            Some("User".to_string()),
            "apple".to_string(),
        );

        session.link_wallet(
            WalletKind::Backup,
            "0xde0b295669a9fd93d5f28d9ec85e40f4cb697bae".to_string(),
        );
        assert!(!session.is_wallet_connected());

        session.link_wallet(
            WalletKind::Main,
            "0x52908400098527886E0F7030069857D2E4169EE7".to_string(),
        );
        assert!(session.is_wallet_connected());
    }
}
