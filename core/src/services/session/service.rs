//! In-memory session registry.
//!
//! Sessions are process-local: the OAuth provider owns durable identity,
//! this service only tracks what the dashboard adds on top (wallet links,
//! email-verification progress) for the lifetime of the process.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Deserialize;
use tracing::{info, warn};

use r3_shared::utils::validation::{is_valid_email, is_valid_wallet_address, mask_email};

use crate::domain::entities::session::{Session, WalletKind};
use crate::errors::{DomainError, DomainResult};
use crate::services::verification::VerificationHooks;

/// Input for establishing a session: the opaque result of an OAuth
/// sign-in, as far as this system is concerned
#[derive(Debug, Clone, Deserialize)]
pub struct NewSession {
    pub user_id: Option<String>,
    pub email: String,
    pub display_name: Option<String>,
    pub provider: String,
}

/// In-memory session registry keyed by user id
#[derive(Default)]
pub struct SessionService {
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record a freshly authenticated user ("session established" signal).
    /// Re-establishing an existing user's session replaces it.
    pub fn establish(&self, new_session: NewSession) -> DomainResult<Session> {
        if !is_valid_email(&new_session.email) {
            return Err(DomainError::Validation {
                message: format!(
                    "Invalid email address format: {}",
                    mask_email(&new_session.email)
                ),
            });
        }

        let session = Session::new(
            new_session.user_id,
            new_session.email,
            new_session.display_name,
            new_session.provider,
        );
        info!(
            user_id = %session.user_id,
            provider = %session.provider,
            event = "session_established",
            "Session established"
        );
        self.lock()
            .insert(session.user_id.clone(), session.clone());
        Ok(session)
    }

    /// Fetch a session by user id
    pub fn get(&self, user_id: &str) -> DomainResult<Session> {
        self.lock()
            .get(user_id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("session {}", user_id),
            })
    }

    /// Link a wallet address into the given slot, validating the format
    pub fn link_wallet(
        &self,
        user_id: &str,
        kind: WalletKind,
        address: &str,
    ) -> DomainResult<Session> {
        if !is_valid_wallet_address(address) {
            return Err(DomainError::Validation {
                message: format!("Invalid wallet address format: {}", address),
            });
        }

        let mut sessions = self.lock();
        let session = sessions
            .get_mut(user_id)
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("session {}", user_id),
            })?;
        session.link_wallet(kind, address.to_string());
        info!(
            user_id = %user_id,
            kind = ?kind,
            event = "wallet_linked",
            "Wallet address linked to session"
        );
        Ok(session.clone())
    }

    /// Mark every session holding this email address as email-verified
    pub fn mark_email_verified(&self, email: &str) {
        let mut sessions = self.lock();
        let mut matched = false;
        for session in sessions.values_mut() {
            if session.email == email {
                session.email_verified = true;
                matched = true;
            }
        }
        if matched {
            info!(
                email = %mask_email(email),
                event = "email_verified",
                "Session email marked verified"
            );
        } else {
            warn!(
                email = %mask_email(email),
                event = "email_verified_no_session",
                "Email verified but no session holds this address"
            );
        }
    }

    /// Drop a session (sign-out). Safe to call for an unknown user.
    pub fn sign_out(&self, user_id: &str) {
        if self.lock().remove(user_id).is_some() {
            info!(user_id = %user_id, event = "session_closed", "Session signed out");
        }
    }
}

/// Hook adapter: verification success marks the owning session's email
/// as verified
pub struct SessionVerificationHooks {
    sessions: Arc<SessionService>,
}

impl SessionVerificationHooks {
    pub fn new(sessions: Arc<SessionService>) -> Self {
        Self { sessions }
    }
}

impl VerificationHooks for SessionVerificationHooks {
    fn on_verification_success(&self, email: &str) {
        self.sessions.mark_email_verified(email);
    }
}
