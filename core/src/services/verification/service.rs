//! Verification service: one engine per email address.
//!
//! The HTTP layer talks to this façade; it enforces the one-live-challenge
//! rule per address and routes operations to the owning engine.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use r3_shared::utils::validation::mask_email;

use crate::domain::entities::verification_challenge::ChallengeState;
use crate::errors::{DomainError, DomainResult, VerificationError};

use super::config::VerificationConfig;
use super::engine::VerificationEngine;
use super::traits::{EmailService, NoopHooks, VerificationHooks};
use super::types::{ChallengeStatus, SendCodeResult, VerifyCodeResult};

/// Verification service managing the engines for all in-flight challenges
pub struct VerificationService<M: EmailService + 'static> {
    mailer: Arc<M>,
    hooks: Arc<dyn VerificationHooks>,
    config: VerificationConfig,
    engines: Mutex<HashMap<String, Arc<VerificationEngine<M>>>>,
}

impl<M: EmailService + 'static> VerificationService<M> {
    /// Create a service with no lifecycle observers
    pub fn new(mailer: Arc<M>, config: VerificationConfig) -> Self {
        Self::with_hooks(mailer, config, Arc::new(NoopHooks))
    }

    /// Create a service whose engines report transitions to `hooks`
    pub fn with_hooks(
        mailer: Arc<M>,
        config: VerificationConfig,
        hooks: Arc<dyn VerificationHooks>,
    ) -> Self {
        Self {
            mailer,
            hooks,
            config,
            engines: Mutex::new(HashMap::new()),
        }
    }

    fn lock_engines(&self) -> MutexGuard<'_, HashMap<String, Arc<VerificationEngine<M>>>> {
        self.engines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn engine_for(&self, email: &str) -> Arc<VerificationEngine<M>> {
        let mut engines = self.lock_engines();
        Arc::clone(engines.entry(email.to_string()).or_insert_with(|| {
            Arc::new(VerificationEngine::new(
                email.to_string(),
                Arc::clone(&self.mailer),
                Arc::clone(&self.hooks),
                self.config.clone(),
            ))
        }))
    }

    fn existing_engine(&self, email: &str) -> Option<Arc<VerificationEngine<M>>> {
        self.lock_engines().get(email).cloned()
    }

    /// Create a challenge for an address and dispatch its code.
    ///
    /// Rejected with `ResendUnavailable` while a previous code for the
    /// same address is still live; that is the resend cooldown applied to
    /// direct send requests as well.
    pub async fn send_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        if !self.mailer.is_valid_email(email) {
            return Err(DomainError::Validation {
                message: format!("Invalid email address format: {}", mask_email(email)),
            });
        }

        let engine = self.engine_for(email);
        if let Some(status) = engine.status() {
            if !status.can_resend && status.state != ChallengeState::Verified {
                warn!(
                    email = %mask_email(email),
                    seconds_remaining = status.time_left,
                    event = "send_code_rate_limited",
                    "Code requested while a live code exists"
                );
                return Err(VerificationError::ResendUnavailable {
                    seconds_remaining: status.time_left,
                }
                .into());
            }
        }

        engine.send_code().await
    }

    /// Verify a submitted code for an address
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<VerifyCodeResult> {
        let Some(engine) = self.existing_engine(email) else {
            return Err(VerificationError::ChallengeNotFound.into());
        };
        engine.verify(code).await
    }

    /// Resend a fresh code for an address (gated by the engine)
    pub async fn resend_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        let Some(engine) = self.existing_engine(email) else {
            return Err(VerificationError::ChallengeNotFound.into());
        };
        engine.resend().await
    }

    /// Drop an address's challenge entirely (modal dismissed). Safe to
    /// call when no challenge exists.
    pub fn reset(&self, email: &str) {
        let engine = self.lock_engines().remove(email);
        if let Some(engine) = engine {
            engine.reset();
            info!(
                email = %mask_email(email),
                event = "verification_session_closed",
                "Verification challenge discarded"
            );
        }
    }

    /// Observable snapshot for an address's challenge
    pub fn status(&self, email: &str) -> DomainResult<ChallengeStatus> {
        self.existing_engine(email)
            .and_then(|engine| engine.status())
            .ok_or_else(|| VerificationError::ChallengeNotFound.into())
    }
}
