//! The verification engine: one challenge's full lifecycle.
//!
//! The engine owns code generation, the expiry timer, attempt counting,
//! resend gating, and the verification outcome. Expiry is driven by an
//! explicit cancellable timer task rather than polling, so disposing the
//! engine (or replacing the code) reliably cancels the pending countdown.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task::JoinHandle;
use tokio::time::{sleep, sleep_until, Duration, Instant};
use tracing::{debug, error, info, warn};

use r3_shared::utils::validation::mask_email;

use crate::domain::entities::verification_challenge::{
    ChallengeState, VerificationChallenge, MAX_ATTEMPTS,
};
use crate::errors::{DomainResult, VerificationError};

use super::config::VerificationConfig;
use super::traits::{EmailService, VerificationHooks};
use super::types::{ChallengeStatus, SendCodeResult, VerifyCodeResult};

/// Format a second count as a zero-padded `MM:SS` string.
/// Pure function of its input.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Mutable engine state, shared with the expiry timer task
struct EngineInner {
    challenge: Option<VerificationChallenge>,
    /// Monotonic deadline of the live code; source of truth for `time_left`
    deadline: Option<Instant>,
    /// Set by the timer task (or a late read) once the deadline passed
    deadline_elapsed: bool,
    /// An email dispatch or verification round-trip is in flight
    is_loading: bool,
    /// Handle of the pending expiry timer, if any
    timer: Option<JoinHandle<()>>,
    /// Bumped whenever the timer is cancelled so a stale task that already
    /// awoke cannot touch a successor challenge
    epoch: u64,
}

impl EngineInner {
    fn new() -> Self {
        Self {
            challenge: None,
            deadline: None,
            deadline_elapsed: false,
            is_loading: false,
            timer: None,
            epoch: 0,
        }
    }

    fn cancel_timer(&mut self) {
        self.epoch += 1;
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    fn deadline_reached(&self) -> bool {
        self.deadline_elapsed
            || self
                .deadline
                .map(|deadline| Instant::now() >= deadline)
                .unwrap_or(false)
    }

    /// Whole seconds remaining, rounded up so a freshly issued code reads
    /// as its full window
    fn time_left(&self) -> u64 {
        if self.deadline_elapsed {
            return 0;
        }
        self.deadline
            .map(|deadline| {
                let remaining = deadline.saturating_duration_since(Instant::now());
                ((remaining.as_millis() + 999) / 1000) as u64
            })
            .unwrap_or(0)
    }
}

/// What a verify call decided while holding the state lock; hooks fire
/// after the lock is released
enum VerifyDecision {
    AlreadyVerified,
    Expired,
    Exhausted,
    Matched,
    Mismatched { remaining: u32 },
}

/// Verification engine for a single email address.
///
/// One engine owns at most one live challenge; callers serialize their
/// operations (the hosting UI disables its controls while a request is in
/// flight).
pub struct VerificationEngine<M: EmailService + 'static> {
    email: String,
    mailer: Arc<M>,
    hooks: Arc<dyn VerificationHooks>,
    config: VerificationConfig,
    inner: Arc<Mutex<EngineInner>>,
}

impl<M: EmailService + 'static> VerificationEngine<M> {
    /// Create an engine for one destination address
    pub fn new(
        email: String,
        mailer: Arc<M>,
        hooks: Arc<dyn VerificationHooks>,
        config: VerificationConfig,
    ) -> Self {
        Self {
            email,
            mailer,
            hooks,
            config,
            inner: Arc::new(Mutex::new(EngineInner::new())),
        }
    }

    /// The destination address this engine verifies
    pub fn email(&self) -> &str {
        &self.email
    }

    fn lock(&self) -> MutexGuard<'_, EngineInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create (or replace) the challenge: generate a fresh code, dispatch
    /// it, and start the expiry countdown.
    ///
    /// The new challenge is only installed after the email dispatch
    /// succeeded; a send failure leaves any previous state untouched.
    pub async fn send_code(&self) -> DomainResult<SendCodeResult> {
        self.dispatch_code(false).await
    }

    /// Regenerate and redispatch the code. Only permitted once the current
    /// code's window has elapsed; until then no email is sent.
    pub async fn resend(&self) -> DomainResult<SendCodeResult> {
        {
            let inner = self.lock();
            let Some(challenge) = inner.challenge.as_ref() else {
                return Err(VerificationError::ChallengeNotFound.into());
            };
            let can_resend =
                inner.deadline_reached() && challenge.state != ChallengeState::Verified;
            if !can_resend {
                let seconds_remaining = inner.time_left();
                warn!(
                    email = %mask_email(&self.email),
                    seconds_remaining,
                    event = "resend_rejected",
                    "Resend requested while the current code is still live"
                );
                return Err(VerificationError::ResendUnavailable { seconds_remaining }.into());
            }
        }
        self.dispatch_code(true).await
    }

    async fn dispatch_code(&self, is_resend: bool) -> DomainResult<SendCodeResult> {
        {
            let mut inner = self.lock();
            inner.is_loading = true;
        }

        let challenge = VerificationChallenge::with_ttl(
            self.email.clone(),
            self.config.code_ttl_seconds as i64,
        );

        if is_resend {
            info!(
                email = %mask_email(&self.email),
                event = "otp_resent",
                "Regenerated verification code for resend"
            );
        } else {
            info!(
                email = %mask_email(&self.email),
                event = "otp_generated",
                "Generated new verification code"
            );
        }

        // Development-only diagnostic echo; the flag cannot be set by
        // production configuration.
        if self.config.debug_code_echo {
            debug!(
                email = %self.email,
                code = %challenge.code,
                event = "otp_debug_echo",
                "Verification code (development echo)"
            );
        }

        let sent = self
            .mailer
            .send_verification_code(&self.email, &challenge.code)
            .await;

        let message_id = match sent {
            Ok(message_id) => message_id,
            Err(reason) => {
                error!(
                    email = %mask_email(&self.email),
                    error = %reason,
                    event = "otp_send_failed",
                    "Failed to dispatch verification email"
                );
                self.lock().is_loading = false;
                let failure = VerificationError::EmailSendFailure;
                self.hooks
                    .on_verification_error(&self.email, &failure.to_string());
                return Err(failure.into());
            }
        };

        let expires_at = challenge.expires_at;
        let deadline = Instant::now() + Duration::from_secs(self.config.code_ttl_seconds);

        let mut inner = self.lock();
        inner.cancel_timer();
        inner.challenge = Some(challenge);
        inner.deadline = Some(deadline);
        inner.deadline_elapsed = false;
        inner.is_loading = false;
        let epoch = inner.epoch;
        inner.timer = Some(self.spawn_expiry_timer(deadline, epoch));
        drop(inner);

        Ok(SendCodeResult {
            message_id,
            expires_at,
            expires_in_seconds: self.config.code_ttl_seconds,
        })
    }

    fn spawn_expiry_timer(&self, deadline: Instant, epoch: u64) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        let email = self.email.clone();
        tokio::spawn(async move {
            sleep_until(deadline).await;
            let mut inner = inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if inner.epoch != epoch {
                // A newer code replaced this countdown between wake-up and
                // lock acquisition.
                return;
            }
            inner.deadline_elapsed = true;
            if let Some(challenge) = inner.challenge.as_mut() {
                challenge.mark_expired();
                if challenge.state == ChallengeState::Expired {
                    info!(
                        email = %mask_email(&email),
                        event = "otp_expired",
                        "Verification code expired"
                    );
                }
            }
        })
    }

    /// Verify a submitted code against the live challenge.
    ///
    /// Precondition order: expiry first (no attempt consumed), then the
    /// attempt budget (no comparison performed), then a constant-time
    /// match. Business failures are reported in the result; `Err` is
    /// reserved for a missing challenge.
    pub async fn verify(&self, entered_code: &str) -> DomainResult<VerifyCodeResult> {
        {
            let mut inner = self.lock();
            if inner.challenge.is_none() {
                return Err(VerificationError::ChallengeNotFound.into());
            }
            inner.is_loading = true;
        }

        // Simulated network round-trip; purely a UX affordance.
        if self.config.verify_delay_ms > 0 {
            sleep(Duration::from_millis(self.config.verify_delay_ms)).await;
        }

        let mut inner = self.lock();
        inner.is_loading = false;
        let deadline_reached = inner.deadline_reached();

        let decision = match inner.challenge.as_mut() {
            None => return Err(VerificationError::ChallengeNotFound.into()),
            Some(challenge) if challenge.state == ChallengeState::Verified => {
                VerifyDecision::AlreadyVerified
            }
            Some(challenge) if deadline_reached => {
                challenge.mark_expired();
                VerifyDecision::Expired
            }
            Some(challenge) if challenge.attempts_exhausted() => VerifyDecision::Exhausted,
            Some(challenge) if challenge.matches(entered_code) => {
                challenge.mark_verified();
                VerifyDecision::Matched
            }
            Some(challenge) => VerifyDecision::Mismatched {
                remaining: challenge.record_mismatch(),
            },
        };

        if matches!(decision, VerifyDecision::Matched) {
            // No transition leaves Verified, so the countdown is moot.
            inner.cancel_timer();
        }
        drop(inner);

        match decision {
            VerifyDecision::AlreadyVerified => Ok(VerifyCodeResult::verified()),
            VerifyDecision::Matched => {
                info!(
                    email = %mask_email(&self.email),
                    event = "otp_verified",
                    "Verification code accepted"
                );
                self.hooks.on_verification_success(&self.email);
                Ok(VerifyCodeResult::verified())
            }
            VerifyDecision::Expired => {
                let failure = VerificationError::CodeExpired;
                warn!(
                    email = %mask_email(&self.email),
                    event = "otp_verification_failed",
                    reason = "expired",
                    "Verification attempted after code expiry"
                );
                self.hooks
                    .on_verification_error(&self.email, &failure.to_string());
                Ok(VerifyCodeResult::failed(failure, None))
            }
            VerifyDecision::Exhausted => {
                let failure = VerificationError::AttemptsExhausted;
                warn!(
                    email = %mask_email(&self.email),
                    event = "otp_verification_failed",
                    reason = "attempts_exhausted",
                    "Verification attempted with no attempts remaining"
                );
                self.hooks
                    .on_verification_error(&self.email, &failure.to_string());
                Ok(VerifyCodeResult::failed(failure, Some(0)))
            }
            VerifyDecision::Mismatched { remaining } => {
                let failure = if remaining == 0 {
                    VerificationError::AttemptsExhausted
                } else {
                    VerificationError::InvalidCode { remaining }
                };
                warn!(
                    email = %mask_email(&self.email),
                    remaining_attempts = remaining,
                    event = "otp_verification_failed",
                    reason = "mismatch",
                    "Submitted code did not match"
                );
                self.hooks
                    .on_verification_error(&self.email, &failure.to_string());
                Ok(VerifyCodeResult::failed(failure, Some(remaining)))
            }
        }
    }

    /// Clear all challenge state without sending email and cancel any
    /// pending countdown. A later send starts from a clean slate.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.cancel_timer();
        inner.challenge = None;
        inner.deadline = None;
        inner.deadline_elapsed = false;
        inner.is_loading = false;
        debug!(
            email = %mask_email(&self.email),
            event = "challenge_reset",
            "Verification challenge cleared"
        );
    }

    /// Observable snapshot of the live challenge, or `None` when no
    /// challenge exists
    pub fn status(&self) -> Option<ChallengeStatus> {
        let inner = self.lock();
        let challenge = inner.challenge.as_ref()?;
        let deadline_reached = inner.deadline_reached();

        // A pending challenge whose deadline just passed reads as expired
        // even if the timer task has not been scheduled yet.
        let mut state = challenge.state;
        if deadline_reached && state == ChallengeState::Pending {
            state = ChallengeState::Expired;
        }

        Some(ChallengeStatus {
            is_loading: inner.is_loading,
            time_left: inner.time_left(),
            is_code_expired: deadline_reached,
            can_resend: deadline_reached && state != ChallengeState::Verified,
            attempts: challenge.attempts,
            max_attempts: MAX_ATTEMPTS,
            state,
        })
    }
}

#[cfg(test)]
mod format_tests {
    use super::format_time;

    #[test]
    fn test_format_time_zero() {
        assert_eq!(format_time(0), "00:00");
    }

    #[test]
    fn test_format_time_minutes_and_seconds() {
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(60), "01:00");
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(600), "10:00");
    }
}
