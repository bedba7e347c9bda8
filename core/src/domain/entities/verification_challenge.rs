//! Verification challenge entity for email OTP verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum number of verification attempts allowed per code
pub const MAX_ATTEMPTS: u32 = 3;

/// Length of the verification code
pub const CODE_LENGTH: usize = 5;

/// Lifetime of a verification code in seconds
pub const CODE_TTL_SECONDS: i64 = 60;

/// Lifecycle state of a verification challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeState {
    /// A live code is awaiting verification
    Pending,
    /// The code's validity window elapsed before a successful verification
    Expired,
    /// The code was matched; terminal success state
    Verified,
    /// All attempts were consumed by mismatches; terminal until resend
    Failed,
}

/// One email OTP challenge: a live code, its validity window, and the
/// attempt budget since the code was (re)generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationChallenge {
    /// Destination email address; immutable for the challenge's lifetime
    pub email: String,

    /// The 5-digit verification code currently live for this challenge
    pub code: String,

    /// Number of failed verification attempts since (re)generation
    pub attempts: u32,

    /// Current lifecycle state
    pub state: ChallengeState,

    /// Timestamp when the current code was generated
    pub created_at: DateTime<Utc>,

    /// Timestamp when the current code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationChallenge {
    /// Creates a new challenge with a freshly generated 5-digit code and
    /// the default 60-second validity window
    pub fn new(email: String) -> Self {
        Self::with_ttl(email, CODE_TTL_SECONDS)
    }

    /// Creates a new challenge with a custom validity window in seconds
    pub fn with_ttl(email: String, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            email,
            code: Self::generate_code(),
            attempts: 0,
            state: ChallengeState::Pending,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
        }
    }

    /// Generates a random 5-digit code with no leading zero.
    ///
    /// Each code is drawn uniformly from `10000..=99999`; no uniqueness
    /// across regenerations is guaranteed or required.
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(10_000..=99_999);
        code.to_string()
    }

    /// Replaces the live code with a fresh one, resetting the attempt
    /// counter and the validity window. Used on resend.
    pub fn regenerate(&mut self, ttl_seconds: i64) {
        self.code = Self::generate_code();
        self.attempts = 0;
        self.state = ChallengeState::Pending;
        self.created_at = Utc::now();
        self.expires_at = self.created_at + Duration::seconds(ttl_seconds);
    }

    /// Checks whether the validity window has elapsed (wall-clock view;
    /// the engine drives the actual `Pending -> Expired` transition)
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Whether the attempt budget is spent
    pub fn attempts_exhausted(&self) -> bool {
        self.attempts >= MAX_ATTEMPTS
    }

    /// Remaining verification attempts (0 if exhausted)
    pub fn remaining_attempts(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    /// Constant-time comparison of an entered code against the live code
    pub fn matches(&self, entered_code: &str) -> bool {
        entered_code.len() == self.code.len()
            && constant_time_eq(entered_code.as_bytes(), self.code.as_bytes())
    }

    /// Records a mismatch: consumes one attempt and, when the budget is
    /// spent, moves the challenge to `Failed`. Returns the remaining count.
    pub fn record_mismatch(&mut self) -> u32 {
        self.attempts = (self.attempts + 1).min(MAX_ATTEMPTS);
        if self.attempts_exhausted() {
            self.state = ChallengeState::Failed;
        }
        self.remaining_attempts()
    }

    /// Marks the challenge verified (terminal success)
    pub fn mark_verified(&mut self) {
        self.state = ChallengeState::Verified;
    }

    /// Marks the challenge expired; only a pending challenge transitions
    /// (a failed or verified challenge keeps its state)
    pub fn mark_expired(&mut self) {
        if self.state == ChallengeState::Pending {
            self.state = ChallengeState::Expired;
        }
    }

    /// Time remaining until expiry, or zero if already expired
    pub fn time_until_expiry(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_challenge() {
        let email = "user@example.com".to_string();
        let challenge = VerificationChallenge::new(email.clone());

        assert_eq!(challenge.email, email);
        assert_eq!(challenge.code.len(), CODE_LENGTH);
        assert_eq!(challenge.attempts, 0);
        assert_eq!(challenge.state, ChallengeState::Pending);
        assert!(!challenge.is_expired());
        assert_eq!(
            challenge.expires_at,
            challenge.created_at + Duration::seconds(CODE_TTL_SECONDS)
        );
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..100 {
            let challenge = VerificationChallenge::new("user@example.com".to_string());
            assert_eq!(challenge.code.len(), CODE_LENGTH);
            assert!(challenge.code.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = challenge.code.parse().expect("code should be numeric");
            assert!((10_000..=99_999).contains(&num));
        }
    }

    #[test]
    fn test_code_has_no_leading_zero() {
        for _ in 0..100 {
            let challenge = VerificationChallenge::new("user@example.com".to_string());
            assert_ne!(challenge.code.as_bytes()[0], b'0');
        }
    }

    #[test]
    fn test_matches_live_code() {
        let challenge = VerificationChallenge::new("user@example.com".to_string());
        let code = challenge.code.clone();

        assert!(challenge.matches(&code));
        assert!(!challenge.matches("00000"));
        assert!(!challenge.matches("1234")); // wrong length
    }

    #[test]
    fn test_record_mismatch_consumes_attempts() {
        let mut challenge = VerificationChallenge::new("user@example.com".to_string());

        assert_eq!(challenge.record_mismatch(), 2);
        assert_eq!(challenge.state, ChallengeState::Pending);
        assert_eq!(challenge.record_mismatch(), 1);
        assert_eq!(challenge.state, ChallengeState::Pending);
        assert_eq!(challenge.record_mismatch(), 0);
        assert_eq!(challenge.state, ChallengeState::Failed);
        assert!(challenge.attempts_exhausted());

        // The counter never exceeds the budget
        challenge.record_mismatch();
        assert_eq!(challenge.attempts, MAX_ATTEMPTS);
    }

    #[test]
    fn test_regenerate_replaces_code_and_resets() {
        let mut challenge = VerificationChallenge::new("user@example.com".to_string());
        let original_code = challenge.code.clone();

        challenge.record_mismatch();
        challenge.record_mismatch();
        challenge.record_mismatch();
        assert_eq!(challenge.state, ChallengeState::Failed);

        challenge.regenerate(CODE_TTL_SECONDS);

        assert_eq!(challenge.attempts, 0);
        assert_eq!(challenge.state, ChallengeState::Pending);
        assert_eq!(challenge.code.len(), CODE_LENGTH);
        // Only the current code matches; the prior one is dead unless the
        // fresh draw happened to collide with it.
        if challenge.code != original_code {
            assert!(!challenge.matches(&original_code));
        }
    }

    #[test]
    fn test_expired_challenge() {
        let mut challenge = VerificationChallenge::with_ttl("user@example.com".to_string(), -1);

        assert!(challenge.is_expired());
        challenge.mark_expired();
        assert_eq!(challenge.state, ChallengeState::Expired);
    }

    #[test]
    fn test_mark_expired_leaves_terminal_states() {
        let mut challenge = VerificationChallenge::new("user@example.com".to_string());
        challenge.mark_verified();
        challenge.mark_expired();
        assert_eq!(challenge.state, ChallengeState::Verified);

        let mut failed = VerificationChallenge::new("user@example.com".to_string());
        failed.record_mismatch();
        failed.record_mismatch();
        failed.record_mismatch();
        failed.mark_expired();
        assert_eq!(failed.state, ChallengeState::Failed);
    }

    #[test]
    fn test_time_until_expiry() {
        let challenge = VerificationChallenge::new("user@example.com".to_string());
        let remaining = challenge.time_until_expiry();
        assert!(remaining <= Duration::seconds(CODE_TTL_SECONDS));
        assert!(remaining > Duration::seconds(CODE_TTL_SECONDS - 2));

        let expired = VerificationChallenge::with_ttl("user@example.com".to_string(), -1);
        assert_eq!(expired.time_until_expiry(), Duration::zero());
    }

    #[test]
    fn test_serialization_round_trip() {
        let challenge = VerificationChallenge::new("user@example.com".to_string());
        let json = serde_json::to_string(&challenge).unwrap();
        let deserialized: VerificationChallenge = serde_json::from_str(&json).unwrap();
        assert_eq!(challenge, deserialized);
    }
}
