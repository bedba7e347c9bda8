//! Types for verification engine results and observable state

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::verification_challenge::ChallengeState;
use crate::errors::VerificationError;

/// Result of dispatching a verification code.
///
/// The code itself is deliberately absent: it only ever travels over the
/// email channel (and the development-mode log echo).
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// Message id reported by the email provider
    pub message_id: String,

    /// Wall-clock expiry of the dispatched code
    pub expires_at: DateTime<Utc>,

    /// Validity window length in seconds
    pub expires_in_seconds: u64,
}

/// Result of verifying a submitted code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCodeResult {
    /// Whether the verification succeeded
    pub success: bool,

    /// Remaining attempts after this call (absent when not applicable,
    /// e.g. expiry failures)
    pub remaining_attempts: Option<u32>,

    /// The failure, if verification did not succeed
    pub error: Option<VerificationError>,
}

impl VerifyCodeResult {
    /// Successful verification
    pub fn verified() -> Self {
        Self {
            success: true,
            remaining_attempts: None,
            error: None,
        }
    }

    /// Failed verification
    pub fn failed(error: VerificationError, remaining_attempts: Option<u32>) -> Self {
        Self {
            success: false,
            remaining_attempts,
            error: Some(error),
        }
    }

    /// User-presentable message for a failed verification
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}

/// Observable snapshot of a challenge, the UI-facing contract of the
/// engine. All fields are read-only views; mutating the challenge goes
/// through the engine's operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeStatus {
    /// An email dispatch or verification round-trip is in flight
    pub is_loading: bool,

    /// Whole seconds remaining until expiry (0 once elapsed)
    pub time_left: u64,

    /// The validity window has elapsed
    pub is_code_expired: bool,

    /// A resend is currently permitted (window elapsed, not yet verified)
    pub can_resend: bool,

    /// Failed attempts consumed against the current code
    pub attempts: u32,

    /// The fixed attempt budget
    pub max_attempts: u32,

    /// Lifecycle state of the challenge
    pub state: ChallengeState,
}
