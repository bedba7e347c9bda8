//! Verification DTOs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use r3_core::services::verification::ChallengeStatus;

static CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5}$").expect("code regex must compile"));

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Destination email address
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// Email address the challenge was created for
    #[validate(email)]
    pub email: String,

    /// 5-digit verification code
    #[validate(regex = "CODE_REGEX")]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendCodeRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetChallengeRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusQuery {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub message: String,
    /// Seconds until the dispatched code expires
    pub expires_in: u64,
    /// Seconds until a resend becomes available
    pub resend_after: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub verified: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetChallengeResponse {
    pub message: String,
}

/// Status snapshot plus the display-formatted countdown
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub status: ChallengeStatus,
    /// `time_left` rendered as zero-padded MM:SS
    pub time_left_display: String,
}
