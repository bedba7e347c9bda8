//! Domain-specific error types and error handling.

use thiserror::Error;

fn attempts_noun(remaining: &u32) -> &'static str {
    if *remaining == 1 {
        "attempt"
    } else {
        "attempts"
    }
}

/// Errors produced by the email verification engine.
///
/// Every variant maps to one user-visible failure; messages are short and
/// actionable because they are surfaced to the verification UI verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Failed to send verification code. Please try again.")]
    EmailSendFailure,

    #[error("Verification code has expired. Please request a new one.")]
    CodeExpired,

    #[error("Invalid code. {remaining} {} remaining.", attempts_noun(.remaining))]
    InvalidCode { remaining: u32 },

    #[error("Too many failed attempts. Please request a new code.")]
    AttemptsExhausted,

    #[error("Please wait {seconds_remaining} seconds before requesting a new code.")]
    ResendUnavailable { seconds_remaining: u64 },

    #[error("No active verification challenge for this email.")]
    ChallengeNotFound,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Verification(#[from] VerificationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
