//! Email verification module
//!
//! This module provides the complete email OTP workflow:
//! - Code generation and dispatch through an injected email service
//! - A cancellable expiry timer driving the `Pending -> Expired` transition
//! - Code verification with attempt tracking and constant-time comparison
//! - Resend gating (a new code only after the previous one expired)
//! - An observable status snapshot for the hosting UI

mod config;
mod engine;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationConfig;
pub use engine::{format_time, VerificationEngine};
pub use service::VerificationService;
pub use traits::{EmailService, NoopHooks, VerificationHooks};
pub use types::{ChallengeStatus, SendCodeResult, VerifyCodeResult};
