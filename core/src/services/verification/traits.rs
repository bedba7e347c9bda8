//! Traits for email dispatch and verification lifecycle hooks

use async_trait::async_trait;

/// Trait for the outbound email capability the engine depends on.
///
/// Implementations must not panic across this boundary; any transport
/// problem is reported as `Err` with a short description.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send a verification code to an address. Returns a provider message
    /// id on success.
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<String, String>;

    /// Check if the email address format is plausible
    fn is_valid_email(&self, email: &str) -> bool;
}

/// Lifecycle hooks invoked by the verification engine.
///
/// Each hook fires at most once per relevant transition. The default
/// implementations do nothing, so hosts only override what they observe.
pub trait VerificationHooks: Send + Sync {
    /// The submitted code matched; the challenge is now verified
    fn on_verification_success(&self, email: &str) {
        let _ = email;
    }

    /// A send or verify operation failed; `message` is user-presentable
    fn on_verification_error(&self, email: &str, message: &str) {
        let _ = (email, message);
    }
}

/// Hooks implementation that observes nothing
pub struct NoopHooks;

impl VerificationHooks for NoopHooks {}
