//! Configuration for the verification engine

use r3_shared::config::Environment;

use crate::domain::entities::verification_challenge::CODE_TTL_SECONDS;

/// Configuration for the verification engine.
///
/// The attempt budget is fixed by the challenge entity; this struct holds
/// the tunables around it.
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    /// Seconds before a verification code expires
    pub code_ttl_seconds: u64,

    /// Simulated round-trip delay applied before comparing a submitted
    /// code, in milliseconds (0 disables it)
    pub verify_delay_ms: u64,

    /// Echo generated codes to the diagnostic log. Must stay off outside
    /// development; `for_environment` enforces that.
    pub debug_code_echo: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: CODE_TTL_SECONDS as u64,
            verify_delay_ms: 500,
            debug_code_echo: false,
        }
    }
}

impl VerificationConfig {
    /// Derive the config for a deployment environment; the code echo is
    /// only ever enabled for debug-capable environments
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            debug_code_echo: environment.is_debug(),
            ..Default::default()
        }
    }
}
