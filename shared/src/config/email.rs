//! Email dispatch configuration

use serde::{Deserialize, Serialize};
use std::env;

/// SMTP email dispatch configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP relay host (e.g. smtp.gmail.com)
    pub smtp_host: String,

    /// SMTP username (also used as the from address)
    pub smtp_username: String,

    /// SMTP password or app password
    pub smtp_password: String,

    /// Display name used in the From header
    pub from_name: String,

    /// Whether to use the mock email service instead of a real SMTP relay
    #[serde(default)]
    pub use_mock: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("localhost"),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_name: String::from("Restor3"),
            use_mock: true,
        }
    }
}

impl EmailConfig {
    /// Read SMTP settings from `EMAIL_SMTP_HOST` / `EMAIL_USER` /
    /// `EMAIL_APP_PASSWORD` / `EMAIL_FROM_NAME`.
    ///
    /// The mock service is selected when `EMAIL_USE_MOCK=true` or when the
    /// SMTP credentials are absent.
    pub fn from_env() -> Self {
        let smtp_username = env::var("EMAIL_USER").unwrap_or_default();
        let smtp_password = env::var("EMAIL_APP_PASSWORD").unwrap_or_default();
        let use_mock = env::var("EMAIL_USE_MOCK")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false)
            || smtp_username.is_empty()
            || smtp_password.is_empty();

        Self {
            smtp_host: env::var("EMAIL_SMTP_HOST")
                .unwrap_or_else(|_| String::from("smtp.gmail.com")),
            smtp_username,
            smtp_password,
            from_name: env::var("EMAIL_FROM_NAME").unwrap_or_else(|_| String::from("Restor3")),
            use_mock,
        }
    }

    /// True when a real SMTP relay is fully configured
    pub fn is_configured(&self) -> bool {
        !self.smtp_username.is_empty() && !self.smtp_password.is_empty()
    }
}
