//! SMTP email service backed by lettre.
//!
//! Delivers the verification email through a TLS relay. All transport
//! failures are caught at the trait boundary and reported as `Err`; the
//! engine decides what to do with them.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};

use r3_core::services::verification::EmailService;
use r3_shared::config::EmailConfig;
use r3_shared::utils::validation::{is_valid_email, mask_email};

use crate::InfrastructureError;

use super::template::verification_email;

/// SMTP-backed email service
pub struct SmtpEmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailService {
    /// Create an SMTP service from configuration
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        if !config.is_configured() {
            return Err(InfrastructureError::Config(
                "EMAIL_USER and EMAIL_APP_PASSWORD must be set for SMTP dispatch".to_string(),
            ));
        }

        let from: Mailbox = format!("{} <{}>", config.from_name, config.smtp_username)
            .parse()
            .map_err(|e| {
                InfrastructureError::Config(format!("Invalid from address: {}", e))
            })?;

        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.clone(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Config(format!("Invalid SMTP relay: {}", e)))?
            .credentials(credentials)
            .build();

        info!(
            smtp_host = %config.smtp_host,
            from = %mask_email(&config.smtp_username),
            "SMTP email service initialized"
        );

        Ok(Self { mailer, from })
    }

    /// Create an SMTP service from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(&EmailConfig::from_env())
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<String, String> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|e| format!("Invalid recipient address: {}", e))?;

        let rendered = verification_email(code);
        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(rendered.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                rendered.text,
                rendered.html,
            ))
            .map_err(|e| format!("Failed to build email: {}", e))?;

        match self.mailer.send(message).await {
            Ok(_) => {
                let message_id = format!("smtp-{}", uuid::Uuid::new_v4());
                info!(
                    to = %mask_email(to),
                    message_id = %message_id,
                    event = "email_sent",
                    "Verification email dispatched"
                );
                Ok(message_id)
            }
            Err(e) => {
                error!(
                    to = %mask_email(to),
                    error = %e,
                    event = "email_send_failed",
                    "SMTP dispatch failed"
                );
                Err(format!("SMTP dispatch failed: {}", e))
            }
        }
    }

    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}
