//! Mock email service for development and testing.
//!
//! Logs messages instead of sending them, tracks a dispatch counter, and
//! can simulate transport failures.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use r3_core::services::verification::EmailService;
use r3_shared::utils::validation::{is_valid_email, mask_email};

use super::template::verification_email;

/// Mock email service
///
/// This implementation:
/// - Logs verification emails to the console instead of dispatching them
/// - Generates mock message ids
/// - Tracks the number of messages for assertions
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Last (recipient, code) pair handed to the service
    last_message: Arc<Mutex<Option<(String, String)>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl MockEmailService {
    /// Create a new mock email service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            last_message: Arc::new(Mutex::new(None)),
            simulate_failure: false,
        }
    }

    /// Create a mock service that fails every dispatch
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::new()
        }
    }

    /// Total number of messages dispatched
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// The most recent (recipient, code) pair, if any
    pub fn last_message(&self) -> Option<(String, String)> {
        self.last_message.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    /// Reset the dispatch counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<String, String> {
        if !is_valid_email(to) {
            return Err(format!("Invalid email address: {}", mask_email(to)));
        }

        if self.simulate_failure {
            warn!(
                to = %mask_email(to),
                "Mock email service simulating dispatch failure"
            );
            return Err("Simulated email dispatch failure".to_string());
        }

        let message_id = format!("mock-{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        *self
            .last_message
            .lock()
            .unwrap_or_else(|p| p.into_inner()) = Some((to.to_string(), code.to_string()));

        let rendered = verification_email(code);
        info!(
            to = %mask_email(to),
            subject = %rendered.subject,
            message_id = %message_id,
            total_sent = count,
            event = "mock_email_sent",
            "Mock verification email (not dispatched)"
        );

        Ok(message_id)
    }

    fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}
