//! Mock implementations for verification tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::services::verification::traits::{EmailService, VerificationHooks};

/// Mock email service recording every dispatched code
pub struct MockEmailService {
    pub sent_messages: Arc<Mutex<Vec<(String, String)>>>,
    should_fail: AtomicBool,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn failing() -> Self {
        let service = Self::new();
        service.should_fail.store(true, Ordering::SeqCst);
        service
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn sent_count(&self) -> usize {
        self.sent_messages.lock().unwrap().len()
    }

    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent_messages
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<String, String> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("email service error".to_string());
        }
        self.sent_messages
            .lock()
            .unwrap()
            .push((to.to_string(), code.to_string()));
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }

    fn is_valid_email(&self, email: &str) -> bool {
        r3_shared::utils::validation::is_valid_email(email)
    }
}

/// Hooks implementation recording every invocation
#[derive(Default)]
pub struct RecordingHooks {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<(String, String)>>,
}

impl RecordingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success_count(&self) -> usize {
        self.successes.lock().unwrap().len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.lock().unwrap().len()
    }

    pub fn last_error_message(&self) -> Option<String> {
        self.errors
            .lock()
            .unwrap()
            .last()
            .map(|(_, message)| message.clone())
    }
}

impl VerificationHooks for RecordingHooks {
    fn on_verification_success(&self, email: &str) {
        self.successes.lock().unwrap().push(email.to_string());
    }

    fn on_verification_error(&self, email: &str, message: &str) {
        self.errors
            .lock()
            .unwrap()
            .push((email.to_string(), message.to_string()));
    }
}
