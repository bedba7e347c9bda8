//! Email dispatch implementations
//!
//! `SmtpEmailService` delivers through a TLS SMTP relay; `MockEmailService`
//! logs instead of sending and is the default whenever SMTP credentials are
//! absent. Both implement the core `EmailService` trait and never panic
//! across it.

mod mock;
mod smtp;
pub mod template;

#[cfg(test)]
mod tests;

pub use mock::MockEmailService;
pub use smtp::SmtpEmailService;
