//! # Restor3 Infrastructure
//!
//! Implementations of the external capabilities the core depends on:
//! SMTP email dispatch (plus a mock for development and tests) and the
//! third-party portfolio data provider client.

pub mod email;
pub mod portfolio;

use thiserror::Error;

/// Infrastructure-layer errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Email dispatch error: {0}")]
    Email(String),

    #[error("Portfolio provider error: {0}")]
    Provider(String),
}
