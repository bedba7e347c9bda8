//! Shared utilities and common types for the Restor3 server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response envelope
//! - Utility functions (email and wallet-address validation)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, EmailConfig, Environment, PortfolioConfig, ServerConfig};
pub use types::ApiResponse;
pub use utils::validation;
