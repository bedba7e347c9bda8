//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection
//! - `server` - HTTP server configuration
//! - `email` - SMTP email dispatch configuration
//! - `portfolio` - Third-party portfolio data provider configuration

pub mod email;
pub mod environment;
pub mod portfolio;
pub mod server;

use serde::{Deserialize, Serialize};

pub use email::EmailConfig;
pub use environment::Environment;
pub use portfolio::PortfolioConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Email dispatch configuration
    pub email: EmailConfig,

    /// Portfolio provider configuration
    pub portfolio: PortfolioConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            email: EmailConfig::default(),
            portfolio: PortfolioConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            email: EmailConfig::from_env(),
            portfolio: PortfolioConfig::from_env(),
        }
    }
}
