//! # Restor3 Core
//!
//! Core business logic and domain layer for the Restor3 backend.
//! This crate contains the email verification engine, session and portfolio
//! services, domain entities, and error types that form the foundation of
//! the application architecture.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
