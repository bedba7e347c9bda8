//! Session module: the explicit session context shared by the dashboard
//! and the verification flow

mod service;

pub use service::{NewSession, SessionService, SessionVerificationHooks};
