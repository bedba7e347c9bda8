//! Route handlers

pub mod portfolio;
pub mod session;
pub mod verification;

use std::sync::Arc;

use r3_core::services::portfolio::{PortfolioProvider, PortfolioService};
use r3_core::services::session::SessionService;
use r3_core::services::verification::{EmailService, VerificationService};

/// Application state that holds the shared services
pub struct AppState<M, P>
where
    M: EmailService + 'static,
    P: PortfolioProvider + 'static,
{
    pub verification: Arc<VerificationService<M>>,
    pub sessions: Arc<SessionService>,
    pub portfolio: Arc<PortfolioService<P>>,
}
