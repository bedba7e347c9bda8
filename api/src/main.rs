use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;
use tracing_subscriber::EnvFilter;

use r3_core::services::portfolio::PortfolioService;
use r3_core::services::session::{SessionService, SessionVerificationHooks};
use r3_core::services::verification::{
    EmailService, VerificationConfig, VerificationService,
};
use r3_infra::email::{MockEmailService, SmtpEmailService};
use r3_infra::portfolio::DebankClient;
use r3_shared::config::AppConfig;

use r3_api::app::create_app;
use r3_api::routes::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing; log-crate records (actix access logs included)
    // are captured through the same subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!(
        "Starting Restor3 API server ({} environment)",
        config.environment
    );

    // The mock mailer is the fallback whenever SMTP credentials are absent,
    // so a development checkout runs without any external account.
    if config.email.use_mock {
        info!("Email dispatch: mock service (codes are logged, not sent)");
        run_server(config.clone(), Arc::new(MockEmailService::new())).await
    } else {
        let smtp = SmtpEmailService::new(&config.email).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
        })?;
        info!("Email dispatch: SMTP relay {}", config.email.smtp_host);
        run_server(config.clone(), Arc::new(smtp)).await
    }
}

async fn run_server<M>(config: AppConfig, mailer: Arc<M>) -> std::io::Result<()>
where
    M: EmailService + 'static,
{
    let sessions = Arc::new(SessionService::new());

    // Verification success feeds straight back into the session context.
    let hooks = Arc::new(SessionVerificationHooks::new(Arc::clone(&sessions)));
    let verification = Arc::new(VerificationService::with_hooks(
        mailer,
        VerificationConfig::for_environment(config.environment),
        hooks,
    ));

    let provider = DebankClient::new(&config.portfolio)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let portfolio = Arc::new(PortfolioService::new(Arc::new(provider)));

    let app_state = web::Data::new(AppState {
        verification,
        sessions,
        portfolio,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await
}
